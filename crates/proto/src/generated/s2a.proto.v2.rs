// @generated
// Generated from: proto/v2/common.proto
// Manual check-in for offline builds.
// Regenerate with `cargo build -p s2a-proto --features regenerate`.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Identity {
    /// Additional identity-specific attributes. Only set when no branch of
    /// `identity_oneof` is set.
    #[prost(btree_map = "string, string", tag = "3")]
    pub attributes: ::prost::alloc::collections::BTreeMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    #[prost(oneof = "identity::IdentityOneof", tags = "1, 2, 4")]
    pub identity_oneof: ::core::option::Option<identity::IdentityOneof>,
}
/// Nested message and enum types in `Identity`.
pub mod identity {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum IdentityOneof {
        /// The SPIFFE ID of a connection endpoint.
        #[prost(string, tag = "1")]
        SpiffeId(::prost::alloc::string::String),
        /// The hostname of a connection endpoint.
        #[prost(string, tag = "2")]
        Hostname(::prost::alloc::string::String),
        /// The UID of a connection endpoint.
        #[prost(string, tag = "4")]
        Uid(::prost::alloc::string::String),
    }
}
