// @generated
// Generated from: proto/common.proto, proto/s2a_context.proto
// Manual check-in for offline builds.
// Regenerate with `cargo build -p s2a-proto --features regenerate`.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Identity {
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
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct S2aContext {
    /// The application protocol negotiated for this connection, e.g., 'grpc'.
    #[prost(string, tag = "1")]
    pub application_protocol: ::prost::alloc::string::String,
    /// The TLS version number that the S2A's handshaker module used to set up the
    /// session.
    #[prost(enumeration = "TlsVersion", tag = "2")]
    pub tls_version: i32,
    /// The TLS ciphersuite negotiated by the S2A's handshaker module.
    #[prost(enumeration = "Ciphersuite", tag = "3")]
    pub ciphersuite: i32,
    /// The authenticated identity of the peer.
    #[prost(message, optional, tag = "4")]
    pub peer_identity: ::core::option::Option<Identity>,
    /// The local identity used during session setup.
    #[prost(message, optional, tag = "5")]
    pub local_identity: ::core::option::Option<Identity>,
    /// The SHA256 hash of the peer certificate used in the handshake.
    #[prost(bytes = "vec", tag = "6")]
    pub peer_cert_fingerprint: ::prost::alloc::vec::Vec<u8>,
    /// The SHA256 hash of the local certificate used in the handshake.
    #[prost(bytes = "vec", tag = "7")]
    pub local_cert_fingerprint: ::prost::alloc::vec::Vec<u8>,
    /// Set to true if a cached session was reused to resume the handshake.
    #[prost(bool, tag = "8")]
    pub is_handshake_resumed: bool,
}
/// The ciphersuites supported by S2A. The name determines the confidentiality,
/// and authentication ciphers as well as the hash algorithm used for PRF in
/// TLS 1.2 or HKDF in TLS 1.3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Ciphersuite {
    Aes128GcmSha256 = 0,
    Aes256GcmSha384 = 1,
    Chacha20Poly1305Sha256 = 2,
}
impl Ciphersuite {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Aes128GcmSha256 => "AES_128_GCM_SHA256",
            Self::Aes256GcmSha384 => "AES_256_GCM_SHA384",
            Self::Chacha20Poly1305Sha256 => "CHACHA20_POLY1305_SHA256",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "AES_128_GCM_SHA256" => Some(Self::Aes128GcmSha256),
            "AES_256_GCM_SHA384" => Some(Self::Aes256GcmSha384),
            "CHACHA20_POLY1305_SHA256" => Some(Self::Chacha20Poly1305Sha256),
            _ => None,
        }
    }
}
/// The TLS versions supported by S2A's handshaker module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TlsVersion {
    Tls12 = 0,
    Tls13 = 1,
}
impl TlsVersion {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Tls12 => "TLS1_2",
            Self::Tls13 => "TLS1_3",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "TLS1_2" => Some(Self::Tls12),
            "TLS1_3" => Some(Self::Tls13),
            _ => None,
        }
    }
}
