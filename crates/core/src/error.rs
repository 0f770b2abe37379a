//! Errors.

use std::fmt;

use crate::identity::IdentityKind;

/// Wire schema an identity is converted to or from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schema {
    /// `s2a.proto.Identity`.
    Legacy,
    /// `s2a.proto.v2.Identity`.
    V2,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Legacy => write!(f, "legacy"),
            Schema::V2 => write!(f, "v2"),
        }
    }
}

/// Error converting an identity to or from its wire representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The schema has no representation for this kind of identity.
    #[error("unsupported identity type: {kind} identities cannot be expressed in the {schema} schema")]
    UnsupportedIdentityType {
        /// Kind of the rejected identity.
        kind: IdentityKind,
        /// Target schema.
        schema: Schema,
    },
    /// A received message carries no identity at all.
    #[error("{schema} identity message has no identity set")]
    EmptyIdentity {
        /// Schema of the received message.
        schema: Schema,
    },
    /// A received v2 message sets a named identity and attributes at once.
    #[error("v2 identity message sets both a named identity and attributes")]
    AmbiguousIdentity,
}

/// Error converting a session context to or from its wire representation.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// Wire TLS version outside the known enumeration.
    #[error("unknown TLS version: {0}")]
    UnknownTlsVersion(i32),
    /// Wire ciphersuite outside the known enumeration.
    #[error("unknown ciphersuite: {0}")]
    UnknownCiphersuite(i32),
    /// One of the embedded identities could not be converted.
    #[error("invalid {field}: {source}")]
    Identity {
        /// Name of the context field holding the identity.
        field: &'static str,
        /// Underlying conversion error.
        #[source]
        source: IdentityError,
    },
    /// The bytes are not a valid `S2AContext` message.
    #[error("failed to decode session context: {0}")]
    Decode(#[from] prost::DecodeError),
}

impl ContextError {
    pub(crate) fn identity(field: &'static str) -> impl FnOnce(IdentityError) -> Self {
        move |source| ContextError::Identity { field, source }
    }
}
