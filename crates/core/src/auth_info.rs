//! Authentication information exposed to the RPC layer after a handshake.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    connection::{Ciphersuite, TlsVersion},
    context::SessionContext,
    error::ContextError,
    log::trace,
    Identity,
};

/// Authentication type reported for S2A-secured connections.
pub const AUTH_TYPE: &str = "s2a";

/// Security level of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityLevel {
    /// No security.
    NoSecurity,
    /// Integrity protection only.
    IntegrityOnly,
    /// Confidentiality and integrity protection.
    PrivacyAndIntegrity,
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityLevel::NoSecurity => write!(f, "NoSecurity"),
            SecurityLevel::IntegrityOnly => write!(f, "IntegrityOnly"),
            SecurityLevel::PrivacyAndIntegrity => write!(f, "PrivacyAndIntegrity"),
        }
    }
}

/// Read-only view over the [`SessionContext`] of an established connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    context: SessionContext,
    security_level: SecurityLevel,
}

impl AuthInfo {
    /// Creates auth info for a connection described by `context`.
    ///
    /// Every S2A ciphersuite provides confidentiality and integrity.
    pub fn new(context: SessionContext) -> Self {
        trace!(
            version = %context.tls_version(),
            ciphersuite = %context.ciphersuite(),
            resumed = context.is_handshake_resumed(),
            "created auth info"
        );

        Self {
            context,
            security_level: SecurityLevel::PrivacyAndIntegrity,
        }
    }

    /// Creates auth info from a session context received on the wire.
    pub fn from_proto(msg: s2a_proto::S2aContext) -> Result<Self, ContextError> {
        SessionContext::try_from(msg).map(Self::new)
    }

    /// Returns the authentication type, always [`AUTH_TYPE`].
    pub fn auth_type(&self) -> &'static str {
        AUTH_TYPE
    }

    /// Returns the security level.
    pub fn security_level(&self) -> SecurityLevel {
        self.security_level
    }

    /// Returns the underlying session context.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Returns the negotiated application protocol.
    pub fn application_protocol(&self) -> &str {
        self.context.application_protocol()
    }

    /// Returns the TLS version.
    pub fn tls_version(&self) -> TlsVersion {
        self.context.tls_version()
    }

    /// Returns the ciphersuite.
    pub fn ciphersuite(&self) -> Ciphersuite {
        self.context.ciphersuite()
    }

    /// Returns the identity of the peer.
    pub fn peer_identity(&self) -> Option<&Identity> {
        self.context.peer_identity()
    }

    /// Returns the local identity.
    pub fn local_identity(&self) -> Option<&Identity> {
        self.context.local_identity()
    }

    /// Returns the SHA-256 digest of the peer certificate.
    pub fn peer_cert_fingerprint(&self) -> &[u8] {
        self.context.peer_cert_fingerprint()
    }

    /// Returns the SHA-256 digest of the local certificate.
    pub fn local_cert_fingerprint(&self) -> &[u8] {
        self.context.local_cert_fingerprint()
    }

    /// Returns `true` if the handshake resumed a cached session.
    pub fn is_handshake_resumed(&self) -> bool {
        self.context.is_handshake_resumed()
    }
}

impl From<SessionContext> for AuthInfo {
    fn from(context: SessionContext) -> Self {
        Self::new(context)
    }
}
