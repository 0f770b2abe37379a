//! Session context reported once a handshake completes.

use prost::Message;
use serde::{Deserialize, Serialize};

use crate::{
    connection::{Ciphersuite, TlsVersion},
    convert::{from_legacy_identity, to_legacy_identity},
    error::ContextError,
    Identity,
};

/// Security parameters negotiated by a completed handshake.
///
/// Populated once by the handshake engine and read-only afterwards. On the
/// wire it is an `s2a.proto.S2AContext` whose identities use the legacy
/// schema.
#[derive(derive_builder::Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Application protocol negotiated for the connection, e.g. `grpc`.
    #[builder(setter(into), default)]
    application_protocol: String,
    /// TLS version used to set up the session.
    tls_version: TlsVersion,
    /// Negotiated ciphersuite.
    ciphersuite: Ciphersuite,
    /// Authenticated identity of the peer.
    #[builder(setter(into, strip_option), default)]
    peer_identity: Option<Identity>,
    /// Local identity used during session setup.
    #[builder(setter(into, strip_option), default)]
    local_identity: Option<Identity>,
    /// SHA-256 digest of the peer certificate, may be empty.
    #[builder(setter(into), default)]
    peer_cert_fingerprint: Vec<u8>,
    /// SHA-256 digest of the local certificate, may be empty.
    #[builder(setter(into), default)]
    local_cert_fingerprint: Vec<u8>,
    /// Whether a cached session was reused to resume the handshake.
    #[builder(default)]
    is_handshake_resumed: bool,
}

impl SessionContext {
    /// Creates a new builder for `SessionContext`.
    pub fn builder() -> SessionContextBuilder {
        SessionContextBuilder::default()
    }

    /// Returns the negotiated application protocol.
    pub fn application_protocol(&self) -> &str {
        &self.application_protocol
    }

    /// Returns the TLS version.
    pub fn tls_version(&self) -> TlsVersion {
        self.tls_version
    }

    /// Returns the ciphersuite.
    pub fn ciphersuite(&self) -> Ciphersuite {
        self.ciphersuite
    }

    /// Returns the identity of the peer.
    pub fn peer_identity(&self) -> Option<&Identity> {
        self.peer_identity.as_ref()
    }

    /// Returns the local identity.
    pub fn local_identity(&self) -> Option<&Identity> {
        self.local_identity.as_ref()
    }

    /// Returns the SHA-256 digest of the peer certificate.
    pub fn peer_cert_fingerprint(&self) -> &[u8] {
        &self.peer_cert_fingerprint
    }

    /// Returns the SHA-256 digest of the local certificate.
    pub fn local_cert_fingerprint(&self) -> &[u8] {
        &self.local_cert_fingerprint
    }

    /// Returns `true` if the handshake resumed a cached session.
    pub fn is_handshake_resumed(&self) -> bool {
        self.is_handshake_resumed
    }

    /// Encodes the context as an `S2AContext` message.
    ///
    /// # Errors
    ///
    /// Fails if an identity cannot be expressed in the legacy schema.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ContextError> {
        Ok(s2a_proto::S2aContext::try_from(self)?.encode_to_vec())
    }

    /// Decodes a context from an `S2AContext` message.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ContextError> {
        Self::try_from(s2a_proto::S2aContext::decode(bytes)?)
    }
}

impl TryFrom<&SessionContext> for s2a_proto::S2aContext {
    type Error = ContextError;

    fn try_from(ctx: &SessionContext) -> Result<Self, Self::Error> {
        Ok(Self {
            application_protocol: ctx.application_protocol.clone(),
            tls_version: s2a_proto::TlsVersion::from(ctx.tls_version).into(),
            ciphersuite: s2a_proto::Ciphersuite::from(ctx.ciphersuite).into(),
            peer_identity: to_legacy_identity(ctx.peer_identity.as_ref())
                .map_err(ContextError::identity("peer_identity"))?,
            local_identity: to_legacy_identity(ctx.local_identity.as_ref())
                .map_err(ContextError::identity("local_identity"))?,
            peer_cert_fingerprint: ctx.peer_cert_fingerprint.clone(),
            local_cert_fingerprint: ctx.local_cert_fingerprint.clone(),
            is_handshake_resumed: ctx.is_handshake_resumed,
        })
    }
}

impl TryFrom<s2a_proto::S2aContext> for SessionContext {
    type Error = ContextError;

    fn try_from(msg: s2a_proto::S2aContext) -> Result<Self, Self::Error> {
        Ok(Self {
            tls_version: TlsVersion::try_from(msg.tls_version)?,
            ciphersuite: Ciphersuite::try_from(msg.ciphersuite)?,
            peer_identity: from_legacy_identity(msg.peer_identity.as_ref())
                .map_err(ContextError::identity("peer_identity"))?,
            local_identity: from_legacy_identity(msg.local_identity.as_ref())
                .map_err(ContextError::identity("local_identity"))?,
            application_protocol: msg.application_protocol,
            peer_cert_fingerprint: msg.peer_cert_fingerprint,
            local_cert_fingerprint: msg.local_cert_fingerprint,
            is_handshake_resumed: msg.is_handshake_resumed,
        })
    }
}
