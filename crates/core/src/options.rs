//! Client and server options carrying the identities used in a handshake.

use s2a_proto::{common, v2};
use serde::{Deserialize, Serialize};

use crate::{
    convert::{to_legacy_identities, to_legacy_identity, to_v2_identities, to_v2_identity},
    error::IdentityError,
    Identity,
};

/// How the S2A verifies the peer's certificate chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMode {
    /// Let the S2A pick its default verification.
    #[default]
    Unspecified,
    /// Verify the SPIFFE ID in the peer certificate.
    Spiffe,
    /// Verify connections to Google services.
    ConnectToGoogle,
}

/// Options of the client side of a handshake.
#[derive(derive_builder::Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ClientOptions {
    /// Address of the S2A.
    #[builder(setter(into))]
    s2a_address: String,
    /// Identity the client presents. If unset the S2A picks its default.
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    local_identity: Option<Identity>,
    /// Identities the client expects the server to have. Empty accepts any.
    #[builder(setter(into), default)]
    #[serde(default)]
    target_identities: Vec<Identity>,
    /// Peer verification mode.
    #[builder(default)]
    #[serde(default)]
    verification_mode: VerificationMode,
}

impl ClientOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        validate_address(self.s2a_address.as_deref())
    }
}

impl ClientOptions {
    /// Creates a new builder for `ClientOptions`.
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::default()
    }

    /// Returns the address of the S2A.
    pub fn s2a_address(&self) -> &str {
        &self.s2a_address
    }

    /// Returns the local identity.
    pub fn local_identity(&self) -> Option<&Identity> {
        self.local_identity.as_ref()
    }

    /// Returns the target identities.
    pub fn target_identities(&self) -> &[Identity] {
        &self.target_identities
    }

    /// Returns the verification mode.
    pub fn verification_mode(&self) -> VerificationMode {
        self.verification_mode
    }

    /// Returns the local identity in the legacy schema.
    pub fn legacy_local_identity(&self) -> Result<Option<common::Identity>, IdentityError> {
        to_legacy_identity(self.local_identity.as_ref())
    }

    /// Returns the target identities in the legacy schema.
    pub fn legacy_target_identities(&self) -> Result<Vec<common::Identity>, IdentityError> {
        to_legacy_identities(&self.target_identities)
    }

    /// Returns the local identity in the v2 schema.
    pub fn v2_local_identity(&self) -> Result<Option<v2::Identity>, IdentityError> {
        to_v2_identity(self.local_identity.as_ref())
    }

    /// Returns the target identities in the v2 schema.
    pub fn v2_target_identities(&self) -> Result<Vec<v2::Identity>, IdentityError> {
        to_v2_identities(&self.target_identities)
    }
}

/// Options of the server side of a handshake.
#[derive(derive_builder::Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ServerOptions {
    /// Address of the S2A.
    #[builder(setter(into))]
    s2a_address: String,
    /// Identities the server may present. The S2A picks one based on the
    /// client's request, or its default if empty.
    #[builder(setter(into), default)]
    #[serde(default)]
    local_identities: Vec<Identity>,
    /// Peer verification mode.
    #[builder(default)]
    #[serde(default)]
    verification_mode: VerificationMode,
}

impl ServerOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        validate_address(self.s2a_address.as_deref())
    }
}

impl ServerOptions {
    /// Creates a new builder for `ServerOptions`.
    pub fn builder() -> ServerOptionsBuilder {
        ServerOptionsBuilder::default()
    }

    /// Returns the address of the S2A.
    pub fn s2a_address(&self) -> &str {
        &self.s2a_address
    }

    /// Returns the local identities.
    pub fn local_identities(&self) -> &[Identity] {
        &self.local_identities
    }

    /// Returns the verification mode.
    pub fn verification_mode(&self) -> VerificationMode {
        self.verification_mode
    }

    /// Returns the local identities in the legacy schema.
    pub fn legacy_local_identities(&self) -> Result<Vec<common::Identity>, IdentityError> {
        to_legacy_identities(&self.local_identities)
    }

    /// Returns the local identities in the v2 schema.
    pub fn v2_local_identities(&self) -> Result<Vec<v2::Identity>, IdentityError> {
        to_v2_identities(&self.local_identities)
    }
}

// `None` is left to the builder, which reports the field as uninitialized.
fn validate_address(address: Option<&str>) -> Result<(), String> {
    match address {
        Some(address) if address.trim().is_empty() => {
            Err("s2a_address must not be empty".to_string())
        }
        _ => Ok(()),
    }
}
