use s2a_proto::common::{self, identity::IdentityOneof};

use crate::{
    error::{IdentityError, Schema},
    log::debug,
    Identity,
};

/// Converts an identity to the legacy wire message.
///
/// Returns `Ok(None)` if `identity` is `None`.
///
/// # Errors
///
/// Returns [`IdentityError::UnsupportedIdentityType`] for
/// [`Identity::Unspecified`] and [`Identity::Custom`], which the legacy schema
/// cannot express.
pub fn to_legacy_identity(
    identity: Option<&Identity>,
) -> Result<Option<common::Identity>, IdentityError> {
    identity.map(common::Identity::try_from).transpose()
}

/// Converts a list of identities to legacy wire messages, failing on the first
/// identity the legacy schema cannot express.
pub fn to_legacy_identities<'a, I>(identities: I) -> Result<Vec<common::Identity>, IdentityError>
where
    I: IntoIterator<Item = &'a Identity>,
{
    identities
        .into_iter()
        .map(common::Identity::try_from)
        .collect()
}

/// Converts a legacy wire message received from a peer to an identity.
///
/// Returns `Ok(None)` if `msg` is `None`.
///
/// # Errors
///
/// Returns [`IdentityError::EmptyIdentity`] if no identity is set.
pub fn from_legacy_identity(
    msg: Option<&common::Identity>,
) -> Result<Option<Identity>, IdentityError> {
    msg.cloned().map(Identity::try_from).transpose()
}

impl TryFrom<&Identity> for common::Identity {
    type Error = IdentityError;

    fn try_from(identity: &Identity) -> Result<Self, Self::Error> {
        let oneof = match identity {
            Identity::SpiffeId(id) => IdentityOneof::SpiffeId(id.clone()),
            Identity::Hostname(name) => IdentityOneof::Hostname(name.clone()),
            Identity::Uid(uid) => IdentityOneof::Uid(uid.clone()),
            Identity::Unspecified(_) | Identity::Custom(_) => {
                debug!("rejecting {} identity for the legacy schema", identity.kind());
                return Err(IdentityError::UnsupportedIdentityType {
                    kind: identity.kind(),
                    schema: Schema::Legacy,
                });
            }
        };

        Ok(Self {
            identity_oneof: Some(oneof),
        })
    }
}

impl TryFrom<common::Identity> for Identity {
    type Error = IdentityError;

    fn try_from(msg: common::Identity) -> Result<Self, Self::Error> {
        Ok(
            match msg.identity_oneof.ok_or(IdentityError::EmptyIdentity {
                schema: Schema::Legacy,
            })? {
                IdentityOneof::SpiffeId(id) => Identity::SpiffeId(id),
                IdentityOneof::Hostname(name) => Identity::Hostname(name),
                IdentityOneof::Uid(uid) => Identity::Uid(uid),
            },
        )
    }
}
