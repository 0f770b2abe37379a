use s2a_proto::v2::{self, identity::IdentityOneof};

use crate::{
    error::{IdentityError, Schema},
    log::debug,
    Attributes, Identity,
};

/// Converts an identity to the v2 wire message.
///
/// Named identities set the matching branch of the oneof, an
/// [`Identity::Unspecified`] fills `attributes`. Returns `Ok(None)` if
/// `identity` is `None`.
///
/// # Errors
///
/// Returns [`IdentityError::UnsupportedIdentityType`] for [`Identity::Custom`].
pub fn to_v2_identity(identity: Option<&Identity>) -> Result<Option<v2::Identity>, IdentityError> {
    identity.map(v2::Identity::try_from).transpose()
}

/// Converts a list of identities to v2 wire messages, failing on the first
/// unsupported identity.
pub fn to_v2_identities<'a, I>(identities: I) -> Result<Vec<v2::Identity>, IdentityError>
where
    I: IntoIterator<Item = &'a Identity>,
{
    identities.into_iter().map(v2::Identity::try_from).collect()
}

/// Converts a v2 wire message received from a peer to an identity.
///
/// Returns `Ok(None)` if `msg` is `None`.
///
/// # Errors
///
/// Returns [`IdentityError::EmptyIdentity`] if neither a named identity nor
/// attributes are set, and [`IdentityError::AmbiguousIdentity`] if both are.
pub fn from_v2_identity(msg: Option<&v2::Identity>) -> Result<Option<Identity>, IdentityError> {
    msg.cloned().map(Identity::try_from).transpose()
}

impl TryFrom<&Identity> for v2::Identity {
    type Error = IdentityError;

    fn try_from(identity: &Identity) -> Result<Self, Self::Error> {
        let named = |oneof| Self {
            identity_oneof: Some(oneof),
            ..Default::default()
        };

        Ok(match identity {
            Identity::SpiffeId(id) => named(IdentityOneof::SpiffeId(id.clone())),
            Identity::Hostname(name) => named(IdentityOneof::Hostname(name.clone())),
            Identity::Uid(uid) => named(IdentityOneof::Uid(uid.clone())),
            Identity::Unspecified(attributes) => Self {
                identity_oneof: None,
                attributes: attributes.as_map().clone(),
            },
            Identity::Custom(_) => {
                debug!("rejecting {} identity for the v2 schema", identity.kind());
                return Err(IdentityError::UnsupportedIdentityType {
                    kind: identity.kind(),
                    schema: Schema::V2,
                });
            }
        })
    }
}

impl TryFrom<v2::Identity> for Identity {
    type Error = IdentityError;

    fn try_from(msg: v2::Identity) -> Result<Self, Self::Error> {
        match (msg.identity_oneof, msg.attributes.is_empty()) {
            (Some(oneof), true) => Ok(match oneof {
                IdentityOneof::SpiffeId(id) => Identity::SpiffeId(id),
                IdentityOneof::Hostname(name) => Identity::Hostname(name),
                IdentityOneof::Uid(uid) => Identity::Uid(uid),
            }),
            (None, false) => Ok(Identity::Unspecified(Attributes::from(msg.attributes))),
            (Some(_), false) => Err(IdentityError::AmbiguousIdentity),
            (None, true) => Err(IdentityError::EmptyIdentity { schema: Schema::V2 }),
        }
    }
}
