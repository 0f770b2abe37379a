//! Identity of a handshake endpoint.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::Arc,
};

use serde::{Deserialize, Serialize};

static EMPTY_ATTRIBUTES: Attributes = Attributes(BTreeMap::new());

/// Identity of a connection endpoint.
///
/// The built-in kinds are the ones the S2A wire schemas know about. Values are
/// stored verbatim, validating a SPIFFE ID or hostname is left to certificate
/// verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    /// SPIFFE ID, e.g. `spiffe://example.org/service`.
    SpiffeId(String),
    /// DNS-style hostname.
    Hostname(String),
    /// Opaque user identifier.
    Uid(String),
    /// Free-form attributes without a canonical name. Only the v2 schema can
    /// carry these.
    Unspecified(Attributes),
    /// Identity kind defined outside this crate. No wire schema can carry it.
    #[serde(skip)]
    Custom(CustomIdentity),
}

impl Identity {
    /// Creates a SPIFFE ID identity.
    pub fn spiffe_id(id: impl Into<String>) -> Self {
        Identity::SpiffeId(id.into())
    }

    /// Creates a hostname identity.
    pub fn hostname(name: impl Into<String>) -> Self {
        Identity::Hostname(name.into())
    }

    /// Creates a UID identity.
    pub fn uid(uid: impl Into<String>) -> Self {
        Identity::Uid(uid.into())
    }

    /// Creates an identity made only of attributes.
    pub fn unspecified(attributes: impl Into<Attributes>) -> Self {
        Identity::Unspecified(attributes.into())
    }

    /// Wraps a caller-defined identity.
    pub fn custom<C>(claims: C) -> Self
    where
        C: IdentityClaims + 'static,
    {
        Identity::Custom(CustomIdentity(Arc::new(claims)))
    }

    /// Returns the name of the identity, empty for [`Identity::Unspecified`].
    pub fn name(&self) -> &str {
        match self {
            Identity::SpiffeId(name) | Identity::Hostname(name) | Identity::Uid(name) => {
                name.as_str()
            }
            Identity::Unspecified(_) => "",
            Identity::Custom(custom) => custom.claims().name(),
        }
    }

    /// Returns the attributes of the identity, empty for the named kinds.
    pub fn attributes(&self) -> &Attributes {
        match self {
            Identity::SpiffeId(_) | Identity::Hostname(_) | Identity::Uid(_) => &EMPTY_ATTRIBUTES,
            Identity::Unspecified(attributes) => attributes,
            Identity::Custom(custom) => custom.claims().attributes(),
        }
    }

    /// Returns the kind of the identity.
    pub fn kind(&self) -> IdentityKind {
        match self {
            Identity::SpiffeId(_) => IdentityKind::SpiffeId,
            Identity::Hostname(_) => IdentityKind::Hostname,
            Identity::Uid(_) => IdentityKind::Uid,
            Identity::Unspecified(_) => IdentityKind::Unspecified,
            Identity::Custom(_) => IdentityKind::Custom,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Unspecified(attributes) => write!(f, "{}:{}", self.kind(), attributes),
            _ => write!(f, "{}:{}", self.kind(), self.name()),
        }
    }
}

/// Kind of an [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKind {
    /// [`Identity::SpiffeId`].
    SpiffeId,
    /// [`Identity::Hostname`].
    Hostname,
    /// [`Identity::Uid`].
    Uid,
    /// [`Identity::Unspecified`].
    Unspecified,
    /// [`Identity::Custom`].
    Custom,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityKind::SpiffeId => write!(f, "spiffe_id"),
            IdentityKind::Hostname => write!(f, "hostname"),
            IdentityKind::Uid => write!(f, "uid"),
            IdentityKind::Unspecified => write!(f, "unspecified"),
            IdentityKind::Custom => write!(f, "custom"),
        }
    }
}

/// Capabilities of an identity defined outside this crate.
pub trait IdentityClaims: fmt::Debug + Send + Sync {
    /// Returns the name of the identity.
    fn name(&self) -> &str;

    /// Returns the attributes of the identity.
    fn attributes(&self) -> &Attributes {
        Attributes::empty()
    }
}

/// Shared handle to a caller-defined identity.
///
/// Two handles are equal only if they point to the same value.
#[derive(Debug, Clone)]
pub struct CustomIdentity(Arc<dyn IdentityClaims>);

impl CustomIdentity {
    /// Returns the wrapped claims.
    pub fn claims(&self) -> &dyn IdentityClaims {
        self.0.as_ref()
    }
}

impl PartialEq for CustomIdentity {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for CustomIdentity {}

/// Immutable string-to-string mapping with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Returns a reference to an empty mapping.
    pub fn empty() -> &'static Attributes {
        &EMPTY_ATTRIBUTES
    }

    /// Returns the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    /// Consumes the attributes, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        write!(f, "}}")
    }
}

impl From<BTreeMap<String, String>> for Attributes {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<HashMap<String, String>> for Attributes {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct Workload;

    impl IdentityClaims for Workload {
        fn name(&self) -> &str {
            "workload"
        }
    }

    #[rstest]
    #[case::spiffe_id(Identity::spiffe_id("spiffe://example.org/a"), "spiffe://example.org/a")]
    #[case::hostname(Identity::hostname("example.org"), "example.org")]
    #[case::uid(Identity::uid("1234"), "1234")]
    #[case::empty_name(Identity::hostname(""), "")]
    fn test_named_identity(#[case] identity: Identity, #[case] name: &str) {
        assert_eq!(identity.name(), name);
        assert!(identity.attributes().is_empty());
    }

    #[test]
    fn test_unspecified_identity() {
        let identity = Identity::unspecified([("key", "value"), ("zone", "a")]);

        assert_eq!(identity.name(), "");
        assert_eq!(identity.attributes().len(), 2);
        assert_eq!(identity.attributes().get("key"), Some("value"));
        assert_eq!(identity.kind(), IdentityKind::Unspecified);

        let Identity::Unspecified(attributes) = identity else {
            panic!("expected unspecified identity");
        };
        assert_eq!(
            attributes.into_inner(),
            BTreeMap::from([
                ("key".to_string(), "value".to_string()),
                ("zone".to_string(), "a".to_string()),
            ])
        );
    }

    #[test]
    fn test_unspecified_identity_owns_attributes() {
        let mut map = HashMap::new();
        map.insert("key".to_string(), "value".to_string());

        let identity = Identity::unspecified(map.clone());
        map.insert("key".to_string(), "changed".to_string());

        assert_eq!(identity.attributes().get("key"), Some("value"));
    }

    #[test]
    fn test_custom_identity() {
        let identity = Identity::custom(Workload);

        assert_eq!(identity.name(), "workload");
        assert!(identity.attributes().is_empty());
        assert_eq!(identity.kind(), IdentityKind::Custom);
        assert_eq!(identity, identity.clone());
        assert_ne!(identity, Identity::custom(Workload));

        let Identity::Custom(custom) = &identity else {
            panic!("expected custom identity");
        };
        assert_eq!(custom.claims().name(), "workload");
        assert!(custom.claims().attributes().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Identity::uid("42").to_string(), "uid:42");
        assert_eq!(
            Identity::unspecified([("b", "2"), ("a", "1")]).to_string(),
            "unspecified:{a=1, b=2}"
        );
    }

    #[test]
    fn test_serde() {
        let identity: Identity = serde_json::from_str(r#"{"spiffe_id":"spiffe://a/b"}"#).unwrap();
        assert_eq!(identity, Identity::spiffe_id("spiffe://a/b"));

        let identity: Identity = serde_json::from_str(r#"{"unspecified":{"k":"v"}}"#).unwrap();
        assert_eq!(identity, Identity::unspecified([("k", "v")]));
    }
}
