use std::collections::BTreeMap;

use s2a_core::{
    convert::{from_legacy_identity, from_v2_identity, to_legacy_identity, to_v2_identity},
    Attributes, AuthInfo, Ciphersuite, ClientOptions, ContextError, CustomIdentity, Identity,
    IdentityClaims, IdentityError, IdentityKind, Schema, ServerOptions, SessionContext, TlsVersion,
    VerificationMode,
};
use s2a_proto::{common, v2};

/// Implements the identity capabilities without being one of the built-in
/// kinds, so no wire schema can carry it.
#[derive(Debug)]
struct UnsupportedIdentity;

impl IdentityClaims for UnsupportedIdentity {
    fn name(&self) -> &str {
        ""
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

#[test]
fn test_legacy_spiffe_id() {
    let msg = to_legacy_identity(Some(&Identity::spiffe_id("test_spiffe_id"))).unwrap();

    assert_eq!(
        msg,
        Some(common::Identity {
            identity_oneof: Some(common::identity::IdentityOneof::SpiffeId(
                "test_spiffe_id".to_string()
            )),
        })
    );
}

#[test]
fn test_v2_hostname() {
    let msg = to_v2_identity(Some(&Identity::hostname("test_hostname"))).unwrap();

    assert_eq!(
        msg,
        Some(v2::Identity {
            identity_oneof: Some(v2::identity::IdentityOneof::Hostname(
                "test_hostname".to_string()
            )),
            attributes: BTreeMap::new(),
        })
    );
}

#[test]
fn test_v2_attributes() {
    let msg = to_v2_identity(Some(&Identity::unspecified([("key", "value")]))).unwrap();

    assert_eq!(
        msg,
        Some(v2::Identity {
            identity_oneof: None,
            attributes: BTreeMap::from([("key".to_string(), "value".to_string())]),
        })
    );
}

#[test]
fn test_absent_identity() {
    assert_eq!(to_legacy_identity(None), Ok(None));
    assert_eq!(to_v2_identity(None), Ok(None));
}

#[test]
fn test_unsupported_identity() {
    init_tracing();

    let identity = Identity::custom(UnsupportedIdentity);

    assert_eq!(
        to_v2_identity(Some(&identity)),
        Err(IdentityError::UnsupportedIdentityType {
            kind: IdentityKind::Custom,
            schema: Schema::V2,
        })
    );
    assert!(to_legacy_identity(Some(&identity)).is_err());
}

#[test]
fn test_attributes_survive_the_wire() {
    let attributes: BTreeMap<String, String> = (0..16)
        .map(|i| (format!("key-{i}"), format!("value-{i}")))
        .collect();
    let identity = Identity::unspecified(attributes.clone());

    let msg = to_v2_identity(Some(&identity)).unwrap().unwrap();
    assert_eq!(msg.attributes, attributes);

    let bytes = prost::Message::encode_to_vec(&msg);
    let decoded: v2::Identity = prost::Message::decode(bytes.as_slice()).unwrap();

    assert_eq!(from_v2_identity(Some(&decoded)).unwrap(), Some(identity));
}

#[test]
fn test_named_identity_survives_the_legacy_wire() {
    let identity = Identity::uid("test_uid");

    let msg = to_legacy_identity(Some(&identity)).unwrap().unwrap();
    let bytes = prost::Message::encode_to_vec(&msg);
    let decoded: common::Identity = prost::Message::decode(bytes.as_slice()).unwrap();

    assert_eq!(from_legacy_identity(Some(&decoded)).unwrap(), Some(identity));
}

/// Tests that a context populated by the handshake engine reaches the RPC
/// layer unchanged.
#[test]
fn test_session_context() {
    init_tracing();

    let context = SessionContext::builder()
        .application_protocol("grpc")
        .tls_version(TlsVersion::V1_3)
        .ciphersuite(Ciphersuite::Aes128GcmSha256)
        .peer_identity(Identity::spiffe_id("spiffe://example.org/server"))
        .local_identity(Identity::spiffe_id("spiffe://example.org/client"))
        .peer_cert_fingerprint(vec![0xaa; 32])
        .local_cert_fingerprint(vec![0xbb; 32])
        .build()
        .unwrap();

    let bytes = context.to_bytes().unwrap();
    let msg: s2a_proto::S2aContext = prost::Message::decode(bytes.as_slice()).unwrap();

    assert_eq!(msg.application_protocol, "grpc");
    assert_eq!(msg.tls_version, s2a_proto::TlsVersion::Tls13 as i32);

    let info = AuthInfo::from_proto(msg).unwrap();

    assert_eq!(info.context(), &context);
    assert_eq!(info.auth_type(), "s2a");
    assert_eq!(
        info.peer_identity().map(Identity::name),
        Some("spiffe://example.org/server")
    );
    assert!(!info.is_handshake_resumed());
}

#[test]
fn test_options_from_config() {
    let client: ClientOptions = serde_json::from_str(
        r#"{
            "s2a_address": "localhost:61365",
            "local_identity": { "spiffe_id": "spiffe://example.org/client" },
            "target_identities": [{ "hostname": "server.example.org" }],
            "verification_mode": "spiffe"
        }"#,
    )
    .unwrap();

    assert_eq!(client.verification_mode(), VerificationMode::Spiffe);
    assert_eq!(
        client.legacy_target_identities().unwrap(),
        vec![common::Identity {
            identity_oneof: Some(common::identity::IdentityOneof::Hostname(
                "server.example.org".to_string()
            )),
        }]
    );

    let server: ServerOptions = serde_json::from_str(
        r#"{
            "s2a_address": "localhost:61365",
            "local_identities": [{ "unspecified": { "team": "storage" } }]
        }"#,
    )
    .unwrap();

    assert_eq!(server.verification_mode(), VerificationMode::Unspecified);
    assert!(matches!(
        server.legacy_local_identities(),
        Err(IdentityError::UnsupportedIdentityType {
            kind: IdentityKind::Unspecified,
            schema: Schema::Legacy,
        })
    ));
    assert_eq!(server.v2_local_identities().unwrap().len(), 1);
}

#[test]
fn test_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Identity>();
    assert_send_sync::<Attributes>();
    assert_send_sync::<CustomIdentity>();
    assert_send_sync::<SessionContext>();
    assert_send_sync::<AuthInfo>();
    assert_send_sync::<ClientOptions>();
    assert_send_sync::<ServerOptions>();
    assert_send_sync::<IdentityError>();
    assert_send_sync::<ContextError>();
}
