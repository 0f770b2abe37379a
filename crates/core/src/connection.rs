//! TLS parameters negotiated by a handshake.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContextError;

/// TLS version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsVersion {
    /// TLS 1.2.
    V1_2,
    /// TLS 1.3.
    V1_3,
}

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TlsVersion::V1_2 => write!(f, "TLS 1.2"),
            TlsVersion::V1_3 => write!(f, "TLS 1.3"),
        }
    }
}

impl From<TlsVersion> for s2a_proto::TlsVersion {
    fn from(value: TlsVersion) -> Self {
        match value {
            TlsVersion::V1_2 => s2a_proto::TlsVersion::Tls12,
            TlsVersion::V1_3 => s2a_proto::TlsVersion::Tls13,
        }
    }
}

impl From<s2a_proto::TlsVersion> for TlsVersion {
    fn from(value: s2a_proto::TlsVersion) -> Self {
        match value {
            s2a_proto::TlsVersion::Tls12 => TlsVersion::V1_2,
            s2a_proto::TlsVersion::Tls13 => TlsVersion::V1_3,
        }
    }
}

impl TryFrom<i32> for TlsVersion {
    type Error = ContextError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        s2a_proto::TlsVersion::try_from(value)
            .map(Into::into)
            .map_err(|_| ContextError::UnknownTlsVersion(value))
    }
}

/// TLS ciphersuite.
///
/// The name fixes the AEAD and the hash used by the PRF (TLS 1.2) or HKDF
/// (TLS 1.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ciphersuite {
    /// AES-128-GCM with SHA-256.
    Aes128GcmSha256,
    /// AES-256-GCM with SHA-384.
    Aes256GcmSha384,
    /// ChaCha20-Poly1305 with SHA-256.
    Chacha20Poly1305Sha256,
}

impl fmt::Display for Ciphersuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", s2a_proto::Ciphersuite::from(*self).as_str_name())
    }
}

impl From<Ciphersuite> for s2a_proto::Ciphersuite {
    fn from(value: Ciphersuite) -> Self {
        match value {
            Ciphersuite::Aes128GcmSha256 => s2a_proto::Ciphersuite::Aes128GcmSha256,
            Ciphersuite::Aes256GcmSha384 => s2a_proto::Ciphersuite::Aes256GcmSha384,
            Ciphersuite::Chacha20Poly1305Sha256 => s2a_proto::Ciphersuite::Chacha20Poly1305Sha256,
        }
    }
}

impl From<s2a_proto::Ciphersuite> for Ciphersuite {
    fn from(value: s2a_proto::Ciphersuite) -> Self {
        match value {
            s2a_proto::Ciphersuite::Aes128GcmSha256 => Ciphersuite::Aes128GcmSha256,
            s2a_proto::Ciphersuite::Aes256GcmSha384 => Ciphersuite::Aes256GcmSha384,
            s2a_proto::Ciphersuite::Chacha20Poly1305Sha256 => Ciphersuite::Chacha20Poly1305Sha256,
        }
    }
}

impl TryFrom<i32> for Ciphersuite {
    type Error = ContextError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        s2a_proto::Ciphersuite::try_from(value)
            .map(Into::into)
            .map_err(|_| ContextError::UnknownCiphersuite(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::tls12(0, TlsVersion::V1_2)]
    #[case::tls13(1, TlsVersion::V1_3)]
    fn test_tls_version_wire_value(#[case] wire: i32, #[case] version: TlsVersion) {
        assert_eq!(TlsVersion::try_from(wire).unwrap(), version);
        assert_eq!(s2a_proto::TlsVersion::from(version) as i32, wire);
    }

    #[rstest]
    #[case::aes_128(0, Ciphersuite::Aes128GcmSha256)]
    #[case::aes_256(1, Ciphersuite::Aes256GcmSha384)]
    #[case::chacha20(2, Ciphersuite::Chacha20Poly1305Sha256)]
    fn test_ciphersuite_wire_value(#[case] wire: i32, #[case] suite: Ciphersuite) {
        assert_eq!(Ciphersuite::try_from(wire).unwrap(), suite);
        assert_eq!(s2a_proto::Ciphersuite::from(suite) as i32, wire);
    }

    #[test]
    fn test_unknown_wire_values() {
        assert!(matches!(
            TlsVersion::try_from(7),
            Err(ContextError::UnknownTlsVersion(7))
        ));
        assert!(matches!(
            Ciphersuite::try_from(-1),
            Err(ContextError::UnknownCiphersuite(-1))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(TlsVersion::V1_3.to_string(), "TLS 1.3");
        assert_eq!(
            Ciphersuite::Chacha20Poly1305Sha256.to_string(),
            "CHACHA20_POLY1305_SHA256"
        );
    }
}
