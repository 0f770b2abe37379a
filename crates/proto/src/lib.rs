//! Wire messages of the S2A session-establishment protocol.
//!
//! The Rust sources under `generated/` are `prost-build` output for the
//! definitions in `proto/`, checked in so the workspace builds without `protoc`.
//! Regenerate them whenever a `.proto` file changes.

#![deny(unreachable_pub, unused_must_use)]
#![deny(clippy::all)]
#![forbid(unsafe_code)]

/// Messages of the `s2a.proto` package: the legacy identity, the TLS enums and
/// the session context reported after a handshake.
#[allow(missing_docs, clippy::all)]
pub mod common {
    include!("generated/s2a.proto.rs");
}

/// Messages of the `s2a.proto.v2` package.
#[allow(missing_docs, clippy::all)]
pub mod v2 {
    include!("generated/s2a.proto.v2.rs");
}

pub use common::{Ciphersuite, S2aContext, TlsVersion};
