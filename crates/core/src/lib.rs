//! Identity and session context core of the S2A handshake.
//!
//! This crate models the identity an endpoint presents during an S2A
//! handshake and converts it to the wire messages of the protocol:
//!
//! * [`convert::to_legacy_identity`] produces an `s2a.proto.Identity`, which
//!   only knows SPIFFE IDs, hostnames and UIDs.
//! * [`convert::to_v2_identity`] produces an `s2a.proto.v2.Identity`, which can
//!   also carry free-form attributes.
//!
//! Once a handshake completes, its outcome is described by a
//! [`SessionContext`] and exposed to the RPC layer through [`AuthInfo`].
//! Nothing in this crate performs I/O.

#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod auth_info;
pub mod connection;
pub mod context;
pub mod convert;
mod error;
pub mod identity;
mod log;
pub mod options;

pub use auth_info::{AuthInfo, SecurityLevel};
pub use connection::{Ciphersuite, TlsVersion};
pub use context::{SessionContext, SessionContextBuilder, SessionContextBuilderError};
pub use error::{ContextError, IdentityError, Schema};
pub use identity::{Attributes, CustomIdentity, Identity, IdentityClaims, IdentityKind};
pub use options::{ClientOptions, ServerOptions, VerificationMode};
