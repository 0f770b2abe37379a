//! Conversions between [`Identity`](crate::Identity) and its wire messages.
//!
//! Two schemas are in use at the same time. The legacy `s2a.proto.Identity`
//! only knows named identities, while `s2a.proto.v2.Identity` can also carry
//! free-form attributes. An absent identity always maps to an absent message.

mod legacy;
mod v2;

pub use legacy::{from_legacy_identity, to_legacy_identities, to_legacy_identity};
pub use v2::{from_v2_identity, to_v2_identities, to_v2_identity};
