//! Logging shim.
//!
//! With the `logging` feature the macros forward to `tracing`, otherwise they
//! expand to nothing.

#[cfg(feature = "logging")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
pub(crate) use debug;
#[cfg(not(feature = "logging"))]
pub(crate) use trace;
