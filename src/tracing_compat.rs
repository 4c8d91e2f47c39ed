//! Diagnostics for degraded reads and buffer growth.
//!
//! With the `tracing` feature these are the `tracing` crate's macros. Without it they expand to
//! nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod noop {
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    pub(crate) use {debug, trace};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{debug, trace};
