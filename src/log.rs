//! Debug logging of canvas mutations.
//!
//! Item creation and group rotation emit `debug!` events when the `tracing`
//! feature is on; without it the macro expands to nothing, so the geometry
//! paths carry no logging cost.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
