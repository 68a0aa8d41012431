//! Physics and geometry kernel behind the orbit and cone-slicing scenes.
//!
//! The member crates hold the algorithms; this crate ties them into sessions and
//! scenario builders that a render loop or the bundled binaries can drive.

pub mod logger;
pub mod scenario;
pub mod session;

pub use kernel_conics as conics;
pub use kernel_config as config;
pub use kernel_core::{constants, tolerance, units, vector};
pub use kernel_dynamics as dynamics;
pub use kernel_export as export;
pub use kernel_orbits as orbits;
pub use kernel_trajectory as trajectory;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
