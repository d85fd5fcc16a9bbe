//! Emergency-landing coverage planning for straight-line flights.
//!
//! The planning engine lives in the workspace crates; this library gathers
//! them behind one façade so the binaries (and any other front-end) share the
//! same entry points.

pub mod logging;

pub use glide_config as config;
pub use glide_core as primitives;
pub use glide_export as export;
pub use glide_importer as importer;
pub use glide_route as route;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
