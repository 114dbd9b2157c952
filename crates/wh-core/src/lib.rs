//! wh-core: shared foundation for the wellbore hydraulics workspace.
//!
//! Contains:
//! - units (field unit set on top of uom + the fixed conversion constants)
//! - numeric (Real + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WhError, WhResult};
pub use numeric::*;
pub use units::*;
