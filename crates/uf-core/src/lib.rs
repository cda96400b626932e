//! uf-core: runtime units engine for unitfields.
//!
//! Contains:
//! - dimension (exponent vectors over the SI base quantities)
//! - unit (named linear units, catalog + parsing + compounds)
//! - quantity (numeric array paired with a unit tag, conversion)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod dimension;
pub mod error;
pub mod numeric;
pub mod quantity;
pub mod unit;

// Re-exports: nice ergonomics for downstream crates
pub use dimension::Dimension;
pub use error::{UnitError, UnitResult};
pub use numeric::*;
pub use quantity::Quantity;
pub use unit::*;
