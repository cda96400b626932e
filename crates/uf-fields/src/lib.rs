//! uf-fields: unit-aware record fields over the uf-core units engine.
//!
//! Provides:
//! - UnitField declarations that validate/coerce raw inputs at construction
//! - A process-wide FieldRegistry recording each record type's unit fields
//! - ArrayView/ArrayCache: a lazy, memoized plain-numeric projection of
//!   every unit-bearing field in its canonical unit
//! - The UnitRecord trait + ClassDecl builder wiring the above together
//!
//! # Architecture
//!
//! A record type declares its unit-bearing fields once, in `UnitRecord::declare`.
//! Its constructor asks the registry for the frozen declaration and runs each
//! raw input through `ClassFields::coerce`: bare arrays pick up the field's
//! canonical unit, tagged quantities are kept verbatim after a dimension
//! check. Conversion to the canonical unit is deferred to the `ArrayView`,
//! which converts on first access and memoizes per instance.
//!
//! # Example
//!
//! ```
//! use uf_core::{Quantity, kiloparsec};
//! use uf_fields::{ArrayCache, ArrayView, ClassDecl, FieldResult, RawValue, UnitRecord, registry};
//!
//! struct Cluster {
//!     x: Quantity,
//!     arr: ArrayCache,
//! }
//!
//! impl UnitRecord for Cluster {
//!     fn declare(decl: &mut ClassDecl) {
//!         decl.field("x", kiloparsec());
//!     }
//!     fn quantity(&self, name: &str) -> Option<&Quantity> {
//!         match name {
//!             "x" => Some(&self.x),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Cluster {
//!     fn new(x: impl Into<RawValue>) -> FieldResult<Self> {
//!         let class = registry::ensure::<Self>()?;
//!         Ok(Self {
//!             x: class.coerce("x", x)?,
//!             arr: ArrayCache::new(),
//!         })
//!     }
//!     fn arr_(&self) -> ArrayView<'_, Self> {
//!         ArrayView::new(self, &self.arr)
//!     }
//! }
//!
//! let cluster = Cluster::new(vec![1.0, 1.0, 3.0, 4.0]).unwrap();
//! let xs = cluster.arr_().get("x").unwrap();
//! assert_eq!(&xs[..], &[1.0, 1.0, 3.0, 4.0]);
//! ```

pub mod class;
pub mod error;
pub mod field;
pub mod registry;
pub mod view;

// Re-exports for ergonomics
pub use class::{AccessorSpec, ClassDecl, UnitRecord};
pub use error::{FieldError, FieldResult};
pub use field::{RawValue, UnitField};
pub use registry::ClassFields;
pub use view::{ArrayCache, ArrayView};
