//! The class-builder seam: explicit declaration of a record's unit fields.
//!
//! A record type implements [`UnitRecord`] to state which of its fields are
//! unit-bearing (and under which canonical unit), and to hand out those
//! fields by name at runtime. The declaration runs once per type and is
//! frozen into the process-wide registry; see [`crate::registry`].

use crate::field::UnitField;
use uf_core::{Quantity, Unit};

/// Configuration of the record's canonical-array accessor.
///
/// Records normally expose their [`ArrayView`](crate::ArrayView) through a
/// method plus an embedded [`ArrayCache`](crate::ArrayCache) field; this
/// value records the name that method goes by (so declarations can be
/// validated against it) or that the record opted out entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorSpec {
    Named(&'static str),
    Disabled,
}

impl AccessorSpec {
    /// Conventional accessor name.
    pub const DEFAULT_NAME: &'static str = "arr_";

    pub fn name(&self) -> Option<&'static str> {
        match self {
            AccessorSpec::Named(name) => Some(name),
            AccessorSpec::Disabled => None,
        }
    }
}

impl Default for AccessorSpec {
    fn default() -> Self {
        AccessorSpec::Named(Self::DEFAULT_NAME)
    }
}

/// A record type with unit-bearing fields.
///
/// `declare` is the explicit registration step that replaces attribute
/// scanning: it runs once per type, in field order. `quantity` is the
/// by-name lookup the array view reads through.
pub trait UnitRecord {
    /// Declare the unit-bearing fields of this type, in order.
    fn declare(decl: &mut ClassDecl);

    /// The stored quantity for a declared field, if this type has it.
    fn quantity(&self, name: &str) -> Option<&Quantity>;
}

/// Incremental builder for a record type's field declaration.
///
/// Collects fields and the accessor configuration; the registry validates
/// and freezes the result on first use.
#[derive(Debug, Default)]
pub struct ClassDecl {
    fields: Vec<UnitField>,
    accessor: AccessorSpec,
}

impl ClassDecl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a unit-bearing field with its canonical unit.
    pub fn field(&mut self, name: &'static str, canonical: Unit) -> &mut Self {
        self.fields.push(UnitField::new(name, canonical));
        self
    }

    /// Configure the accessor; the default is `Named("arr_")`.
    pub fn accessor(&mut self, spec: AccessorSpec) -> &mut Self {
        self.accessor = spec;
        self
    }

    /// Splice in the declarations of a base record, so the registry mirrors
    /// a flattened attribute set. The base's accessor configuration is
    /// ignored; the deriving record states its own.
    pub fn inherit<B: UnitRecord>(&mut self) -> &mut Self {
        let mut base = ClassDecl::new();
        B::declare(&mut base);
        self.fields.extend(base.fields);
        self
    }

    pub(crate) fn into_parts(self) -> (Vec<UnitField>, AccessorSpec) {
        (self.fields, self.accessor)
    }
}
