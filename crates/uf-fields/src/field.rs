//! Unit-bearing field declarations and input coercion.

use crate::error::{FieldError, FieldResult};
use uf_core::{Quantity, Unit};

/// Raw input for a unit-bearing field: either a bare numeric payload or a
/// quantity that already carries a unit tag.
///
/// A bare payload carries no unit information and is always interpreted as
/// "already expressed in the field's canonical unit".
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Bare(Vec<f64>),
    Tagged(Quantity),
}

impl RawValue {
    /// Whether the input carries a meaningful unit tag.
    ///
    /// The unscaled dimensionless unit counts as no tag at all: it adds
    /// nothing beyond the numbers.
    pub fn has_unit(&self) -> bool {
        match self {
            RawValue::Bare(_) => false,
            RawValue::Tagged(q) => !q.unit().is_unscaled_dimensionless(),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Bare(vec![value])
    }
}

impl From<Vec<f64>> for RawValue {
    fn from(values: Vec<f64>) -> Self {
        RawValue::Bare(values)
    }
}

impl From<&[f64]> for RawValue {
    fn from(values: &[f64]) -> Self {
        RawValue::Bare(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for RawValue {
    fn from(values: [f64; N]) -> Self {
        RawValue::Bare(values.to_vec())
    }
}

impl From<Quantity> for RawValue {
    fn from(quantity: Quantity) -> Self {
        RawValue::Tagged(quantity)
    }
}

/// A declared unit-bearing field: a name plus its canonical unit.
///
/// Created once per field at class-declaration time via
/// [`ClassDecl::field`](crate::ClassDecl::field); the canonical unit never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitField {
    name: &'static str,
    canonical: Unit,
}

impl UnitField {
    pub(crate) fn new(name: &'static str, canonical: Unit) -> Self {
        Self { name, canonical }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn canonical_unit(&self) -> &Unit {
        &self.canonical
    }

    /// Validate/coerce a raw input into a quantity compatible with this
    /// field.
    ///
    /// - A tagged quantity whose dimension matches the canonical unit is
    ///   returned unchanged: its original unit is preserved verbatim, and
    ///   canonicalization is deferred to the array view.
    /// - A tagged quantity of a different dimension is rejected.
    /// - A bare payload (or an unscaled-dimensionless tag) picks up the
    ///   canonical unit with its numbers untouched.
    ///
    /// Pure and idempotent: coercing an already-coerced quantity again is a
    /// no-op.
    pub fn coerce(&self, raw: impl Into<RawValue>) -> FieldResult<Quantity> {
        match raw.into() {
            RawValue::Bare(values) => Ok(Quantity::new(values, self.canonical.clone())),
            RawValue::Tagged(q) => {
                if q.unit().is_unscaled_dimensionless() {
                    return Ok(Quantity::new(q.values().to_vec(), self.canonical.clone()));
                }
                if q.unit().equivalent_to(&self.canonical) {
                    Ok(q)
                } else {
                    Err(FieldError::IncompatibleUnit {
                        attribute: self.name,
                        expected: self.canonical.clone(),
                        found: q.unit().clone(),
                    })
                }
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use uf_core::{Quantity, gram, kilogram, kiloparsec, second};

    proptest! {
        #[test]
        fn bare_payload_survives_untouched(values in prop::collection::vec(-1e12_f64..1e12_f64, 0..32)) {
            let field = UnitField::new("x", kiloparsec());
            let q = field.coerce(values.clone()).unwrap();
            prop_assert_eq!(q.values(), &values[..]);
            prop_assert_eq!(q.unit(), &kiloparsec());
        }

        #[test]
        fn coerce_coerce_equals_coerce(values in prop::collection::vec(-1e12_f64..1e12_f64, 1..32)) {
            let field = UnitField::new("m", kilogram());
            for input in [
                RawValue::Bare(values.clone()),
                RawValue::Tagged(Quantity::new(values.clone(), kilogram())),
                RawValue::Tagged(Quantity::new(values.clone(), gram())),
            ] {
                let once = field.coerce(input).unwrap();
                let twice = field.coerce(once.clone()).unwrap();
                prop_assert_eq!(once, twice);
            }
        }

        #[test]
        fn wrong_dimension_always_rejected(values in prop::collection::vec(-1e12_f64..1e12_f64, 1..8)) {
            let field = UnitField::new("x", kiloparsec());
            let err = field.coerce(Quantity::new(values, second())).unwrap_err();
            let is_incompatible = matches!(err, FieldError::IncompatibleUnit { attribute: "x", .. });
            prop_assert!(is_incompatible);
        }
    }
}
