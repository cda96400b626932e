//! Numeric arrays paired with a unit tag.

use crate::error::UnitResult;
use crate::numeric::{Tolerances, nearly_equal};
use crate::unit::Unit;
use core::fmt;

/// A numeric array (or scalar, stored as length 1) tagged with a unit.
///
/// Conversion to an equivalent unit is a per-element scale; the stored
/// values are never mutated in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    values: Vec<f64>,
    unit: Unit,
}

impl Quantity {
    /// Tag an array of values with a unit.
    pub fn new(values: Vec<f64>, unit: Unit) -> Self {
        Self { values, unit }
    }

    /// Tag a single value with a unit.
    pub fn scalar(value: f64, unit: Unit) -> Self {
        Self {
            values: vec![value],
            unit,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_scalar(&self) -> bool {
        self.values.len() == 1
    }

    /// Converted copy of this quantity in `target`.
    ///
    /// Fails with `IncompatibleDimensions` if the units are not equivalent.
    pub fn to(&self, target: &Unit) -> UnitResult<Quantity> {
        let factor = self.unit.conversion_factor(target)?;
        let values = if factor == 1.0 {
            self.values.clone()
        } else {
            self.values.iter().map(|v| v * factor).collect()
        };
        Ok(Quantity {
            values,
            unit: target.clone(),
        })
    }

    /// Plain numbers in `target`: convert, then strip the unit tag.
    pub fn to_values(&self, target: &Unit) -> UnitResult<Vec<f64>> {
        Ok(self.to(target)?.values)
    }

    /// Element-wise comparison; both quantities must carry the same unit.
    pub fn approx_eq(&self, other: &Quantity, tol: Tolerances) -> bool {
        self.unit == other.unit
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| nearly_equal(*a, *b, tol))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_scalar() {
            write!(f, "{} {}", self.values[0], self.unit)
        } else {
            write!(f, "[")?;
            for (i, v) in self.values.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "] {}", self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{gram, kilogram, kilometer, kiloparsec, milliparsec, second};

    #[test]
    fn convert_scales_values() {
        let q = Quantity::new(vec![1.0, 2.0], kilogram());
        let in_grams = q.to(&gram()).unwrap();
        assert_eq!(in_grams.values(), &[1000.0, 2000.0]);
        assert_eq!(in_grams.unit(), &gram());
    }

    #[test]
    fn convert_identity_keeps_values() {
        let q = Quantity::new(vec![1.5, 2.5], second());
        let same = q.to(&second()).unwrap();
        assert_eq!(same.values(), q.values());
    }

    #[test]
    fn convert_rejects_incompatible() {
        let q = Quantity::scalar(1.0, kilogram());
        assert!(q.to(&kilometer()).is_err());
    }

    #[test]
    fn to_values_strips_unit() {
        let q = Quantity::new(vec![10.0, 2.0, 3.0, 100.0], milliparsec());
        let in_kpc = q.to_values(&kiloparsec()).unwrap();
        let tol = Tolerances::default();
        for (got, want) in in_kpc.iter().zip([1e-5, 2e-6, 3e-6, 1e-4]) {
            assert!(nearly_equal(*got, want, tol), "{got} vs {want}");
        }
    }

    #[test]
    fn display_shapes() {
        assert_eq!(Quantity::scalar(5.0, kilometer()).to_string(), "5 km");
        assert_eq!(
            Quantity::new(vec![1.0, 2.0], kilometer()).to_string(),
            "[1, 2] km"
        );
    }
}
