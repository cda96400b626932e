//! Named linear units: catalog, compounds, and symbol parsing.
//!
//! Every unit stores its physical `Dimension` and a multiplier to the SI
//! base unit of that dimension. Conversion between equivalent units is a
//! ratio of the two multipliers; units whose dimensions differ do not
//! convert at all.
//!
//! The catalog is a fixed match table in the style of a hand-written unit
//! parser: each symbol maps to a (dimension, factor) pair. Offset scales
//! (°C, °F) are deliberately absent; the engine is linear only.

use crate::dimension::Dimension;
use crate::error::{UnitError, UnitResult};
use core::fmt;

/// A named linear unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    symbol: String,
    dim: Dimension,
    si_factor: f64,
}

impl Unit {
    /// Create a unit from scratch.
    ///
    /// Rejects non-finite or non-positive scale factors; a malformed unit
    /// is a programming error at declaration time, not a runtime condition.
    pub fn new(symbol: impl Into<String>, dim: Dimension, si_factor: f64) -> UnitResult<Self> {
        let symbol = symbol.into();
        if !si_factor.is_finite() || si_factor <= 0.0 {
            return Err(UnitError::InvalidScale {
                symbol,
                factor: si_factor,
            });
        }
        Ok(Self {
            symbol,
            dim,
            si_factor,
        })
    }

    // Catalog constructors never carry a bad factor.
    fn from_parts(symbol: &str, dim: Dimension, si_factor: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            dim,
            si_factor,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Multiplier to the SI base unit of this dimension.
    pub fn si_factor(&self) -> f64 {
        self.si_factor
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dim.is_none()
    }

    /// The unscaled dimensionless unit: no dimension and factor 1.
    ///
    /// Values tagged with it carry no physical information beyond their
    /// numbers, so coercion layers treat them like bare arrays.
    pub fn is_unscaled_dimensionless(&self) -> bool {
        self.dim.is_none() && self.si_factor == 1.0
    }

    /// True if `other` has the same physical dimension (any scale).
    pub fn equivalent_to(&self, other: &Unit) -> bool {
        self.dim == other.dim
    }

    /// Multiplier turning values in `self` into values in `target`.
    pub fn conversion_factor(&self, target: &Unit) -> UnitResult<f64> {
        if self.dim != target.dim {
            return Err(UnitError::IncompatibleDimensions {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_dim: self.dim,
                to_dim: target.dim,
            });
        }
        Ok(self.si_factor / target.si_factor)
    }

    /// Product unit, e.g. `kg.mul(&meter())` -> "kg m".
    pub fn mul(&self, other: &Unit) -> Unit {
        let symbol = match (self.symbol.is_empty(), other.symbol.is_empty()) {
            (true, _) => other.symbol.clone(),
            (_, true) => self.symbol.clone(),
            _ => format!("{} {}", self.symbol, other.symbol),
        };
        Unit {
            symbol,
            dim: self.dim.mul_dim(other.dim),
            si_factor: self.si_factor * other.si_factor,
        }
    }

    /// Quotient unit, e.g. `kilometer().div(&second())` -> "km / s".
    pub fn div(&self, other: &Unit) -> Unit {
        Unit {
            symbol: format!("{} / {}", self.symbol, other.symbol),
            dim: self.dim.div_dim(other.dim),
            si_factor: self.si_factor / other.si_factor,
        }
    }

    /// Integer power, e.g. `second().powi(2)` -> "s^2".
    pub fn powi(&self, n: i8) -> Unit {
        Unit {
            symbol: format!("{}^{}", self.symbol, n),
            dim: self.dim.powi(n),
            si_factor: self.si_factor.powi(n as i32),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbol.is_empty() {
            write!(f, "dimensionless")
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

// Astronomical constants follow the IAU values used by common unit libraries.
const PARSEC_M: f64 = 3.085_677_581_491_367_3e16;
const AU_M: f64 = 1.495_978_707e11;
const LIGHT_YEAR_M: f64 = 9.460_730_472_580_8e15;
const SOLAR_MASS_KG: f64 = 1.988_409_870_698_051e30;
const JULIAN_YEAR_S: f64 = 3.155_76e7;

pub fn dimensionless() -> Unit {
    Unit::from_parts("", Dimension::NONE, 1.0)
}

pub fn meter() -> Unit {
    Unit::from_parts("m", Dimension::LENGTH, 1.0)
}

pub fn centimeter() -> Unit {
    Unit::from_parts("cm", Dimension::LENGTH, 1e-2)
}

pub fn kilometer() -> Unit {
    Unit::from_parts("km", Dimension::LENGTH, 1e3)
}

pub fn astronomical_unit() -> Unit {
    Unit::from_parts("AU", Dimension::LENGTH, AU_M)
}

pub fn light_year() -> Unit {
    Unit::from_parts("lyr", Dimension::LENGTH, LIGHT_YEAR_M)
}

pub fn parsec() -> Unit {
    Unit::from_parts("pc", Dimension::LENGTH, PARSEC_M)
}

pub fn milliparsec() -> Unit {
    Unit::from_parts("mpc", Dimension::LENGTH, PARSEC_M * 1e-3)
}

pub fn kiloparsec() -> Unit {
    Unit::from_parts("kpc", Dimension::LENGTH, PARSEC_M * 1e3)
}

pub fn megaparsec() -> Unit {
    Unit::from_parts("Mpc", Dimension::LENGTH, PARSEC_M * 1e6)
}

pub fn gram() -> Unit {
    Unit::from_parts("g", Dimension::MASS, 1e-3)
}

pub fn kilogram() -> Unit {
    Unit::from_parts("kg", Dimension::MASS, 1.0)
}

pub fn solar_mass() -> Unit {
    Unit::from_parts("Msun", Dimension::MASS, SOLAR_MASS_KG)
}

pub fn second() -> Unit {
    Unit::from_parts("s", Dimension::TIME, 1.0)
}

pub fn hour() -> Unit {
    Unit::from_parts("h", Dimension::TIME, 3600.0)
}

pub fn day() -> Unit {
    Unit::from_parts("d", Dimension::TIME, 86_400.0)
}

pub fn julian_year() -> Unit {
    Unit::from_parts("yr", Dimension::TIME, JULIAN_YEAR_S)
}

pub fn kelvin() -> Unit {
    Unit::from_parts("K", Dimension::TEMPERATURE, 1.0)
}

/// Resolve a single catalog symbol. Case-sensitive: `mpc` is milliparsec,
/// `Mpc` is megaparsec.
fn atom(symbol: &str) -> Option<Unit> {
    let unit = match symbol {
        "m" => meter(),
        "cm" => centimeter(),
        "km" => kilometer(),
        "AU" | "au" => astronomical_unit(),
        "lyr" | "ly" => light_year(),
        "pc" => parsec(),
        "mpc" => milliparsec(),
        "kpc" => kiloparsec(),
        "Mpc" => megaparsec(),
        "g" => gram(),
        "kg" => kilogram(),
        "Msun" | "M_sun" => solar_mass(),
        "s" => second(),
        "h" | "hr" => hour(),
        "d" => day(),
        "yr" => julian_year(),
        "K" => kelvin(),
        _ => return None,
    };
    Some(unit)
}

/// Parse a unit expression.
///
/// Accepts a catalog symbol, whitespace-separated products with optional
/// `^n` powers, and at most one `/` splitting numerator from denominator:
/// `"kpc"`, `"km / s"`, `"kg m^-3"`, `"Msun / yr"`.
///
/// The empty string parses to the unscaled dimensionless unit.
pub fn parse_unit(text: &str) -> UnitResult<Unit> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(dimensionless());
    }
    match trimmed.split_once('/') {
        Some((num, den)) => {
            let num = parse_product(num)?;
            let den = parse_product(den)?;
            Ok(num.div(&den))
        }
        None => parse_product(trimmed),
    }
}

fn parse_product(text: &str) -> UnitResult<Unit> {
    let mut acc: Option<Unit> = None;
    for token in text.split_whitespace() {
        let unit = parse_atom(token)?;
        acc = Some(match acc {
            Some(prev) => prev.mul(&unit),
            None => unit,
        });
    }
    acc.ok_or_else(|| UnitError::ParseError(format!("empty unit expression in '{text}'")))
}

fn parse_atom(token: &str) -> UnitResult<Unit> {
    let (symbol, power) = match token.split_once('^') {
        Some((sym, pow)) => {
            let n: i8 = pow.parse().map_err(|_| {
                UnitError::ParseError(format!("bad exponent '{pow}' in unit '{token}'"))
            })?;
            (sym, n)
        }
        None => (token, 1),
    };
    let base = atom(symbol).ok_or_else(|| UnitError::UnknownUnit {
        symbol: symbol.to_string(),
    })?;
    if power == 1 {
        Ok(base)
    } else {
        Ok(base.powi(power))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn catalog_factors() {
        assert_eq!(kilometer().si_factor(), 1e3);
        assert_eq!(kilogram().si_factor(), 1.0);
        assert_eq!(kiloparsec().si_factor(), PARSEC_M * 1e3);
    }

    #[test]
    fn conversion_factor_between_equivalents() {
        let f = kiloparsec().conversion_factor(&milliparsec()).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(f, 1e6, tol));
    }

    #[test]
    fn conversion_factor_rejects_other_dimension() {
        let err = kiloparsec().conversion_factor(&gram()).unwrap_err();
        assert!(matches!(err, UnitError::IncompatibleDimensions { .. }));
        let msg = err.to_string();
        assert!(msg.contains("kpc"));
        assert!(msg.contains("g"));
    }

    #[test]
    fn compound_div() {
        let kms = kilometer().div(&second());
        assert_eq!(kms.symbol(), "km / s");
        assert_eq!(kms.dimension(), Dimension::VELOCITY);
        assert_eq!(kms.si_factor(), 1e3);
    }

    #[test]
    fn compound_powi() {
        let s2 = second().powi(2);
        assert_eq!(s2.symbol(), "s^2");
        assert_eq!(s2.dimension(), Dimension::TIME.powi(2));
    }

    #[test]
    fn reject_bad_scale() {
        assert!(Unit::new("bogus", Dimension::LENGTH, 0.0).is_err());
        assert!(Unit::new("bogus", Dimension::LENGTH, f64::NAN).is_err());
        assert!(Unit::new("fine", Dimension::LENGTH, 2.5).is_ok());
    }

    #[test]
    fn parse_simple_symbols() {
        assert_eq!(parse_unit("kpc").unwrap(), kiloparsec());
        assert_eq!(parse_unit("  Msun ").unwrap(), solar_mass());
        assert_eq!(parse_unit("").unwrap(), dimensionless());
    }

    #[test]
    fn parse_is_case_sensitive_for_prefixes() {
        assert_eq!(parse_unit("mpc").unwrap(), milliparsec());
        assert_eq!(parse_unit("Mpc").unwrap(), megaparsec());
    }

    #[test]
    fn parse_quotient_and_power() {
        let kms = parse_unit("km / s").unwrap();
        assert_eq!(kms.dimension(), Dimension::VELOCITY);
        assert_eq!(kms.si_factor(), 1e3);

        let density = parse_unit("kg m^-3").unwrap();
        assert_eq!(density.dimension(), Dimension::DENSITY);
    }

    #[test]
    fn parse_unknown_symbol() {
        let err = parse_unit("furlong").unwrap_err();
        assert!(matches!(err, UnitError::UnknownUnit { symbol } if symbol == "furlong"));
    }

    #[test]
    fn dimensionless_display() {
        assert_eq!(dimensionless().to_string(), "dimensionless");
        assert_eq!(kiloparsec().to_string(), "kpc");
    }
}
