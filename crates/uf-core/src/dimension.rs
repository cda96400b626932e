//! Runtime physical dimensions.
//!
//! A `Dimension` is an exponent vector over the seven SI base quantities.
//! Two units are equivalent (convertible into each other) iff their
//! dimensions are equal, regardless of scale.

use core::fmt;

/// Exponents over the SI base quantities.
///
/// - `i8` keeps the vector small and `Copy`
/// - equality is exact, no tolerance involved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub current: i8,
    pub temperature: i8,
    pub amount: i8,
    pub luminosity: i8,
}

impl Dimension {
    /// Dimensionless (all exponents zero).
    pub const NONE: Dimension = Dimension::base(0, 0, 0, 0, 0, 0, 0);
    pub const LENGTH: Dimension = Dimension::base(1, 0, 0, 0, 0, 0, 0);
    pub const MASS: Dimension = Dimension::base(0, 1, 0, 0, 0, 0, 0);
    pub const TIME: Dimension = Dimension::base(0, 0, 1, 0, 0, 0, 0);
    pub const CURRENT: Dimension = Dimension::base(0, 0, 0, 1, 0, 0, 0);
    pub const TEMPERATURE: Dimension = Dimension::base(0, 0, 0, 0, 1, 0, 0);
    pub const AMOUNT: Dimension = Dimension::base(0, 0, 0, 0, 0, 1, 0);
    pub const LUMINOSITY: Dimension = Dimension::base(0, 0, 0, 0, 0, 0, 1);

    // Derived dimensions used by compound catalog units.
    pub const VELOCITY: Dimension = Dimension::base(1, 0, -1, 0, 0, 0, 0);
    pub const DENSITY: Dimension = Dimension::base(-3, 1, 0, 0, 0, 0, 0);

    const fn base(
        length: i8,
        mass: i8,
        time: i8,
        current: i8,
        temperature: i8,
        amount: i8,
        luminosity: i8,
    ) -> Self {
        Self {
            length,
            mass,
            time,
            current,
            temperature,
            amount,
            luminosity,
        }
    }

    /// True if every exponent is zero.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Dimension of a product of two units.
    pub fn mul_dim(self, other: Dimension) -> Dimension {
        Dimension::base(
            self.length + other.length,
            self.mass + other.mass,
            self.time + other.time,
            self.current + other.current,
            self.temperature + other.temperature,
            self.amount + other.amount,
            self.luminosity + other.luminosity,
        )
    }

    /// Dimension of a quotient of two units.
    pub fn div_dim(self, other: Dimension) -> Dimension {
        self.mul_dim(other.recip())
    }

    /// Dimension of a unit raised to an integer power.
    pub fn powi(self, n: i8) -> Dimension {
        Dimension::base(
            self.length * n,
            self.mass * n,
            self.time * n,
            self.current * n,
            self.temperature * n,
            self.amount * n,
            self.luminosity * n,
        )
    }

    /// Reciprocal dimension (all exponents negated).
    pub fn recip(self) -> Dimension {
        self.powi(-1)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "dimensionless");
        }
        let axes = [
            ("L", self.length),
            ("M", self.mass),
            ("T", self.time),
            ("I", self.current),
            ("Th", self.temperature),
            ("N", self.amount),
            ("J", self.luminosity),
        ];
        let mut first = true;
        for (label, exp) in axes {
            if exp == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if exp == 1 {
                write!(f, "{label}")?;
            } else {
                write!(f, "{label}^{exp}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_is_length_over_time() {
        assert_eq!(Dimension::LENGTH.div_dim(Dimension::TIME), Dimension::VELOCITY);
    }

    #[test]
    fn mul_and_powi_agree() {
        let area = Dimension::LENGTH.mul_dim(Dimension::LENGTH);
        assert_eq!(area, Dimension::LENGTH.powi(2));
    }

    #[test]
    fn recip_round_trip() {
        let d = Dimension::VELOCITY;
        assert_eq!(d.recip().recip(), d);
        assert_eq!(d.mul_dim(d.recip()), Dimension::NONE);
    }

    #[test]
    fn display_compact() {
        assert_eq!(Dimension::NONE.to_string(), "dimensionless");
        assert_eq!(Dimension::LENGTH.to_string(), "L");
        assert_eq!(Dimension::VELOCITY.to_string(), "L T^-1");
        assert_eq!(Dimension::DENSITY.to_string(), "L^-3 M");
    }
}
