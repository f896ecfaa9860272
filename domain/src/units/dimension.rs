//! Physical dimension value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base dimensions a unit's exponent vector is expressed in.
///
/// The first seven are the SI base quantities. `Information` and `Angle`
/// are tracked separately so that bytes never convert to radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    Substance,
    Luminosity,
    Information,
    Angle,
}

impl BaseDimension {
    pub const ALL: [BaseDimension; 9] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Substance,
        BaseDimension::Luminosity,
        BaseDimension::Information,
        BaseDimension::Angle,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Substance => "substance",
            BaseDimension::Luminosity => "luminosity",
            BaseDimension::Information => "information",
            BaseDimension::Angle => "angle",
        }
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.as_str())
    }
}

/// Exponent vector over [`BaseDimension`] (Value Object)
///
/// Two quantities are convertible iff their dimensions are equal.
/// `m/s` is `length^1 time^-1`, `N` is `mass^1 length^1 time^-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension {
    exponents: [i8; 9],
}

impl Dimension {
    /// The dimension of pure numbers.
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A single base dimension raised to the first power.
    pub fn base(base: BaseDimension) -> Self {
        let mut exponents = [0; 9];
        exponents[base.index()] = 1;
        Self { exponents }
    }

    /// Build a dimension from `(base, exponent)` pairs.
    ///
    /// Repeated bases accumulate, saturating at the `i8` range.
    pub fn from_pairs(pairs: &[(BaseDimension, i8)]) -> Self {
        let mut exponents = [0i8; 9];
        for (base, exp) in pairs {
            let slot = &mut exponents[base.index()];
            *slot = slot.saturating_add(*exp);
        }
        Self { exponents }
    }

    pub fn exponent(&self, base: BaseDimension) -> i8 {
        self.exponents[base.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|e| *e == 0)
    }

    /// Product of two dimensions, or `None` if an exponent leaves the `i8` range.
    pub fn checked_mul(self, rhs: Dimension) -> Option<Dimension> {
        self.zip_with(rhs, i8::checked_add)
    }

    /// Quotient of two dimensions, or `None` if an exponent leaves the `i8` range.
    pub fn checked_div(self, rhs: Dimension) -> Option<Dimension> {
        self.zip_with(rhs, i8::checked_sub)
    }

    /// Raise every exponent to `power`, or `None` if one leaves the `i8` range.
    pub fn checked_powi(self, power: i32) -> Option<Dimension> {
        let mut exponents = self.exponents;
        for exp in exponents.iter_mut() {
            let raised = i32::from(*exp).checked_mul(power)?;
            *exp = i8::try_from(raised).ok()?;
        }
        Some(Dimension { exponents })
    }

    fn zip_with(self, rhs: Dimension, op: fn(i8, i8) -> Option<i8>) -> Option<Dimension> {
        let mut exponents = self.exponents;
        for (exp, other) in exponents.iter_mut().zip(rhs.exponents) {
            *exp = op(*exp, other)?;
        }
        Some(Dimension { exponents })
    }
}

impl fmt::Display for Dimension {
    /// Renders as `[length] / [time] ** 2`; dimensionless renders as `dimensionless`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }

        let render = |base: BaseDimension, exp: i8| {
            if exp == 1 {
                base.to_string()
            } else {
                format!("{} ** {}", base, exp)
            }
        };

        let numerator: Vec<String> = BaseDimension::ALL
            .iter()
            .filter(|b| self.exponent(**b) > 0)
            .map(|b| render(*b, self.exponent(*b)))
            .collect();
        let denominator: Vec<String> = BaseDimension::ALL
            .iter()
            .filter(|b| self.exponent(**b) < 0)
            .map(|b| render(*b, -self.exponent(*b)))
            .collect();

        let numerator = if numerator.is_empty() {
            "1".to_string()
        } else {
            numerator.join(" * ")
        };

        if denominator.is_empty() {
            write!(f, "{}", numerator)
        } else {
            write!(f, "{} / {}", numerator, denominator.join(" / "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_dimension() {
        let speed = Dimension::base(BaseDimension::Length)
            .checked_div(Dimension::base(BaseDimension::Time))
            .unwrap();
        assert_eq!(speed.exponent(BaseDimension::Length), 1);
        assert_eq!(speed.exponent(BaseDimension::Time), -1);
        assert_eq!(speed.to_string(), "[length] / [time]");
    }

    #[test]
    fn test_powi_and_display() {
        let area = Dimension::base(BaseDimension::Length).checked_powi(2).unwrap();
        assert_eq!(area.to_string(), "[length] ** 2");

        let force = Dimension::from_pairs(&[
            (BaseDimension::Mass, 1),
            (BaseDimension::Length, 1),
            (BaseDimension::Time, -2),
        ]);
        assert_eq!(force.to_string(), "[length] * [mass] / [time] ** 2");
    }

    #[test]
    fn test_dimensionless() {
        let length = Dimension::base(BaseDimension::Length);
        let ratio = length.checked_div(length).unwrap();
        assert!(ratio.is_dimensionless());
        assert_eq!(ratio.to_string(), "dimensionless");
    }

    #[test]
    fn test_inverse_only() {
        let frequency = Dimension::base(BaseDimension::Time).checked_powi(-1).unwrap();
        assert_eq!(frequency.to_string(), "1 / [time]");
    }

    #[test]
    fn test_exponent_overflow_is_reported() {
        let length = Dimension::base(BaseDimension::Length);
        let big = length.checked_powi(64).unwrap();
        assert_eq!(big.exponent(BaseDimension::Length), 64);

        assert_eq!(big.checked_mul(big), None);
        assert_eq!(big.checked_powi(64), None);
        assert_eq!(big.checked_powi(-2), Some(length.checked_powi(-128).unwrap()));
        let small = length.checked_powi(-64).unwrap();
        assert!(small.checked_div(big).is_some());
        assert_eq!(small.checked_div(length.checked_powi(65).unwrap()), None);
    }

    #[test]
    fn test_from_pairs_accumulates() {
        let dim = Dimension::from_pairs(&[(BaseDimension::Length, 1), (BaseDimension::Length, 2)]);
        assert_eq!(dim.exponent(BaseDimension::Length), 3);
        let saturated =
            Dimension::from_pairs(&[(BaseDimension::Mass, 100), (BaseDimension::Mass, 100)]);
        assert_eq!(saturated.exponent(BaseDimension::Mass), i8::MAX);
    }
}
