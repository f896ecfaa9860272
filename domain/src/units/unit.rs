//! Resolved unit value object

use super::dimension::Dimension;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unit algebra produced something a [`Unit`] cannot represent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRangeError {
    #[error("dimension exponent out of range")]
    Exponent,

    #[error("unit magnitude out of range")]
    Scale,
}

/// A unit resolved from user input (Value Object)
///
/// A value `v` expressed in this unit equals `v * scale + offset` in the
/// coherent base unit of its dimension (metre, kilogram, second, kelvin, ...).
/// `offset` is non-zero only for affine temperature scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    name: String,
    scale: f64,
    offset: f64,
    dimension: Dimension,
}

impl Unit {
    /// Create a linear unit.
    pub fn new(name: impl Into<String>, scale: f64, dimension: Dimension) -> Self {
        Self {
            name: name.into(),
            scale,
            offset: 0.0,
            dimension,
        }
    }

    /// A pure number with scale 1.
    pub fn dimensionless() -> Self {
        Self::new("", 1.0, Dimension::dimensionless())
    }

    /// Set an affine offset (e.g. 273.15 for degree Celsius).
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Whether this unit has a non-multiplicative zero point.
    pub fn is_offset(&self) -> bool {
        self.offset != 0.0
    }

    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Express `value` (in this unit) in the base unit.
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Express `base_value` (in the base unit) in this unit.
    pub fn from_base(&self, base_value: f64) -> f64 {
        (base_value - self.offset) / self.scale
    }

    /// Product of two linear units. The result is unnamed.
    pub fn multiply(&self, other: &Unit) -> Result<Unit, UnitRangeError> {
        let dimension = self
            .dimension
            .checked_mul(other.dimension)
            .ok_or(UnitRangeError::Exponent)?;
        Self::compose(self.scale * other.scale, dimension)
    }

    /// Quotient of two linear units. The result is unnamed.
    pub fn divide(&self, other: &Unit) -> Result<Unit, UnitRangeError> {
        let dimension = self
            .dimension
            .checked_div(other.dimension)
            .ok_or(UnitRangeError::Exponent)?;
        Self::compose(self.scale / other.scale, dimension)
    }

    /// Integer power of a linear unit. The result is unnamed.
    pub fn powi(&self, power: i32) -> Result<Unit, UnitRangeError> {
        let dimension = self
            .dimension
            .checked_powi(power)
            .ok_or(UnitRangeError::Exponent)?;
        Self::compose(self.scale.powi(power), dimension)
    }

    // Scale must stay a positive finite number for to_base/from_base to invert.
    fn compose(scale: f64, dimension: Dimension) -> Result<Unit, UnitRangeError> {
        if scale.is_finite() && scale > 0.0 {
            Ok(Unit::new("", scale, dimension))
        } else {
            Err(UnitRangeError::Scale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::dimension::BaseDimension;

    fn length() -> Dimension {
        Dimension::base(BaseDimension::Length)
    }

    #[test]
    fn test_linear_base_roundtrip() {
        let foot = Unit::new("foot", 0.3048, length());
        assert!((foot.to_base(10.0) - 3.048).abs() < 1e-12);
        assert!((foot.from_base(3.048) - 10.0).abs() < 1e-12);
        assert!(!foot.is_offset());
    }

    #[test]
    fn test_offset_unit() {
        let celsius = Unit::new("degC", 1.0, Dimension::base(BaseDimension::Temperature))
            .with_offset(273.15);
        assert!(celsius.is_offset());
        assert!((celsius.to_base(0.0) - 273.15).abs() < 1e-12);
        assert!((celsius.from_base(373.15) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_compound_algebra() {
        let km = Unit::new("km", 1000.0, length());
        let hour = Unit::new("h", 3600.0, Dimension::base(BaseDimension::Time));
        let kmh = km.divide(&hour).unwrap();
        assert!((kmh.scale() - 1000.0 / 3600.0).abs() < 1e-12);
        assert_eq!(kmh.dimension().exponent(BaseDimension::Time), -1);

        let square_km = km.powi(2).unwrap();
        assert_eq!(square_km.scale(), 1.0e6);
        assert_eq!(square_km.dimension(), length().checked_powi(2).unwrap());

        let km_h = km.multiply(&hour).unwrap();
        assert_eq!(km_h.dimension().exponent(BaseDimension::Time), 1);
    }

    #[test]
    fn test_compatibility() {
        let metre = Unit::new("m", 1.0, length());
        let gram = Unit::new("g", 1e-3, Dimension::base(BaseDimension::Mass));
        assert!(metre.is_compatible_with(&metre.clone().with_name("meter")));
        assert!(!metre.is_compatible_with(&gram));
    }

    #[test]
    fn test_algebra_out_of_range() {
        let metre = Unit::new("m", 1.0, length());
        let big = metre.powi(64).unwrap();
        assert_eq!(big.multiply(&big), Err(UnitRangeError::Exponent));
        assert_eq!(big.powi(64), Err(UnitRangeError::Exponent));

        let km = Unit::new("km", 1000.0, length());
        let huge = km.powi(60).unwrap();
        assert_eq!(huge.multiply(&huge), Err(UnitRangeError::Scale));
        assert_eq!(km.powi(-60).unwrap().divide(&huge), Err(UnitRangeError::Scale));
    }
}
