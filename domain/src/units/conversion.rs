//! Conversion request, result and failure types

use super::dimension::Dimension;
use super::format::{DEFAULT_PRECISION, format_significant};
use super::unit::Unit;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value to convert between two unit expressions (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

/// Why a conversion could not be performed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidConversion {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("cannot parse unit expression: {0}")]
    Syntax(String),

    #[error("offset unit '{0}' cannot be part of a compound expression")]
    OffsetUnitInCompound(String),

    #[error("cannot convert from '{from_unit}' ({from}) to '{to_unit}' ({to})")]
    Incompatible {
        from_unit: String,
        from: Dimension,
        to_unit: String,
        to: Dimension,
    },

    #[error("value must be a finite number")]
    NonFiniteValue,
}

/// A successful conversion (Value Object)
///
/// Keeps the unrounded `converted` value; rounding only happens when the
/// result is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    pub from_unit: String,
    pub converted: f64,
    pub to_unit: String,
}

impl Conversion {
    /// Render as `"<value> <from> = <converted> <to>"` with `precision`
    /// significant digits.
    pub fn formatted(&self, precision: usize) -> String {
        format!(
            "{} {} = {} {}",
            format_significant(self.value, precision),
            self.from_unit,
            format_significant(self.converted, precision),
            self.to_unit
        )
    }

    /// Render with the default precision.
    pub fn formatted_text(&self) -> String {
        self.formatted(DEFAULT_PRECISION)
    }

    /// The reverse request, used for round-trip checks.
    pub fn inverse_request(&self) -> ConversionRequest {
        ConversionRequest::new(self.converted, self.to_unit.clone(), self.from_unit.clone())
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted_text())
    }
}

/// Convert `value` from `from` to `to`, checking dimensions.
///
/// Goes through the base unit so affine scales (degC, degF) are handled by
/// the same path as linear ones.
pub fn convert_value(value: f64, from: &Unit, to: &Unit) -> Result<f64, InvalidConversion> {
    if !value.is_finite() {
        return Err(InvalidConversion::NonFiniteValue);
    }
    if !from.is_compatible_with(to) {
        return Err(InvalidConversion::Incompatible {
            from_unit: from.name().to_string(),
            from: from.dimension(),
            to_unit: to.name().to_string(),
            to: to.dimension(),
        });
    }
    Ok(to.from_base(from.to_base(value)))
}
