//! Convert Units use case.
//!
//! Resolves both unit expressions through the [`UnitResolver`] port, checks
//! that they share a dimension and converts the value. Pure: no I/O and no
//! state beyond the resolver itself.

use crate::ports::unit_resolver::UnitResolver;
use smartconv_domain::{Conversion, ConversionRequest, InvalidConversion, convert_value};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Invalid conversion: {0}")]
    InvalidConversion(#[from] InvalidConversion),
}

impl ConvertError {
    /// The underlying reason.
    pub fn reason(&self) -> &InvalidConversion {
        match self {
            ConvertError::InvalidConversion(reason) => reason,
        }
    }
}

/// Use case for converting a value between two unit expressions.
#[derive(Clone)]
pub struct ConvertUnitsUseCase {
    resolver: Arc<dyn UnitResolver>,
}

impl ConvertUnitsUseCase {
    pub fn new(resolver: Arc<dyn UnitResolver>) -> Self {
        Self { resolver }
    }

    /// Convert `request.value` from `request.from_unit` to `request.to_unit`.
    pub fn execute(&self, request: ConversionRequest) -> Result<Conversion, ConvertError> {
        info!(
            "Converting {} {} -> {}",
            request.value, request.from_unit, request.to_unit
        );

        if !request.value.is_finite() {
            return Err(InvalidConversion::NonFiniteValue.into());
        }

        let from = self
            .resolver
            .resolve(&request.from_unit)
            .map_err(InvalidConversion::from)?;
        let to = self
            .resolver
            .resolve(&request.to_unit)
            .map_err(InvalidConversion::from)?;

        debug!(
            from_scale = from.scale(),
            from_offset = from.offset(),
            to_scale = to.scale(),
            to_offset = to.offset(),
            dimension = %from.dimension(),
            "Resolved units"
        );

        let from = from.with_name(request.from_unit.trim());
        let to = to.with_name(request.to_unit.trim());
        let converted = convert_value(request.value, &from, &to)?;

        Ok(Conversion {
            value: request.value,
            from_unit: from.name().to_string(),
            converted,
            to_unit: to.name().to_string(),
        })
    }
}
