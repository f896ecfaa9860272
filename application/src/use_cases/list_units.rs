//! List Units use case.
//!
//! Lists the resolver's named units, optionally restricted to the dimension
//! of an example expression (`--like km/h` lists every speed unit).

use crate::ports::unit_resolver::{UnitDescriptor, UnitResolver};
use crate::use_cases::convert_units::ConvertError;
use smartconv_domain::InvalidConversion;
use std::sync::Arc;

#[derive(Clone)]
pub struct ListUnitsUseCase {
    resolver: Arc<dyn UnitResolver>,
}

impl ListUnitsUseCase {
    pub fn new(resolver: Arc<dyn UnitResolver>) -> Self {
        Self { resolver }
    }

    /// Named units sorted by dimension, then by name.
    pub fn execute(&self, like: Option<&str>) -> Result<Vec<UnitDescriptor>, ConvertError> {
        let dimension = match like {
            Some(expr) => Some(
                self.resolver
                    .resolve(expr)
                    .map_err(InvalidConversion::from)?
                    .dimension(),
            ),
            None => None,
        };

        let mut units: Vec<UnitDescriptor> = self
            .resolver
            .catalog()
            .into_iter()
            .filter(|u| dimension.is_none_or(|d| u.dimension == d))
            .collect();

        units.sort_by(|a, b| {
            a.dimension
                .to_string()
                .cmp(&b.dimension.to_string())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(units)
    }
}
