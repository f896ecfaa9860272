//! Unit resolver port
//!
//! Defines the interface to the unit-definition registry. The registry owns
//! unit names, dimensions and factors; the application only looks units up.

use smartconv_domain::{Dimension, InvalidConversion, Unit, UnitRangeError};
use thiserror::Error;

/// Errors raised while resolving a unit expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("{0}")]
    Syntax(String),

    #[error("offset unit '{0}' cannot be part of a compound expression")]
    OffsetUnitInCompound(String),
}

impl From<UnitRangeError> for ResolveError {
    fn from(err: UnitRangeError) -> Self {
        ResolveError::Syntax(err.to_string())
    }
}

impl From<ResolveError> for InvalidConversion {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::UnknownUnit(name) => InvalidConversion::UnknownUnit(name),
            ResolveError::Syntax(message) => InvalidConversion::Syntax(message),
            ResolveError::OffsetUnitInCompound(name) => {
                InvalidConversion::OffsetUnitInCompound(name)
            }
        }
    }
}

/// A named unit as listed by [`UnitResolver::catalog`]
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDescriptor {
    /// Canonical name, e.g. `meter`
    pub name: String,
    /// Short symbol, e.g. `m`
    pub symbol: String,
    /// Dimension of the unit
    pub dimension: Dimension,
    /// Whether SI prefixes may be attached
    pub prefixable: bool,
}

/// Resolves unit expressions (`"m"`, `"feet"`, `"km/h"`) into [`Unit`]s
///
/// Implementations are pure lookups and must be safe to share across threads.
pub trait UnitResolver: Send + Sync {
    /// Resolve a unit expression
    fn resolve(&self, expression: &str) -> Result<Unit, ResolveError>;

    /// List the named units this resolver knows about
    fn catalog(&self) -> Vec<UnitDescriptor>;
}
