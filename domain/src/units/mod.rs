//! Units subdomain.
//!
//! - [`dimension::Dimension`] - exponent vector over base dimensions
//! - [`unit::Unit`] - a resolved unit with scale and optional offset
//! - [`conversion`] - conversion requests, results and failure reasons
//! - [`format`] - significant-digit rendering of results

pub mod conversion;
pub mod dimension;
pub mod format;
pub mod unit;
