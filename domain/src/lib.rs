//! Domain layer for smartconv
//!
//! This crate contains the value objects both services work with. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Units
//!
//! A [`Unit`] is a scale (and, for temperature scales, an offset) relative to
//! the coherent base unit of its [`Dimension`]. Two units convert into each
//! other only when their dimensions are equal.
//!
//! ## Prompts
//!
//! A [`Prompt`] is a non-empty question for a generative model identified by
//! a [`ModelId`]; the reply is an [`Answer`].

pub mod config;
pub mod core;
pub mod units;

// Re-export commonly used types
pub use config::OutputFormat;
pub use self::core::{
    answer::Answer, error::DomainError, model::ModelId, prompt::Prompt, string::truncate,
};
pub use units::{
    conversion::{Conversion, ConversionRequest, InvalidConversion, convert_value},
    dimension::{BaseDimension, Dimension},
    format::{DEFAULT_PRECISION, format_significant},
    unit::{Unit, UnitRangeError},
};
