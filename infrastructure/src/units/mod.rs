//! Unit registry adapter

pub mod definitions;
pub mod parser;
pub mod registry;

pub use registry::BuiltinUnitRegistry;
