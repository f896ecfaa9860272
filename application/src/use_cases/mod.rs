//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_ai;
pub mod convert_units;
pub mod list_units;
