//! Interactive mode

pub mod assistant;
pub mod input;
