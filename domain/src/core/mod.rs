//! Core domain concepts shared across subdomains.
//!
//! - [`model::ModelId`] - the generative model a prompt is sent to
//! - [`prompt::Prompt`] - a validated, non-empty question
//! - [`answer::Answer`] - the text returned for a prompt
//! - [`error::DomainError`] - domain-level errors

pub mod answer;
pub mod error;
pub mod model;
pub mod prompt;
pub mod string;
