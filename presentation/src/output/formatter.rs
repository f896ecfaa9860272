//! Output formatter trait

use smartconv_application::{AskError, ConvertError, UnitDescriptor};
use smartconv_domain::{Answer, Conversion, ModelId};

/// Renders service results for the terminal.
///
/// `Ok` renderings go to stdout, error renderings to stderr; callers decide.
pub trait OutputFormatter: Send + Sync {
    /// A successful conversion
    fn conversion(&self, conversion: &Conversion) -> String;

    /// A rejected conversion (a warning, not a crash)
    fn conversion_error(&self, error: &ConvertError) -> String;

    /// A model answer
    fn answer(&self, answer: &Answer) -> String;

    /// A failed question
    fn ask_error(&self, error: &AskError) -> String;

    /// A unit listing
    fn units(&self, units: &[UnitDescriptor]) -> String;

    /// Models the gateway offers; `current` is the configured one
    fn models(&self, models: &[ModelId], current: &ModelId) -> String;
}
