//! Parsing of REPL input lines

use smartconv_domain::ConversionRequest;
use thiserror::Error;

/// Words accepted between the source and target unit (`5 km to mi`)
const SEPARATORS: &[&str] = &["to", "in", "into", "->"];

/// Separators that are also unit symbols (`in` is the inch)
const UNIT_SEPARATORS: &[&str] = &["in"];

/// Which service plain lines go to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Converter,
    Ask,
}

impl Mode {
    /// Prompt label
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Converter => "convert",
            Mode::Ask => "ask",
        }
    }
}

/// A slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Switch to converter mode, optionally converting right away
    Convert(Option<String>),
    /// Switch to ask mode, optionally asking right away
    Ask(Option<String>),
    /// List units, optionally like an example expression
    Units(Option<String>),
    /// List the models the gateway offers
    Models,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim().to_string()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };

        Some(match name {
            "convert" | "c" => ReplCommand::Convert(arg),
            "ask" | "a" => ReplCommand::Ask(arg),
            "units" | "u" => ReplCommand::Units(arg),
            "models" | "m" => ReplCommand::Models,
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        })
    }
}

/// Why a converter line could not be understood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter valid units.")]
    MissingUnits,

    #[error("'{0}' is not a number.")]
    InvalidNumber(String),
}

/// Parse `<value> <from> <to>` or `<value> <from> to <to>`.
///
/// Unit expressions may contain spaces only when an explicit separator is
/// used: `20 degree Celsius to kelvin`.
pub fn parse_conversion(line: &str) -> Result<ConversionRequest, InputError> {
    let line = line.trim();
    let (value_token, rest) = line
        .split_once(char::is_whitespace)
        .ok_or(InputError::MissingUnits)?;

    let value: f64 = value_token
        .parse()
        .map_err(|_| InputError::InvalidNumber(value_token.to_string()))?;

    let words: Vec<&str> = rest.split_whitespace().collect();

    let last = words.len().saturating_sub(1);
    if let Some(pos) = (1..last).rev().find(|&i| SEPARATORS.contains(&words[i])) {
        let from = words[..pos].join(" ");
        let to = words[pos + 1..].join(" ");
        return Ok(ConversionRequest::new(value, from, to));
    }

    // A separator with nothing on one side: "5 meters to"
    if words
        .iter()
        .any(|w| SEPARATORS.contains(w) && !UNIT_SEPARATORS.contains(w))
    {
        return Err(InputError::MissingUnits);
    }

    match words.as_slice() {
        [from, to] => Ok(ConversionRequest::new(value, *from, *to)),
        _ => Err(InputError::MissingUnits),
    }
}
