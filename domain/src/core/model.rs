//! Model identifier value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generative models a prompt can be sent to (Value Object)
///
/// Known Gemini variants get their own variant; anything else is carried
/// through verbatim as `Custom` so new model names need no code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelId {
    Gemini15Flash,
    Gemini15Pro,
    Gemini20Flash,
    Gemini25Flash,
    Gemini25Pro,
    Custom(String),
}

impl ModelId {
    /// Get the string identifier used on the wire
    pub fn as_str(&self) -> &str {
        match self {
            ModelId::Gemini15Flash => "gemini-1.5-flash",
            ModelId::Gemini15Pro => "gemini-1.5-pro",
            ModelId::Gemini20Flash => "gemini-2.0-flash",
            ModelId::Gemini25Flash => "gemini-2.5-flash",
            ModelId::Gemini25Pro => "gemini-2.5-pro",
            ModelId::Custom(s) => s,
        }
    }

    /// Models known to this build
    pub fn known_models() -> Vec<ModelId> {
        vec![
            ModelId::Gemini15Flash,
            ModelId::Gemini15Pro,
            ModelId::Gemini20Flash,
            ModelId::Gemini25Flash,
            ModelId::Gemini25Pro,
        ]
    }

    /// Parse a user-supplied model name, rejecting blank input.
    pub fn parse_checked(s: &str) -> Result<ModelId, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidModel(s.to_string()));
        }
        Ok(ModelId::from(trimmed))
    }
}

impl Default for ModelId {
    /// The free-tier flash model
    fn default() -> Self {
        ModelId::Gemini15Flash
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        match s {
            "gemini-1.5-flash" => ModelId::Gemini15Flash,
            "gemini-1.5-pro" => ModelId::Gemini15Pro,
            "gemini-2.0-flash" => ModelId::Gemini20Flash,
            "gemini-2.5-flash" => ModelId::Gemini25Flash,
            "gemini-2.5-pro" => ModelId::Gemini25Pro,
            other => ModelId::Custom(other.to_string()),
        }
    }
}

impl std::str::FromStr for ModelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ModelId::from(s))
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ModelId::parse_checked(&s).map_err(serde::de::Error::custom)
    }
}
