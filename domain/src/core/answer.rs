//! Answer value object

use super::model::ModelId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text returned by the model for a single prompt (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Model that produced the text
    pub model: ModelId,
    /// Response text, verbatim
    pub text: String,
    /// When the response was received
    pub received_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(model: ModelId, text: impl Into<String>) -> Self {
        Self {
            model,
            text: text.into(),
            received_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_serializes_model_as_string() {
        let answer = Answer::new(ModelId::Gemini15Flash, "Paris");
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["model"], "gemini-1.5-flash");
        assert_eq!(json["text"], "Paris");
        assert!(json["received_at"].is_string());
    }
}
