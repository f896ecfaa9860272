//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use serde_json::{Value, json};
use smartconv_application::{AskError, ConvertError, GatewayError, UnitDescriptor};
use smartconv_domain::{Answer, Conversion, DEFAULT_PRECISION, InvalidConversion, ModelId};

/// Formats results as pretty-printed JSON documents
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    precision: usize,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl JsonFormatter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn render(value: Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn convert_kind(error: &ConvertError) -> &'static str {
        match error.reason() {
            InvalidConversion::UnknownUnit(_) => "unknown_unit",
            InvalidConversion::Syntax(_) => "syntax",
            InvalidConversion::OffsetUnitInCompound(_) => "offset_unit_in_compound",
            InvalidConversion::Incompatible { .. } => "incompatible",
            InvalidConversion::NonFiniteValue => "non_finite_value",
        }
    }

    fn ask_kind(error: &AskError) -> &'static str {
        match error {
            AskError::EmptyPrompt => "empty_prompt",
            AskError::EmptyResponse => "empty_response",
            AskError::Transport(cause) => match cause {
                GatewayError::ConnectionError(_) => "connection",
                GatewayError::MissingCredential(_) => "missing_credential",
                GatewayError::Authentication(_) => "authentication",
                GatewayError::QuotaExceeded(_) => "quota_exceeded",
                GatewayError::ModelNotAvailable(_) => "model_not_available",
                GatewayError::ServerError(_) => "server_error",
                GatewayError::RequestFailed(_) => "request_failed",
                GatewayError::Timeout => "timeout",
                GatewayError::Other(_) => "other",
            },
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn conversion(&self, conversion: &Conversion) -> String {
        Self::render(json!({
            "value": conversion.value,
            "from_unit": conversion.from_unit,
            "converted": conversion.converted,
            "to_unit": conversion.to_unit,
            "formatted": conversion.formatted(self.precision),
        }))
    }

    fn conversion_error(&self, error: &ConvertError) -> String {
        Self::render(json!({
            "error": Self::convert_kind(error),
            "message": error.to_string(),
        }))
    }

    fn answer(&self, answer: &Answer) -> String {
        Self::render(serde_json::to_value(answer).unwrap_or(Value::Null))
    }

    fn ask_error(&self, error: &AskError) -> String {
        Self::render(json!({
            "error": Self::ask_kind(error),
            "message": error.to_string(),
        }))
    }

    fn units(&self, units: &[UnitDescriptor]) -> String {
        let entries: Vec<Value> = units
            .iter()
            .map(|u| {
                json!({
                    "name": u.name,
                    "symbol": u.symbol,
                    "dimension": u.dimension.to_string(),
                    "prefixable": u.prefixable,
                })
            })
            .collect();
        Self::render(Value::Array(entries))
    }

    fn models(&self, models: &[ModelId], current: &ModelId) -> String {
        let entries: Vec<Value> = models
            .iter()
            .map(|m| json!({ "id": m.as_str(), "current": m == current }))
            .collect();
        Self::render(Value::Array(entries))
    }
}
