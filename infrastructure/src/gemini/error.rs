//! Mapping of HTTP failures onto [`GatewayError`]

use super::protocol::ErrorEnvelope;
use reqwest::StatusCode;
use smartconv_application::GatewayError;

/// Translate a non-success response into a [`GatewayError`].
///
/// `body` is the raw response text; the provider's own message is used when
/// it parses as an error envelope.
pub fn from_status(status: StatusCode, body: &str) -> GatewayError {
    let (message, canonical) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.message, envelope.error.status),
        Err(_) if body.trim().is_empty() => (status.to_string(), String::new()),
        Err(_) => (body.trim().to_string(), String::new()),
    };

    match status.as_u16() {
        401 | 403 => GatewayError::Authentication(message),
        // Invalid keys come back as 400 INVALID_ARGUMENT
        400 if message.contains("API key") => GatewayError::Authentication(message),
        404 => GatewayError::ModelNotAvailable(message),
        429 => GatewayError::QuotaExceeded(message),
        500..=599 => GatewayError::ServerError(message),
        _ if canonical == "RESOURCE_EXHAUSTED" => GatewayError::QuotaExceeded(message),
        _ => GatewayError::RequestFailed(message),
    }
}

/// Translate a transport-level failure.
pub fn from_transport(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_connect() {
        GatewayError::ConnectionError(err.to_string())
    } else if err.is_decode() {
        GatewayError::Other(format!("Malformed response: {}", err))
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(code: u16, message: &str, status: &str) -> String {
        format!(
            r#"{{"error": {{"code": {}, "message": "{}", "status": "{}"}}}}"#,
            code, message, status
        )
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (401, GatewayError::Authentication("denied".into())),
            (403, GatewayError::Authentication("denied".into())),
            (404, GatewayError::ModelNotAvailable("denied".into())),
            (429, GatewayError::QuotaExceeded("denied".into())),
            (500, GatewayError::ServerError("denied".into())),
            (503, GatewayError::ServerError("denied".into())),
            (400, GatewayError::RequestFailed("denied".into())),
        ];
        for (code, expected) in cases {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(from_status(status, &envelope(code, "denied", "X")), expected);
        }
    }

    #[test]
    fn test_invalid_key_is_authentication() {
        let body = envelope(
            400,
            "API key not valid. Please pass a valid API key.",
            "INVALID_ARGUMENT",
        );
        assert!(matches!(
            from_status(StatusCode::BAD_REQUEST, &body),
            GatewayError::Authentication(_)
        ));
    }

    #[test]
    fn test_non_json_body() {
        assert_eq!(
            from_status(StatusCode::BAD_GATEWAY, "upstream hiccup\n"),
            GatewayError::ServerError("upstream hiccup".into())
        );
        assert_eq!(
            from_status(StatusCode::BAD_GATEWAY, ""),
            GatewayError::ServerError("502 Bad Gateway".into())
        );
    }
}
