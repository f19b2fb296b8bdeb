//! # Response Envelope Types
//!
//! The normalized success/error shapes every network call resolves to.
//!
//! ## The One Invariant That Matters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ApiResult<T>                                    │
//! │                                                                         │
//! │  Every network-calling function returns this tagged result:            │
//! │                                                                         │
//! │     Ok(Envelope<T>)   { data, message, status }                        │
//! │     Err(ApiFailure)   { error, status, code, details, data,            │
//! │                         validation_errors }                            │
//! │                                                                         │
//! │  Exactly one variant is active. Callers branch on the tag before      │
//! │  touching payload fields. Expected failures (4xx/5xx/network) are      │
//! │  NEVER panics and never bubble as reqwest errors.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The backend wire envelopes carry a `success: true/false` flag; on the
//! Rust side the `Result` tag *is* that flag, so the normalized types do
//! not repeat it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fixed, translation-catalog message keys surfaced by the normalizer.
///
/// These are opaque i18n keys from the storefront's message catalog; the
/// request layer carries them verbatim and never interprets them.
pub mod messages {
    pub const UNAUTHORIZED: &str = "Global.Error.Server.UNAUTHORIZED";
    pub const NOT_FOUND: &str = "Global.Error.Server.NOT_FOUND";
    pub const INTERNAL_SERVER_ERROR: &str = "Global.Error.Server.INTERNAL_SERVER_ERROR";
    pub const SERVICE_UNAVAILABLE: &str = "Global.Error.Server.SERVICE_IS_NOT_AVAILABLE";
    pub const AN_ERROR_OCCURRED: &str = "Global.Error.Server.AN_ERROR_OCCURRED";
    pub const UNEXPECTED_ERROR: &str = "Global.Error.Server.AN_UNEXPECTED_ERROR_OCCURRED";

    /// Default success message when the backend omits one.
    pub const SUCCESS: &str = "Success";

    /// Fixed message key for infrastructure failures whose bodies are
    /// never parsed (the body of a 500 is not trustworthy anyway).
    pub fn common_error_key(status: u16) -> Option<&'static str> {
        match status {
            404 => Some(NOT_FOUND),
            500 => Some(INTERNAL_SERVER_ERROR),
            503 => Some(SERVICE_UNAVAILABLE),
            _ => None,
        }
    }
}

/// The tagged result every network call resolves to.
pub type ApiResult<T> = Result<Envelope<T>, ApiFailure>;

/// Normalized success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Deserialized `data` field of the backend envelope
    pub data: T,

    /// Backend message, defaulting to `"Success"` when absent
    pub message: String,

    /// HTTP status of the response
    pub status: u16,
}

/// Normalized error envelope.
///
/// ## Field Provenance
/// - `error`: fixed message key (401/404/500/503/transport) or the
///   server-supplied `message` (joined with `" | "` when it is an array)
/// - `code` / `details` / `validation_errors`: passed through from the
///   response body when present, untouched
/// - `data`: partial payload some validation failures carry; defaults to
///   an empty object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{error} (status {status})")]
pub struct ApiFailure {
    /// Message key or server-supplied message for display
    pub error: String,

    /// HTTP status, forced to 500 for transport-level failures
    pub status: u16,

    /// Machine-readable error code from the body, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,

    /// Free-form detail payload from the body, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,

    /// Partial data some failures carry (empty object otherwise)
    #[serde(default = "empty_object")]
    pub data: Value,

    /// Per-field validation errors from the body, if any
    #[serde(default, rename = "validationErrors", skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Value>,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

impl ApiFailure {
    /// Creates a failure with a message and status, all passthrough fields
    /// empty.
    pub fn new(error: impl Into<String>, status: u16) -> Self {
        ApiFailure {
            error: error.into(),
            status,
            code: None,
            details: None,
            data: empty_object(),
            validation_errors: None,
        }
    }

    /// Converts a transport-level failure (DNS, refused connection,
    /// timeout, body decode) into the error variant.
    ///
    /// Status is forced to 500; the message is the failure's own, or the
    /// generic unexpected-error key when it carries none.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            messages::UNEXPECTED_ERROR.to_string()
        } else {
            message
        };
        ApiFailure::new(message, 500)
    }
}

impl Default for ApiFailure {
    fn default() -> Self {
        ApiFailure::new(messages::AN_ERROR_OCCURRED, 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_error_keys() {
        assert_eq!(messages::common_error_key(404), Some(messages::NOT_FOUND));
        assert_eq!(
            messages::common_error_key(500),
            Some(messages::INTERNAL_SERVER_ERROR)
        );
        assert_eq!(
            messages::common_error_key(503),
            Some(messages::SERVICE_UNAVAILABLE)
        );
        assert_eq!(messages::common_error_key(400), None);
        assert_eq!(messages::common_error_key(401), None);
    }

    #[test]
    fn test_failure_display_carries_status() {
        let failure = ApiFailure::new(messages::NOT_FOUND, 404);
        assert_eq!(
            failure.to_string(),
            "Global.Error.Server.NOT_FOUND (status 404)"
        );
    }

    #[test]
    fn test_transport_failure_forces_status_500() {
        let failure = ApiFailure::transport("connection refused");
        assert_eq!(failure.status, 500);
        assert_eq!(failure.error, "connection refused");
    }

    #[test]
    fn test_transport_failure_without_message_falls_back() {
        let failure = ApiFailure::transport("");
        assert_eq!(failure.error, messages::UNEXPECTED_ERROR);
    }

    #[test]
    fn test_failure_serializes_wire_field_names() {
        let mut failure = ApiFailure::new("bad input", 422);
        failure.validation_errors = Some(serde_json::json!({"name": "required"}));

        let value = serde_json::to_value(&failure).unwrap();
        assert!(value.get("validationErrors").is_some());
        assert_eq!(value["data"], serde_json::json!({}));
    }
}
