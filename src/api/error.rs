//! Error taxonomy for the site API
//!
//! One canonical mapping from HTTP status to outcome, shared by both
//! submission flows.

use reqwest::StatusCode;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 500: no detail is ever surfaced
    #[error("server error")]
    Server,

    /// HTTP 400: per-field messages to reveal inline
    #[error("submission rejected")]
    Validation(HashMap<String, String>),

    /// HTTP 404: the referenced entry no longer exists
    #[error("target not found")]
    NotFound,

    /// Any other status; carries a message extracted from the body when
    /// one was present
    #[error("request failed")]
    Unknown { message: Option<String> },

    /// The request never produced a status (connection, DNS, body read)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The chosen attachment could not be read from disk
    #[error("could not read attachment: {0}")]
    Attachment(#[from] std::io::Error),
}

/// Map a non-2xx response to an outcome
pub fn error_for_status(status: StatusCode, body: &str) -> ApiError {
    match status.as_u16() {
        500 => ApiError::Server,
        404 => ApiError::NotFound,
        400 => match parse_field_errors(body) {
            Some(errors) => ApiError::Validation(errors),
            None => ApiError::Unknown {
                message: extract_message(body),
            },
        },
        _ => ApiError::Unknown {
            message: extract_message(body),
        },
    }
}

/// Parse a 400 body into a field → message map. The server emits either
/// `{"field": "msg"}` or `{"field": ["msg", ...]}`; both are accepted.
fn parse_field_errors(body: &str) -> Option<HashMap<String, String>> {
    let raw: HashMap<String, serde_json::Value> = serde_json::from_str(body).ok()?;

    let mut errors = HashMap::new();
    for (field, value) in raw {
        let message = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Array(items) => items
                .into_iter()
                .find_map(|v| v.as_str().map(str::to_string))?,
            _ => return None,
        };
        errors.insert(field, message);
    }

    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

/// Best-effort message from an unstructured error body
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "detail"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            return Some(msg.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_500_maps_to_server_error() {
        let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "irrelevant");
        assert!(matches!(err, ApiError::Server));
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let err = error_for_status(StatusCode::NOT_FOUND, "");
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn test_400_with_string_values() {
        let err = error_for_status(StatusCode::BAD_REQUEST, r#"{"title": "required"}"#);
        match err {
            ApiError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.get("title").map(String::as_str), Some("required"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_400_with_list_values_takes_first() {
        let body = r#"{"reporter": ["Enter a valid email address.", "second"]}"#;
        let err = error_for_status(StatusCode::BAD_REQUEST, body);
        match err {
            ApiError::Validation(errors) => {
                assert_eq!(
                    errors.get("reporter").map(String::as_str),
                    Some("Enter a valid email address.")
                );
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_400_without_structured_body_falls_back() {
        let err = error_for_status(StatusCode::BAD_REQUEST, "not json");
        assert!(matches!(err, ApiError::Unknown { message: None }));
    }

    #[test]
    fn test_unknown_status_extracts_message_field() {
        let err = error_for_status(StatusCode::FORBIDDEN, r#"{"message": "CSRF check failed"}"#);
        match err {
            ApiError::Unknown { message } => {
                assert_eq!(message.as_deref(), Some("CSRF check failed"));
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_status_extracts_detail_field() {
        let err = error_for_status(StatusCode::FORBIDDEN, r#"{"detail": "forbidden"}"#);
        match err {
            ApiError::Unknown { message } => assert_eq!(message.as_deref(), Some("forbidden")),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_status_without_body() {
        let err = error_for_status(StatusCode::BAD_GATEWAY, "");
        assert!(matches!(err, ApiError::Unknown { message: None }));
    }
}
