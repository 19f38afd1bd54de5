//! Error taxonomy for calls against the backend REST API.

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 422 with field-level messages (`{message, errors: {field: [..]}}`)
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    /// 401 / 403, the session layer reacts to these
    #[error("Not authorized ({status}): {message}")]
    Auth { status: u16, message: String },

    /// 5xx
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-2xx status
    #[error("HTTP error ({status}): {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not what the endpoint promises
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    ///
    /// `body` is the raw response text; a Laravel style `{message, errors}`
    /// payload is picked apart when present.
    pub fn from_response(status: u16, body: &str) -> Self {
        let payload: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        let backend_message = payload
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|m| !m.trim().is_empty());

        match status {
            422 => ApiError::Validation {
                message: backend_message.unwrap_or_else(|| "Validation error".to_string()),
                fields: parse_field_errors(&payload),
            },
            401 => ApiError::Auth {
                status,
                message: backend_message
                    .unwrap_or_else(|| "Session expired. Please login again.".to_string()),
            },
            403 => ApiError::Auth {
                status,
                message: backend_message.unwrap_or_else(|| {
                    "You do not have permission to perform this action.".to_string()
                }),
            },
            s if s >= 500 => ApiError::Server {
                status,
                message: backend_message.unwrap_or_else(|| {
                    "Internal Server Error. Please try again later.".to_string()
                }),
            },
            _ => ApiError::Http {
                status,
                message: backend_message.unwrap_or_else(|| format!("Request failed: {}", status)),
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation { .. } => Some(422),
            ApiError::Auth { status, .. }
            | ApiError::Server { status, .. }
            | ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// True for a 401: the stored session is no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Auth { status: 401, .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation { .. })
    }

    /// Field errors of a 422, empty for everything else.
    pub fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        match self {
            ApiError::Validation { fields, .. } => fields.clone(),
            _ => BTreeMap::new(),
        }
    }

    /// Text shown to the user in a notice banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation { message, fields } => {
                if fields.is_empty() {
                    message.clone()
                } else {
                    fields.values().flatten().cloned().collect::<Vec<_>>().join("\n")
                }
            }
            ApiError::Auth { message, .. }
            | ApiError::Server { message, .. }
            | ApiError::Http { message, .. } => message.clone(),
            ApiError::Transport(_) => "Network error. Check your connection.".to_string(),
            ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
        }
    }
}

fn parse_field_errors(payload: &Value) -> BTreeMap<String, Vec<String>> {
    let Some(errors) = payload.get("errors").and_then(Value::as_object) else {
        return BTreeMap::new();
    };

    errors
        .iter()
        .map(|(field, messages)| {
            let list = match messages {
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
                Value::String(s) => vec![s.clone()],
                _ => Vec::new(),
            };
            (field.clone(), list)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_keeps_field_messages() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "citCode": ["The city code has already been taken."],
                "citName": ["The city name is required.", "The city name is too short."]
            }
        }"#;

        let err = ApiError::from_response(422, body);
        assert!(err.is_validation());
        assert_eq!(err.status(), Some(422));

        let fields = err.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["citName"].len(), 2);
        assert_eq!(
            err.user_message(),
            "The city code has already been taken.\nThe city name is required.\nThe city name is too short."
        );
    }

    #[test]
    fn test_validation_without_fields_uses_message() {
        let err = ApiError::from_response(422, r#"{"message": "Region is in use"}"#);
        assert_eq!(err.user_message(), "Region is in use");
    }

    #[test]
    fn test_status_classification() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(matches!(
            ApiError::from_response(403, "{}"),
            ApiError::Auth { status: 403, .. }
        ));
        assert!(!ApiError::from_response(403, "{}").is_unauthorized());
        assert!(matches!(
            ApiError::from_response(503, "<html>"),
            ApiError::Server { status: 503, .. }
        ));
        assert!(matches!(
            ApiError::from_response(404, r#"{"message": "Region not found"}"#),
            ApiError::Http { status: 404, ref message } if message == "Region not found"
        ));
    }

    #[test]
    fn test_default_messages_when_body_is_not_json() {
        let err = ApiError::from_response(500, "Internal Server Error");
        assert_eq!(
            err.user_message(),
            "Internal Server Error. Please try again later."
        );

        let err = ApiError::from_response(401, "");
        assert_eq!(err.user_message(), "Session expired. Please login again.");
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert!(err.field_errors().is_empty());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }
}
