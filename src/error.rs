//! Application error types.
//!
//! These errors are serializable so they can be returned from the companion
//! HTTP API with a meaningful, structured message.

use serde::Serialize;
use thiserror::Error;

/// Application-level errors.
///
/// All variants serialize to a structured JSON object for API consumers.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    /// Network request failed (connectivity, timeout or non-success status).
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },

    /// Response payload could not be decoded.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Configuration is invalid (e.g. malformed endpoint).
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<String>,
    },

    /// Internal application error.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a transport error for a non-success HTTP status.
    pub fn transport_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::Transport {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a configuration error with field name.
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether a fetch failing with this error should be attempted again.
    ///
    /// Transport and decode failures are retried identically; a broken
    /// configuration will not fix itself between attempts.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Decode { .. })
    }
}

// Conversions from common error types

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::transport("Request timed out")
        } else if err.is_connect() {
            Self::transport("Failed to connect to server")
        } else if let Some(status) = err.status() {
            Self::transport_status(format!("HTTP error: {}", err), status.as_u16())
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Invalid config file: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = AppError::transport("connection refused");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"Transport\""));
        assert!(json.contains("connection refused"));
    }

    #[test]
    fn test_transport_status_serialization() {
        let err = AppError::transport_status("Service Unavailable", 503);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"status_code\":503"));
    }

    #[test]
    fn test_optional_fields_not_serialized() {
        let err = AppError::config("bad endpoint");
        let json = serde_json::to_string(&err).unwrap();
        // field is None, so should not appear
        assert!(!json.contains("field"));
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(AppError::transport("down").is_retryable());
        assert!(AppError::decode("truncated").is_retryable());
        assert!(!AppError::config_field("not a url", "endpoint").is_retryable());
        assert!(!AppError::internal("oops").is_retryable());
    }

    #[test]
    fn test_json_error_is_decode() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Decode { .. }));
    }

    #[test]
    fn test_display_impl() {
        let err = AppError::decode("missing field `result`");
        assert_eq!(format!("{}", err), "Decode error: missing field `result`");
    }
}
