/*
[INPUT]:  Error sources (transport failures, non-2xx responses, decoding, configuration)
[OUTPUT]: One normalized API error type plus a construction-time config error
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When the remote error body shape or the fallback chain changes
*/

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Message used when a failed response carries nothing usable.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// The single error kind surfaced by every API call.
///
/// Transport failures carry only a message. Non-2xx responses also carry the
/// status code resolved from the body (`statusCode`, then `status`, then the
/// HTTP status) and the optional application `code`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DuckWalletError {
    pub message: String,
    /// Wider than an HTTP status because the body may report any integer;
    /// values beyond `u32` fall through to the next source.
    pub status_code: Option<u32>,
    pub code: Option<String>,
}

impl DuckWalletError {
    /// Create an error with only a message (network/decoding failures)
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            code: None,
        }
    }

    pub fn with_status_code(mut self, status_code: u32) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Normalize a non-2xx response body into an error.
    ///
    /// A body that is not a JSON object is treated as empty. With
    /// `join_messages` set, a `message` array of strings becomes one message
    /// joined by ", ".
    pub fn from_response(status: StatusCode, body: &[u8], join_messages: bool) -> Self {
        let body: ErrorBody = serde_json::from_slice(body).unwrap_or_default();

        let message = body
            .message
            .as_ref()
            .and_then(|value| message_text(value, join_messages))
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

        let status_code = body
            .status_code
            .as_ref()
            .and_then(numeric_status)
            .or_else(|| body.status.as_ref().and_then(numeric_status))
            .unwrap_or_else(|| u32::from(status.as_u16()));

        let code = body
            .code
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            message,
            status_code: Some(status_code),
            code,
        }
    }

    /// True when the failure happened before any HTTP status was received
    pub fn is_network_error(&self) -> bool {
        self.status_code.is_none()
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code, Some(400..=499))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code, Some(500..=599))
    }
}

impl From<reqwest::Error> for DuckWalletError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for DuckWalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<url::ParseError> for DuckWalletError {
    fn from(err: url::ParseError) -> Self {
        Self::new(format!("Invalid URL: {err}"))
    }
}

/// Errors raised while building a client, before any request is sent
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Base URL could not be parsed
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// API key cannot be sent as a header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Required environment variable is absent
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Config file could not be read
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid YAML for [`crate::ClientConfig`]
    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias for Duck Wallet API operations
pub type Result<T> = std::result::Result<T, DuckWalletError>;

/// Error body of unknown shape; every field is checked by type on use.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default, rename = "statusCode")]
    status_code: Option<Value>,
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    code: Option<Value>,
}

fn message_text(value: &Value, join_messages: bool) -> Option<String> {
    match value {
        Value::String(message) => Some(message.clone()),
        Value::Array(parts) if join_messages => parts
            .iter()
            .map(Value::as_str)
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(", ")),
        _ => None,
    }
}

fn numeric_status(value: &Value) -> Option<u32> {
    let number = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && *n >= 0.0)
            .map(|n| n as u64)
    })?;
    u32::try_from(number).ok()
}
