// SPDX-License-Identifier: MPL-2.0
//! Errors produced while talking to the content server.

use std::fmt;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with an `error` field.
    Server(String),

    /// Non-success HTTP status without a structured error body.
    Http { status: u16, body: String },

    /// The request never completed (connection refused, timeout, ...).
    Transport(String),

    /// The response body was not the JSON we expected.
    Parse(String),

    /// A create call succeeded but did not return the new identifier.
    MissingId,
}

impl ApiError {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Server(_) => "error-api-server",
            ApiError::Http { .. } => "error-api-http",
            ApiError::Transport(_) => "error-api-transport",
            ApiError::Parse(_) => "error-api-parse",
            ApiError::MissingId => "error-api-missing-id",
        }
    }

    /// Returns the underlying detail, used as the `detail` i18n argument.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            ApiError::Server(msg) | ApiError::Transport(msg) | ApiError::Parse(msg) => {
                msg.clone()
            }
            ApiError::Http { status, body } if body.is_empty() => format!("HTTP {status}"),
            ApiError::Http { status, body } => format!("HTTP {status}: {body}"),
            ApiError::MissingId => String::new(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server(msg) => write!(f, "Server error: {msg}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Transport(msg) => write!(f, "Network error: {msg}"),
            ApiError::Parse(msg) => write!(f, "Invalid response: {msg}"),
            ApiError::MissingId => write!(f, "Server did not return the new content id"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_detail_is_the_message() {
        let err = ApiError::Server("title required".into());
        assert_eq!(err.detail(), "title required");
        assert_eq!(err.i18n_key(), "error-api-server");
    }

    #[test]
    fn http_detail_omits_empty_body() {
        let err = ApiError::Http {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.detail(), "HTTP 502");
    }

    #[test]
    fn parse_error_from_serde() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
