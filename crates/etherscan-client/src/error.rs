// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the Etherscan client.

use thiserror::Error;

/// Convenience result alias used across the crate.
pub type EtherscanResult<T> = Result<T, EtherscanError>;

/// Errors surfaced by client construction and request dispatch.
///
/// No distinction is made between 4xx and 5xx responses and nothing is
/// retried; a non-200 answer is surfaced as [`EtherscanError::Api`] (or
/// suppressed entirely when the client runs in silent mode).
#[derive(Debug, Error)]
pub enum EtherscanError {
    /// The API answered with a non-200 status.
    ///
    /// Renders as `<status> <body>`: the numeric status code followed by
    /// the raw response body text.
    #[error("{status} {body}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The HTTP transport failed before a response was fully read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 200 response carried a body that was not valid JSON.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration input.
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration.
        message: String,
    },
}

impl EtherscanError {
    /// Builds a configuration error from any message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error is a non-200 API response.
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Status code of the failed response, for API response errors.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for EtherscanError {
    fn from(error: config::ConfigError) -> Self {
        Self::config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_renders_status_then_raw_body() {
        let error = EtherscanError::Api {
            status: 404,
            body: "404 Not Found Message".to_owned(),
        };

        assert_eq!(error.to_string(), "404 404 Not Found Message");
    }

    #[test]
    fn api_error_classification() {
        let api = EtherscanError::Api {
            status: 503,
            body: String::new(),
        };
        let config = EtherscanError::config("missing key");

        assert!(api.is_api_error());
        assert_eq!(api.status(), Some(503));
        assert!(!config.is_api_error());
        assert_eq!(config.status(), None);
    }

    #[test]
    fn config_error_renders_its_message() {
        let error = EtherscanError::config("API key cannot be empty");

        assert_eq!(
            error.to_string(),
            "configuration error: API key cannot be empty"
        );
    }

    #[test]
    fn json_errors_convert_via_from() {
        let parse_failure = serde_json::from_str::<serde_json::Value>("not json")
            .expect_err("input is not JSON");
        let error = EtherscanError::from(parse_failure);

        assert!(matches!(error, EtherscanError::Json(_)));
    }
}
