//! Error handling for the TalentBridge profile client

use std::fmt;
use thiserror::Error;

/// Notice text used for transport-level failures, regardless of action.
pub const NETWORK_ERROR_NOTICE: &str = "Network error. Please try again.";

/// Unified error type for the TalentBridge profile client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP transport errors (the request never completed)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The backend rejected the request with a non-success status.
    ///
    /// `message` holds the `message` field of the structured error body
    /// when the backend sent one.
    #[error("request failed with status {status}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Server-provided error message, if any
        message: Option<String>,
    },

    /// Missing or invalid session state (e.g. no bearer token)
    #[error("Session error: {0}")]
    Session(String),

    /// Input rejected before reaching the network layer
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Create a new session error
    pub fn session<T: fmt::Display>(msg: T) -> Self {
        Error::Session(msg.to_string())
    }

    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// User-facing notice text for this error.
    ///
    /// Transport failures always map to a generic network notice. A
    /// server-reported failure surfaces the server's message verbatim when
    /// present; every other case falls back to the per-action `fallback`.
    pub fn notice(&self, fallback: &str) -> String {
        match self {
            Error::Http(_) => NETWORK_ERROR_NOTICE.to_string(),
            Error::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Error::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
