//! Unified error type exposed by **`hanming-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the [`HanmingClient`](crate::HanmingClient).
//! The variants mirror the failure kinds a caller has to tell apart when
//! deciding what to show the user: a bad input, a missing credential, a
//! broken transport, or a model answer that could not be used.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, HanmingError>;

#[derive(Debug, Error)]
pub enum HanmingError {
    /// The caller submitted input that cannot be sent, e.g. an empty name.
    /// No network call is attempted.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The backend lacks a usable credential (missing or placeholder API key).
    /// Requests fail before touching the network.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Non-success HTTP status, connection failure or timeout.
    #[error("transport failed{}: {message}", status_suffix(.status))]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The completion text held no usable JSON object.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The JSON object parsed but a mandatory field was missing or blank.
    #[error("incomplete result: missing `{0}`")]
    IncompleteResult(&'static str),

    /// The selected backend does not recognise the requested model.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported {
        provider: &'static str,
        model: String,
    },
}

impl HanmingError {
    /// HTTP status attached to a [`HanmingError::Transport`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            HanmingError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" with status {s}")).unwrap_or_default()
}
