use hanming_core::error::HanmingError;
use reqwest::StatusCode;

/// Every failure mode the OpenRouter client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenRouterError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t decode body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenRouter returned non-success status {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("OpenRouter format error: {0}")]
    Format(String),

    #[error("OpenRouter is not configured: {0}")]
    NotConfigured(String),
}

impl From<OpenRouterError> for HanmingError {
    fn from(value: OpenRouterError) -> Self {
        match value {
            OpenRouterError::Http(err) => HanmingError::Transport {
                status: err.status().map(|s| s.as_u16()),
                message: err.to_string(),
            },
            OpenRouterError::Api { status, message } => HanmingError::Transport {
                status: Some(status.as_u16()),
                message,
            },
            OpenRouterError::Serde(err) => HanmingError::MalformedResponse(err.to_string()),
            OpenRouterError::Format(message) => HanmingError::MalformedResponse(message),
            OpenRouterError::NotConfigured(message) => HanmingError::Configuration(message),
        }
    }
}
