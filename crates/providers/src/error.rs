//! Error types shared by all providers.

use thiserror::Error;

/// Main error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// A required API credential is not configured.
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// The upstream API answered with a non-success status.
    #[error("upstream http {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("http transport error: {0}")]
    Transport(String),

    /// The upstream payload did not have the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Payload(String),

    /// Invalid caller-supplied parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// JSON decoding errors.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(value: reqwest::Error) -> Self {
        // reqwest errors can embed the full request URL; strip it so api keys
        // in query strings never reach logs or client-facing error strings.
        let value = value.without_url();
        let mut err = value.to_string();
        if let Some(source) = std::error::Error::source(&value) {
            err = format!("{err}: {source}");
        }
        Self::Transport(err)
    }
}

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_names_the_variable() {
        let err = ProviderError::MissingCredential("SERPAPI_API_KEY");
        assert_eq!(
            err.to_string(),
            "missing credential: SERPAPI_API_KEY is not set"
        );
    }

    #[test]
    fn upstream_error_carries_status_and_body() {
        let err = ProviderError::Upstream {
            status: 503,
            body: "service unavailable".into(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("service unavailable"));
    }
}
