use thiserror::Error;

/// Failure of a single REST call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never completed (DNS, CORS, connection reset...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    /// Authenticated call attempted with no stored token
    #[error("No access token stored")]
    MissingToken,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
