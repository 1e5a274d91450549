use reqwest::StatusCode;
use thiserror::Error;


/// Every way a call into the API can fail.
///
/// Validation errors ([`MissingParameter`](GeckoError::MissingParameter),
/// [`InvalidParameter`](GeckoError::InvalidParameter)) and context errors
/// ([`MissingContext`](GeckoError::MissingContext)) are raised before a request
/// is built. Nothing is retried.
#[derive(Debug, Error)]
pub enum GeckoError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("Missing decode context: {0}")]
    MissingContext(&'static str),
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },
    #[error("Parse error at `{path}`: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}


impl GeckoError {
    /// True for errors raised by the query encoder before any I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GeckoError::MissingParameter(_) | GeckoError::InvalidParameter { .. }
        )
    }


    /// True when the transport failed (connect, timeout, cancelled body read).
    pub fn is_transport(&self) -> bool {
        matches!(self, GeckoError::RequestError(_))
    }


    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GeckoError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}


impl From<serde_path_to_error::Error<serde_json::Error>> for GeckoError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        GeckoError::ParseError {
            path,
            source: err.into_inner(),
        }
    }
}
