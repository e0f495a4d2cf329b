use std::fmt::{self, Display};

use serde::Deserialize;

use crate::{client::Response, context::ContextError};

/// A required argument was missing or malformed. Raised before any request is
/// sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name} is invalid because {reason}")]
pub struct ArgError {
    name: String,
    reason: String,
}

impl ArgError {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> ArgError {
        ArgError {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// The name of the offending argument.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The error payload returned by the API for non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(rename = "errorCode", default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub parameters: Option<Vec<serde_json::Value>>,
}

/// An API call completed with a status outside 200-299.
///
/// Carries the response so headers stay inspectable, along with the diagnostic
/// fields the server returned.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    response: Response,
    reason: String,
    detail: String,
    error_code: Option<String>,
    parameters: Vec<serde_json::Value>,
}

impl ErrorResponse {
    pub(crate) fn new(response: Response, payload: ErrorPayload) -> ErrorResponse {
        ErrorResponse {
            response,
            reason: payload.reason.unwrap_or_default(),
            detail: payload.detail.unwrap_or_default(),
            error_code: payload.error_code,
            parameters: payload.parameters.unwrap_or_default(),
        }
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    /// The HTTP status of the response.
    pub fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    /// The short reason phrase, or the raw body when it was not a JSON error
    /// payload.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// The symbolic error code, e.g. `CLUSTER_NOT_FOUND`.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn parameters(&self) -> &[serde_json::Value] {
        &self.parameters
    }
}

impl Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.response.request();
        write!(
            f,
            "{} {}: {} (request {:?}) {}",
            request.method,
            request.url,
            self.status(),
            self.reason,
            self.detail
        )
    }
}

impl std::error::Error for ErrorResponse {}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Argument(#[from] ArgError),
    #[error("base URL must have a trailing slash: {0}")]
    BaseUrlTrailingSlash(String),
    #[error("invalid user agent: {0}")]
    InvalidUserAgent(#[from] reqwest::header::InvalidHeaderValue),
    #[error("failed to parse URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to encode query options: {0}")]
    EncodeOptions(#[from] serde_urlencoded::ser::Error),
    #[error("failed to encode request body: {0}")]
    EncodeBody(#[source] serde_json::Error),
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Response(Box<ErrorResponse>),
    #[error("failed to decode response body: {source}")]
    Decode {
        source: serde_json::Error,
        response: Box<Response>,
    },
    #[error("failed to copy response body: {source}")]
    Copy {
        source: std::io::Error,
        response: Box<Response>,
    },
}

impl Error {
    /// The response associated with this error, if the request got that far.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Response(error) => Some(error.response()),
            Error::Decode { response, .. } | Error::Copy { response, .. } => Some(&**response),
            _ => None,
        }
    }

    /// Returns the structured API error, if this is one.
    pub fn as_error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::Response(error) => Some(&**error),
            _ => None,
        }
    }

    /// Returns true if the API rejected the request with the symbolic `code`.
    pub fn is_error_code(&self, code: &str) -> bool {
        self.as_error_response()
            .and_then(ErrorResponse::error_code)
            .is_some_and(|error_code| error_code == code)
    }
}

impl From<ErrorResponse> for Error {
    fn from(error: ErrorResponse) -> Self {
        Error::Response(Box::new(error))
    }
}
