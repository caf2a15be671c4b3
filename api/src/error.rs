use std::io;

use thiserror::Error;
use url::Url;

use crate::route::PageIdentity;

/// The only failure the remote data client reports. The cause is kept as the
/// transport produced it; callers decide how to present it.
#[derive(Debug, Error)]
#[error("request to {url} failed: {cause}")]
pub struct RequestFailed {
    pub url: Url,
    #[source]
    pub cause: TransportError,
}

impl RequestFailed {
    pub fn new(url: Url, cause: TransportError) -> Self {
        Self { url, cause }
    }

    /// HTTP status of the response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match &self.cause {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username must not be empty")]
    Empty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("base url {0} cannot carry a path")]
    CannotBeABase(String),

    #[error("http client could not be built: {0}")]
    Client(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route table has no fallback entry")]
    NoFallback,

    #[error("route table has {0} fallback entries, expected exactly one")]
    MultipleFallbacks(usize),

    #[error("pattern {pattern} is registered for both {first:?} and {second:?}")]
    DuplicatePattern {
        pattern: String,
        first: PageIdentity,
        second: PageIdentity,
    },
}
