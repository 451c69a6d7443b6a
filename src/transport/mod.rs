//! The network collaborator behind every object operation.
//!
//! Operations never talk HTTP directly: they hand a method, a qualified
//! `container/object` path, request headers and an optional body to a
//! [`Transport`], and get the response headers back. The transport owns
//! endpoint resolution, authentication headers and any retry policy, and it
//! reports non-2xx responses as errors.

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::sync::Arc;
use thiserror::Error;

pub mod http_transport;

pub use http_transport::HttpTransport;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{method} `{path}` failed with status {status}")]
    Status {
        method: Method,
        path: String,
        status: StatusCode,
    },
    #[error("invalid request url `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("configured auth token is not a valid header value")]
    InvalidAuthToken(#[source] http::header::InvalidHeaderValue),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl TransportError {
    /// HTTP status of a rejected request, if the service answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(err) => err.status(),
            Self::InvalidUrl { .. } | Self::InvalidAuthToken(_) => None,
        }
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Issues a single request and returns the response headers.
///
/// Implementations must be safe to share between concurrent callers.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn issue(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> TransportResult<HeaderMap>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn issue(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> TransportResult<HeaderMap> {
        (**self).issue(method, path, headers, body).await
    }
}

