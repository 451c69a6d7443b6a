//! reqwest-backed [`Transport`] talking to a live object API.

use super::{Transport, TransportError, TransportResult};
use crate::config::ClientConfig;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the pre-issued auth token.
const AUTH_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-auth-token");

struct HttpTransportInner {
    http: Client,
    config: ClientConfig,
    auth_token: Option<HeaderValue>,
}

impl std::fmt::Debug for HttpTransportInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransportInner")
            .field("endpoint", &self.config.endpoint.as_str())
            .field("container_path", &self.config.container_path)
            .finish_non_exhaustive()
    }
}

/// Sends object requests over HTTP(S) to the configured endpoint.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    inner: Arc<HttpTransportInner>,
}

impl HttpTransport {
    /// Fails when the configured auth token cannot be sent as a header.
    pub fn new(config: ClientConfig) -> TransportResult<Self> {
        let auth_token = config
            .auth_token
            .as_deref()
            .map(|token| {
                let mut value =
                    HeaderValue::from_str(token).map_err(TransportError::InvalidAuthToken)?;
                value.set_sensitive(true);
                Ok::<_, TransportError>(value)
            })
            .transpose()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        debug!(
            endpoint = %config.endpoint,
            timeout_ms = config.timeout.as_millis() as u64,
            "created http transport"
        );

        Ok(Self {
            inner: Arc::new(HttpTransportInner {
                http,
                config,
                auth_token,
            }),
        })
    }

    /// Absolute URL for a qualified `container/object` path.
    pub fn url_for(&self, path: &str) -> TransportResult<Url> {
        let raw = format!(
            "{}/{}",
            self.inner.config.base_url(),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|source| TransportError::InvalidUrl { url: raw, source })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn issue(
        &self,
        method: Method,
        path: &str,
        mut headers: HeaderMap,
        body: Option<Bytes>,
    ) -> TransportResult<HeaderMap> {
        let url = self.url_for(path)?;

        if let Some(token) = &self.inner.auth_token {
            headers.insert(AUTH_TOKEN_HEADER, token.clone());
        }

        debug!(%method, %url, headers = headers.len(), "issuing object request");

        let mut request = self
            .inner
            .http
            .request(method.clone(), url)
            .headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%method, path, %status, "object request rejected");
            return Err(TransportError::Status {
                method,
                path: path.to_string(),
                status,
            });
        }

        debug!(%method, path, %status, "object request completed");
        Ok(response.headers().clone())
    }
}
