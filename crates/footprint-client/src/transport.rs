//! Timeout-bound HTTP transport.

use crate::config::{ProbeConfig, DEFAULT_REQUEST_TIMEOUT};
use crate::error::{TransportError, TransportResult};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Status-only view of an HTTP response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP status code
    pub status: u16,
}

impl ProbeResponse {
    /// Returns true for exactly 200 OK
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Something that can issue a GET and report the status
///
/// Implementations must not retry and must release the connection before
/// returning.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request
    async fn get(&self, url: &str) -> TransportResult<ProbeResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &str) -> TransportResult<ProbeResponse> {
        (**self).get(url).await
    }
}

/// reqwest-backed [`Transport`]
#[derive(Clone)]
pub struct HttpTransport {
    inner: Arc<TransportInner>,
}

struct TransportInner {
    http: HttpClient,
    user_agent: String,
}

impl HttpTransport {
    /// Create a transport with default settings
    pub fn new() -> TransportResult<Self> {
        HttpTransportBuilder::new().build()
    }

    /// Create a transport whose timeout follows a probe configuration
    pub fn from_config(config: &ProbeConfig) -> TransportResult<Self> {
        HttpTransportBuilder::new()
            .timeout(config.request_timeout)
            .build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    /// User-Agent sent with every request
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> TransportResult<ProbeResponse> {
        let url = Url::parse(url).map_err(|e| TransportError::InvalidUrl(format!("{url}: {e}")))?;
        debug!(url = %url, "GET request");

        let response = self.inner.http.get(url).send().await?;
        let status = response.status().as_u16();

        // Body is never read; dropping the response releases the connection
        drop(response);

        debug!(status, "GET response");
        Ok(ProbeResponse { status })
    }
}

/// Builder for configuring an [`HttpTransport`]
pub struct HttpTransportBuilder {
    timeout: Duration,
    user_agent: String,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransportBuilder {
    /// Create a builder with the default timeout and User-Agent
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("footprint/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the transport
    pub fn build(self) -> TransportResult<HttpTransport> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(HttpTransport {
            inner: Arc::new(TransportInner {
                http,
                user_agent: self.user_agent,
            }),
        })
    }
}
