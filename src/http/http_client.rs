use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use tokio::sync::RwLock;

use crate::error::CovalentError;
use crate::request::ResolvedRequest;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Executes resolved requests and tracks the latency of the most recent
/// call.
pub(crate) struct HttpClient {
    client: reqwest::Client,
    last_latency: RwLock<Option<(Duration, Instant)>>,
}

impl HttpClient {
    pub fn new() -> Result<Self, CovalentError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, CovalentError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            last_latency: RwLock::new(None),
        })
    }

    /// Issues the GET and returns the raw response body.
    ///
    /// The body is returned as text without inspection; whether it is JSON
    /// or CSV was decided by the request's `format` flag and is the remote
    /// service's concern.
    pub async fn execute(&self, request: &ResolvedRequest) -> Result<String, CovalentError> {
        let start = Instant::now();

        let resp = self
            .client
            .request(request.method.clone(), request.url.clone())
            .header(CONTENT_TYPE, request.content_type)
            .send()
            .await?;

        let latency = start.elapsed();
        self.update_latency(latency).await;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".into());
            return Err(CovalentError::ServerError { status, body });
        }

        Ok(resp.text().await?)
    }

    async fn update_latency(&self, duration: Duration) {
        *self.last_latency.write().await = Some((duration, Instant::now()));
    }

    pub async fn get_latency(&self) -> Option<Duration> {
        self.last_latency.read().await.map(|(d, _)| d)
    }
}
