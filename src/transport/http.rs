use super::TransportError;
use crate::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::{Method, Proxy};
use std::env;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Raw result of one HTTP exchange, before any status validation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub request_id: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build the underlying client.
    ///
    /// `timeout` overrides `OPENAI_HTTP_TIMEOUT_SECS` (default 60s).
    /// `OPENAI_PROXY_URL` routes all traffic through a proxy when set.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let timeout = timeout.unwrap_or_else(|| {
            Duration::from_secs(
                env::var("OPENAI_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            )
        });

        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Ok(proxy_url) = env::var("OPENAI_PROXY_URL") {
            let proxy = Proxy::all(&proxy_url).map_err(|e| {
                Error::configuration(format!("Invalid OPENAI_PROXY_URL '{}': {}", proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client })
    }

    /// Perform one request/response round trip.
    ///
    /// Non-2xx responses are returned as-is; status validation is the caller's job.
    /// If `cancel` fires before the body has been read, the in-flight request is
    /// dropped and `Error::Cancelled` is returned.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &HeaderMap,
        body: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<RawResponse> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let mut request = self.client.request(method.clone(), url).headers(headers.clone());
        if let Some(body) = body {
            request = request.body(body);
        }

        let exchange = async {
            let response = request.send().await.map_err(TransportError::Http)?;
            let status = response.status().as_u16();
            let request_id = response
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string());
            let body = response.text().await.map_err(TransportError::Http)?;
            Ok::<_, Error>(RawResponse {
                status,
                request_id,
                body,
            })
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(method = %method, url, "request cancelled before completion");
                Err(Error::Cancelled)
            }
            result = exchange => result,
        }
    }
}
