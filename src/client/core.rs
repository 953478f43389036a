use super::auth::Authentication;
use super::builder::OpenAiClientBuilder;
use super::endpoint::validate_response;
use super::settings::ClientSettings;
#[allow(deprecated)]
use crate::edits::EditsEndpoint;
use crate::models::ModelsEndpoint;
use crate::threads::ThreadsEndpoint;
use crate::transport::{HttpTransport, RawResponse};
use crate::Result;
use reqwest::header::HeaderMap;
use reqwest::Method;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Entry point for all API calls.
///
/// Cloning is cheap; clones share the same connection pool and configuration,
/// so one client can serve many concurrent tasks.
#[derive(Clone)]
pub struct OpenAiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    settings: ClientSettings,
    authentication: Authentication,
    default_headers: HeaderMap,
    transport: HttpTransport,
}

/// One outgoing call, as assembled by an endpoint.
pub(crate) struct ApiCall<'a> {
    pub method: Method,
    pub endpoint: &'static str,
    pub url: String,
    pub body: Option<String>,
    pub extra_headers: Option<&'a HeaderMap>,
}

impl OpenAiClient {
    pub fn builder() -> OpenAiClientBuilder {
        OpenAiClientBuilder::new()
    }

    /// Build a client purely from environment configuration.
    pub fn from_env() -> Result<Self> {
        OpenAiClientBuilder::new().build()
    }

    pub(crate) fn from_parts(
        settings: ClientSettings,
        authentication: Authentication,
        default_headers: HeaderMap,
        transport: HttpTransport,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                settings,
                authentication,
                default_headers,
                transport,
            }),
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.inner.settings
    }

    pub fn authentication(&self) -> &Authentication {
        &self.inner.authentication
    }

    /// Headers attached to every request (authorization, organization, content type).
    pub fn default_headers(&self) -> &HeaderMap {
        &self.inner.default_headers
    }

    /// Resolve a resource path against the configured base URL.
    pub fn url(&self, path: &str) -> String {
        self.inner.settings.url(path)
    }

    pub fn models(&self) -> ModelsEndpoint<'_> {
        ModelsEndpoint::new(self)
    }

    /// The edits resource. Deprecated by the provider.
    #[deprecated(note = "the edits endpoint is deprecated by the provider")]
    #[allow(deprecated)]
    pub fn edits(&self) -> EditsEndpoint<'_> {
        EditsEndpoint::new(self)
    }

    pub fn threads(&self) -> ThreadsEndpoint<'_> {
        ThreadsEndpoint::new(self)
    }

    /// Send one call and validate its status and error envelope.
    pub(crate) async fn execute(
        &self,
        call: ApiCall<'_>,
        cancel: &CancellationToken,
    ) -> Result<RawResponse> {
        let start = Instant::now();
        let headers = match call.extra_headers {
            Some(extra) => {
                let mut merged = self.inner.default_headers.clone();
                for (name, value) in extra {
                    merged.insert(name.clone(), value.clone());
                }
                merged
            }
            None => self.inner.default_headers.clone(),
        };

        debug!(
            method = %call.method,
            url = call.url.as_str(),
            endpoint = call.endpoint,
            "openai-rest sending request"
        );

        let response = self
            .inner
            .transport
            .send(call.method, &call.url, &headers, call.body, cancel)
            .await?;

        if let Err(err) = validate_response(&response) {
            info!(
                http_status = response.status,
                error = %err,
                endpoint = call.endpoint,
                request_id = response.request_id.as_deref().unwrap_or(""),
                duration_ms = start.elapsed().as_millis() as u64,
                "openai-rest request failed"
            );
            return Err(err);
        }

        debug!(
            http_status = response.status,
            endpoint = call.endpoint,
            duration_ms = start.elapsed().as_millis() as u64,
            "openai-rest request completed"
        );
        Ok(response)
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("settings", &self.inner.settings)
            .field("authentication", &self.inner.authentication)
            .finish()
    }
}
