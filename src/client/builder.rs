use super::auth::Authentication;
use super::core::OpenAiClient;
use super::settings::ClientSettings;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;

/// Builder for [`OpenAiClient`].
///
/// Anything not set explicitly falls back to the environment:
/// credentials via [`Authentication::from_env`], the base URL via
/// [`ClientSettings::from_env`], and the timeout via `OPENAI_HTTP_TIMEOUT_SECS`.
#[derive(Debug, Default)]
pub struct OpenAiClientBuilder {
    authentication: Option<Authentication>,
    settings: Option<ClientSettings>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl OpenAiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    pub fn settings(mut self, settings: ClientSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Override the base URL (takes precedence over `settings`).
    /// Primarily for proxies and mock servers.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<OpenAiClient> {
        let authentication = match self.authentication {
            Some(auth) => auth,
            None => Authentication::from_env()?,
        };
        let settings = match (self.base_url, self.settings) {
            (Some(url), _) => ClientSettings::from_base_url(&url)?,
            (None, Some(settings)) => settings,
            (None, None) => ClientSettings::from_env()?,
        };
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("openai-rest/{}", env!("CARGO_PKG_VERSION")));
        let default_headers = default_headers(&authentication, &user_agent)?;
        let transport = HttpTransport::new(self.timeout)?;

        Ok(OpenAiClient::from_parts(
            settings,
            authentication,
            default_headers,
            transport,
        ))
    }
}

fn default_headers(auth: &Authentication, user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        header_value(&format!("Bearer {}", auth.api_key()), "authentication.api_key")?,
    );
    if let Some(org) = auth.organization() {
        headers.insert(
            HeaderName::from_static("openai-organization"),
            header_value(org, "authentication.organization")?,
        );
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, header_value(user_agent, "user_agent")?);
    Ok(headers)
}

fn header_value(value: &str, field: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value).map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid header value: {}", e),
            ErrorContext::new().with_field_path(field),
        )
    })?;
    if field.starts_with("authentication") {
        value.set_sensitive(true);
    }
    Ok(value)
}
