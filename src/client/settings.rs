use crate::{Error, ErrorContext, Result};
use url::Url;

pub const DEFAULT_DOMAIN: &str = "api.openai.com";
pub const DEFAULT_API_VERSION: &str = "v1";

/// Where requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    base_url: String,
}

impl ClientSettings {
    /// Build from a domain and an API version.
    ///
    /// `domain` may be a bare host (`api.openai.com`, `localhost:8080`) or a full
    /// `http(s)://` URL; the version is appended as the last path segment.
    pub fn new(domain: &str, api_version: &str) -> Result<Self> {
        let domain = domain.trim().trim_end_matches('/');
        if domain.is_empty() {
            return Err(Error::configuration_with_context(
                "Domain must not be empty",
                ErrorContext::new().with_field_path("settings.domain"),
            ));
        }
        let base = if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        };
        let version = api_version.trim().trim_matches('/');
        if version.is_empty() {
            Self::from_base_url(&base)
        } else {
            Self::from_base_url(&format!("{}/{}", base, version))
        }
    }

    /// Use `url` verbatim as the request root (e.g. a proxy or a mock server).
    pub fn from_base_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL '{}': {}", url, e),
                ErrorContext::new().with_field_path("settings.base_url"),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("Unsupported URL scheme '{}'", parsed.scheme()),
                ErrorContext::new().with_field_path("settings.base_url"),
            ));
        }
        Ok(Self {
            base_url: url.trim_end_matches('/').to_string(),
        })
    }

    /// `OPENAI_BASE_URL` when set, otherwise the public API.
    pub fn from_env() -> Result<Self> {
        match std::env::var("OPENAI_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::from_base_url(url.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a resource path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: format!("https://{}/{}", DEFAULT_DOMAIN, DEFAULT_API_VERSION),
        }
    }
}
