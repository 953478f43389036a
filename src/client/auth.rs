use crate::{Error, ErrorContext, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

const ORGANIZATION_PREFIX: &str = "org-";
const API_KEY_VARS: [&str; 3] = ["OPENAI_API_KEY", "OPENAI_KEY", "OPENAI_SECRET_KEY"];
const ORGANIZATION_VARS: [&str; 2] = ["OPENAI_ORGANIZATION_ID", "OPENAI_ORGANIZATION"];

/// API credentials sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Authentication {
    api_key: String,
    organization: Option<String>,
}

#[derive(Deserialize)]
struct AuthFile {
    #[serde(rename = "apiKey", alias = "api_key")]
    api_key: Option<String>,
    #[serde(alias = "organization_id", alias = "organizationId")]
    organization: Option<String>,
}

impl Authentication {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(Error::configuration_with_context(
                "API key must not be empty",
                ErrorContext::new().with_field_path("authentication.api_key"),
            ));
        }
        Ok(Self {
            api_key,
            organization: None,
        })
    }

    /// Attach an organization id. It must start with `org-`.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Result<Self> {
        let organization = organization.into().trim().to_string();
        if !organization.starts_with(ORGANIZATION_PREFIX) {
            return Err(Error::configuration_with_context(
                format!("Organization id must start with '{}'", ORGANIZATION_PREFIX),
                ErrorContext::new()
                    .with_field_path("authentication.organization")
                    .with_details(organization),
            ));
        }
        self.organization = Some(organization);
        Ok(self)
    }

    /// Read `OPENAI_API_KEY` (or `OPENAI_KEY` / `OPENAI_SECRET_KEY`) and
    /// optionally `OPENAI_ORGANIZATION_ID` (or `OPENAI_ORGANIZATION`).
    pub fn from_env() -> Result<Self> {
        let api_key = first_env(&API_KEY_VARS).ok_or_else(|| {
            Error::configuration_with_context(
                "API key required",
                ErrorContext::new()
                    .with_details(format!("set one of {}", API_KEY_VARS.join(", ")))
                    .with_source("authentication"),
            )
        })?;
        let auth = Self::new(api_key)?;
        match first_env(&ORGANIZATION_VARS) {
            Some(org) => auth.with_organization(org),
            None => Ok(auth),
        }
    }

    /// Load credentials from a JSON file such as `~/.openai`:
    ///
    /// ```json
    /// { "apiKey": "sk-...", "organization": "org-..." }
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let file: AuthFile = serde_json::from_str(&raw).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid auth file: {}", e),
                ErrorContext::new().with_source(path.display().to_string()),
            )
        })?;
        let auth = Self::new(file.api_key.unwrap_or_default())?;
        match file.organization.filter(|o| !o.trim().is_empty()) {
            Some(org) => auth.with_organization(org),
            None => Ok(auth),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authentication")
            .field("api_key", &"<redacted>")
            .field("organization", &self.organization)
            .finish()
    }
}

fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|v| !v.trim().is_empty())
}
