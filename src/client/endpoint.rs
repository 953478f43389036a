//! Shared endpoint contract: URL composition, response validation, decoding.

use super::core::OpenAiClient;
use crate::error_code::ApiErrorKind;
use crate::transport::RawResponse;
use crate::{Error, ErrorContext, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// One resource group of the API (`models`, `edits`, `threads`, ...).
pub trait ApiEndpoint {
    /// Root path segment of the resource.
    fn root(&self) -> &'static str;

    fn client(&self) -> &OpenAiClient;

    /// `{base}/{root}` or `{base}/{root}/{sub_path}`.
    fn url(&self, sub_path: &str) -> String {
        let sub_path = sub_path.trim_start_matches('/');
        if sub_path.is_empty() {
            self.client().url(self.root())
        } else {
            self.client().url(&format!("{}/{}", self.root(), sub_path))
        }
    }

    /// Like [`url`](Self::url), but each segment is percent-encoded as a single path segment.
    fn url_for(&self, segments: &[&str]) -> Result<String> {
        let root = self.url("");
        let mut url = Url::parse(&root).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid endpoint URL '{}': {}", root, e),
                ErrorContext::new().with_source(self.root()),
            )
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration_with_context(
                    format!("Endpoint URL '{}' cannot carry a path", root),
                    ErrorContext::new().with_source(self.root()),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    code: Option<String>,
    #[serde(default)]
    param: Option<String>,
}

// `code` is a string on most errors but an integer on a few legacy ones.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    })
}

/// Reject non-2xx responses and 2xx bodies that carry an `error` envelope.
pub(crate) fn validate_response(response: &RawResponse) -> Result<()> {
    let envelope = parse_envelope(&response.body);
    if response.is_success() && envelope.is_none() {
        return Ok(());
    }

    let body = envelope.unwrap_or_default();
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            if response.body.trim().is_empty() {
                format!("HTTP {} with empty body", response.status)
            } else {
                response.body.clone()
            }
        });
    let kind = ApiErrorKind::classify(
        response.status,
        body.code.as_deref(),
        body.error_type.as_deref(),
    );

    Err(Error::Remote {
        status: response.status,
        kind,
        message,
        error_type: body.error_type,
        code: body.code,
        param: body.param,
        request_id: response.request_id.clone(),
    })
}

fn parse_envelope(body: &str) -> Option<ErrorBody> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if !value.get("error").map_or(false, |e| e.is_object()) {
        return None;
    }
    serde_json::from_value::<ErrorEnvelope>(value)
        .ok()
        .map(|envelope| envelope.error)
}

/// Decode a validated body, keeping the raw text on failure.
pub(crate) fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    serde_json::from_str(&response.body).map_err(|e| {
        Error::malformed(
            format!("failed to decode response body: {}", e),
            response.body.clone(),
        )
    })
}

/// Path identifiers must be non-blank before any request is made.
pub(crate) fn require_id<'a>(value: &'a str, field: &str, source: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation_with_context(
            format!("Missing {}", field),
            ErrorContext::new().with_field_path(field).with_source(source),
        ));
    }
    Ok(trimmed)
}
