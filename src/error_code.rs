//! Classification of service errors.
//!
//! The service reports failures as an HTTP status plus an error envelope:
//!
//! ```json
//! { "error": { "message": "...", "type": "invalid_request_error", "param": null, "code": "invalid_api_key" } }
//! ```
//!
//! [`ApiErrorKind`] folds the status and the envelope's `code`/`type` into a
//! small stable set of kinds. It is informational; nothing in this crate
//! retries on it.
//!
//! ```rust
//! use openai_rest::error_code::ApiErrorKind;
//!
//! let kind = ApiErrorKind::classify(429, Some("insufficient_quota"), None);
//! assert_eq!(kind, ApiErrorKind::QuotaExhausted);
//! assert_eq!(kind.category(), "rate");
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Malformed request, invalid parameters, or missing required fields
    InvalidRequest,
    /// Invalid, expired, or missing API key
    Authentication,
    /// Valid credentials but insufficient permissions
    PermissionDenied,
    /// Requested model, thread, or message does not exist
    NotFound,
    /// Input exceeds context window or payload size limit
    RequestTooLarge,
    RateLimited,
    /// Account usage quota or billing limit reached
    QuotaExhausted,
    ServerError,
    /// Service temporarily overloaded
    Overloaded,
    Timeout,
    Conflict,
    Unknown,
}

impl ApiErrorKind {
    /// Returns the stable name (e.g., `"invalid_request"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::RequestTooLarge => "request_too_large",
            Self::RateLimited => "rate_limited",
            Self::QuotaExhausted => "quota_exhausted",
            Self::ServerError => "server_error",
            Self::Overloaded => "overloaded",
            Self::Timeout => "timeout",
            Self::Conflict => "conflict",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the category: `"client"`, `"rate"`, `"server"`, `"operational"`, or `"unknown"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRequest
            | Self::Authentication
            | Self::PermissionDenied
            | Self::NotFound
            | Self::RequestTooLarge => "client",
            Self::RateLimited | Self::QuotaExhausted => "rate",
            Self::ServerError | Self::Overloaded | Self::Timeout => "server",
            Self::Conflict => "operational",
            Self::Unknown => "unknown",
        }
    }

    /// Maps an envelope `code` or `type` string to a kind.
    pub fn from_provider_code(provider_code: &str) -> Option<Self> {
        let kind = match provider_code {
            "invalid_request_error" => Self::InvalidRequest,
            "invalid_api_key" | "authentication_error" | "invalid_organization" => {
                Self::Authentication
            }
            "permission_error" | "unsupported_country_region_territory" => Self::PermissionDenied,
            "model_not_found" | "not_found_error" => Self::NotFound,
            "context_length_exceeded" | "string_above_max_length" => Self::RequestTooLarge,
            "rate_limit_exceeded" | "requests" | "tokens" => Self::RateLimited,
            "insufficient_quota" | "billing_hard_limit_reached" => Self::QuotaExhausted,
            "server_error" => Self::ServerError,
            "engine_overloaded" | "overloaded_error" => Self::Overloaded,
            _ => return None,
        };
        Some(kind)
    }

    /// Maps an HTTP status code to the most likely kind.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            408 => Self::Timeout,
            409 => Self::Conflict,
            413 => Self::RequestTooLarge,
            429 => Self::RateLimited,
            500 | 502 => Self::ServerError,
            503 => Self::Overloaded,
            504 => Self::Timeout,
            _ => Self::Unknown,
        }
    }

    /// `code` wins over `type`, which wins over the status.
    ///
    /// `invalid_request_error` is the catch-all `type` for most 4xx errors, so
    /// it only applies when the status has no more specific mapping.
    pub fn classify(status: u16, code: Option<&str>, error_type: Option<&str>) -> Self {
        if let Some(kind) = code.and_then(Self::from_provider_code) {
            return kind;
        }
        let by_status = Self::from_http_status(status);
        match error_type.and_then(Self::from_provider_code) {
            Some(Self::InvalidRequest) if by_status != Self::Unknown => by_status,
            Some(kind) => kind,
            None => by_status,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
