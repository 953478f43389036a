//! Model value and its permission entries.

use crate::{Error, ErrorContext, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable backend model.
///
/// The identifier is always non-blank: every constructor, the string
/// conversions, and deserialization reject empty or whitespace-only ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelRecord")]
pub struct Model {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    object: Option<String>,
    #[serde(rename = "created", skip_serializing_if = "Option::is_none")]
    created_at_unix_time_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    owned_by: Option<String>,
    #[serde(rename = "permission", skip_serializing_if = "Option::is_none")]
    permissions: Option<Vec<Permission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
}

/// Wire shape of a model payload; validated into [`Model`].
#[derive(Deserialize)]
struct ModelRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    object: Option<String>,
    #[serde(default)]
    created: Option<i64>,
    #[serde(default)]
    owned_by: Option<String>,
    #[serde(default)]
    permission: Option<Vec<Permission>>,
    #[serde(default)]
    root: Option<String>,
    #[serde(default)]
    parent: Option<String>,
}

impl TryFrom<ModelRecord> for Model {
    type Error = Error;

    fn try_from(record: ModelRecord) -> Result<Self> {
        Model::from_payload(
            record.id.unwrap_or_default(),
            record.object,
            record.created,
            record.owned_by,
            record.permission,
            record.root,
            record.parent,
        )
    }
}

impl Model {
    pub fn new(id: impl Into<String>, owned_by: Option<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::validation_with_context(
                "Missing the id of the specified model.",
                ErrorContext::new()
                    .with_field_path("model.id")
                    .with_source("models"),
            ));
        }
        Ok(Self {
            id,
            object: None,
            created_at_unix_time_seconds: None,
            owned_by,
            permissions: None,
            root: None,
            parent: None,
        })
    }

    /// Build from the full service payload.
    pub fn from_payload(
        id: impl Into<String>,
        object: Option<String>,
        created_at_unix_time_seconds: Option<i64>,
        owned_by: Option<String>,
        permissions: Option<Vec<Permission>>,
        root: Option<String>,
        parent: Option<String>,
    ) -> Result<Self> {
        let mut model = Self::new(id, owned_by)?;
        model.object = object;
        model.created_at_unix_time_seconds = created_at_unix_time_seconds;
        model.permissions = permissions;
        model.root = root;
        model.parent = parent;
        Ok(model)
    }

    /// String → Model. Same validation as [`Model::new`].
    pub fn from_id(id: &str) -> Result<Self> {
        Self::new(id, None)
    }

    /// Skips validation; only for the compile-time preset ids.
    pub(crate) fn preset(id: &'static str, owned_by: &'static str) -> Self {
        Self {
            id: id.to_string(),
            object: Some("model".to_string()),
            created_at_unix_time_seconds: None,
            owned_by: Some(owned_by.to_string()),
            permissions: None,
            root: None,
            parent: None,
        }
    }

    /// Model → string.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    pub fn owned_by(&self) -> Option<&str> {
        self.owned_by.as_deref()
    }

    pub fn created_at_unix_time_seconds(&self) -> Option<i64> {
        self.created_at_unix_time_seconds
    }

    /// Creation time in UTC, if the payload carried one.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at_unix_time_seconds
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }

    pub fn permissions(&self) -> &[Permission] {
        self.permissions.as_deref().unwrap_or_default()
    }

    /// Root model of a fine-tuned lineage.
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl TryFrom<&str> for Model {
    type Error = Error;

    fn try_from(id: &str) -> Result<Self> {
        Model::from_id(id)
    }
}

impl TryFrom<String> for Model {
    type Error = Error;

    fn try_from(id: String) -> Result<Self> {
        Model::new(id, None)
    }
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.id
    }
}

impl AsRef<str> for Model {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

/// One entry of a model's `permission` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permission {
    pub id: Option<String>,
    pub object: Option<String>,
    pub created: Option<i64>,
    pub allow_create_engine: bool,
    pub allow_sampling: bool,
    pub allow_logprobs: bool,
    pub allow_search_indices: bool,
    pub allow_view: bool,
    pub allow_fine_tuning: bool,
    pub organization: Option<String>,
    pub group: Option<String>,
    pub is_blocking: bool,
}

impl Permission {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }
}
