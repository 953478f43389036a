//! Thread message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A client-authored thread message.
///
/// The service allows at most 10 file ids and 16 metadata pairs, with keys up
/// to 64 and values up to 512 characters. These limits are enforced remotely,
/// not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    role: Role,
    /// Always serialized, as `null` when absent.
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<BTreeMap<String, String>>,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
            file_ids: None,
            metadata: None,
        }
    }

    /// Attach file ids for tools such as retrieval or code interpreter.
    ///
    /// The ids are copied in iteration order; the source is not retained.
    pub fn with_file_ids<I, S>(mut self, file_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_ids = Some(file_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_metadata<I, K, V>(mut self, metadata: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(
            metadata
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Always [`Role::User`].
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn file_ids(&self) -> Option<&[String]> {
        self.file_ids.as_deref()
    }

    pub fn metadata(&self) -> Option<&BTreeMap<String, String>> {
        self.metadata.as_ref()
    }
}

impl From<&str> for Message {
    fn from(content: &str) -> Self {
        Message::new(content)
    }
}

impl From<String> for Message {
    fn from(content: String) -> Self {
        Message::new(content)
    }
}

/// `None` produces a message whose `content` is sent as `null`.
impl From<Option<String>> for Message {
    fn from(content: Option<String>) -> Self {
        Self {
            role: Role::User,
            content,
            file_ids: None,
            metadata: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub value: String,
    #[serde(default)]
    pub annotations: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    pub file_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: TextContent },
    ImageFile { image_file: ImageFile },
}

/// A message as stored by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created_at: i64,
    pub thread_id: String,
    pub role: Role,
    #[serde(default)]
    pub content: Vec<MessageContent>,
    #[serde(default)]
    pub assistant_id: Option<String>,
    #[serde(default)]
    pub run_id: Option<String>,
    #[serde(default)]
    pub file_ids: Vec<String>,
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl MessageResponse {
    /// Text parts joined by newlines; image parts are skipped.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|c| match c {
                MessageContent::Text { text } => Some(text.value.as_str()),
                MessageContent::ImageFile { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.created_at, 0)
    }
}

/// One page of `GET /threads/{thread_id}/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub object: String,
    pub data: Vec<MessageResponse>,
    #[serde(default)]
    pub first_id: Option<String>,
    #[serde(default)]
    pub last_id: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}
