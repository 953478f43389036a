//! Thread messages endpoint.

use super::types::{Message, MessageList, MessageResponse};
use crate::client::core::ApiCall;
use crate::client::endpoint::{decode, require_id};
use crate::client::{ApiEndpoint, OpenAiClient};
use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use tokio_util::sync::CancellationToken;

const BETA_HEADER: &str = "openai-beta";
const BETA_VALUE: &str = "assistants=v1";

/// Messages inside assistant threads.
pub struct ThreadsEndpoint<'a> {
    client: &'a OpenAiClient,
    beta_headers: HeaderMap,
}

impl ApiEndpoint for ThreadsEndpoint<'_> {
    fn root(&self) -> &'static str {
        "threads"
    }

    fn client(&self) -> &OpenAiClient {
        self.client
    }
}

impl<'a> ThreadsEndpoint<'a> {
    pub(crate) fn new(client: &'a OpenAiClient) -> Self {
        let mut beta_headers = HeaderMap::new();
        beta_headers.insert(
            HeaderName::from_static(BETA_HEADER),
            HeaderValue::from_static(BETA_VALUE),
        );
        Self {
            client,
            beta_headers,
        }
    }

    pub async fn create_message(
        &self,
        thread_id: &str,
        message: &Message,
    ) -> Result<MessageResponse> {
        self.create_message_with_cancel(thread_id, message, &CancellationToken::new())
            .await
    }

    /// `POST /threads/{thread_id}/messages`.
    pub async fn create_message_with_cancel(
        &self,
        thread_id: &str,
        message: &Message,
        cancel: &CancellationToken,
    ) -> Result<MessageResponse> {
        let thread_id = require_id(thread_id, "thread_id", "threads")?;
        let call = ApiCall {
            method: Method::POST,
            endpoint: "threads.messages.create",
            url: self.url_for(&[thread_id, "messages"])?,
            body: Some(serde_json::to_string(message)?),
            extra_headers: Some(&self.beta_headers),
        };
        let response = self.client.execute(call, cancel).await?;
        decode(&response)
    }

    pub async fn retrieve_message(
        &self,
        thread_id: &str,
        message_id: &str,
    ) -> Result<MessageResponse> {
        self.retrieve_message_with_cancel(thread_id, message_id, &CancellationToken::new())
            .await
    }

    pub async fn retrieve_message_with_cancel(
        &self,
        thread_id: &str,
        message_id: &str,
        cancel: &CancellationToken,
    ) -> Result<MessageResponse> {
        let thread_id = require_id(thread_id, "thread_id", "threads")?;
        let message_id = require_id(message_id, "message_id", "threads")?;
        let call = ApiCall {
            method: Method::GET,
            endpoint: "threads.messages.retrieve",
            url: self.url_for(&[thread_id, "messages", message_id])?,
            body: None,
            extra_headers: Some(&self.beta_headers),
        };
        let response = self.client.execute(call, cancel).await?;
        decode(&response)
    }

    pub async fn list_messages(&self, thread_id: &str) -> Result<MessageList> {
        self.list_messages_with_cancel(thread_id, &CancellationToken::new())
            .await
    }

    /// First page only, in the service's default order.
    pub async fn list_messages_with_cancel(
        &self,
        thread_id: &str,
        cancel: &CancellationToken,
    ) -> Result<MessageList> {
        let thread_id = require_id(thread_id, "thread_id", "threads")?;
        let call = ApiCall {
            method: Method::GET,
            endpoint: "threads.messages.list",
            url: self.url_for(&[thread_id, "messages"])?,
            body: None,
            extra_headers: Some(&self.beta_headers),
        };
        let response = self.client.execute(call, cancel).await?;
        decode(&response)
    }
}
