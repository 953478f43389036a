//! Edits endpoint.
#![allow(deprecated)]

use super::types::{EditRequest, EditResponse};
use crate::client::core::ApiCall;
use crate::client::endpoint::decode;
use crate::client::{ApiEndpoint, OpenAiClient};
use crate::models::Model;
use crate::Result;
use reqwest::Method;
use tokio_util::sync::CancellationToken;

/// Given an input and an instruction, the model returns an edited version of the input.
///
/// The provider has deprecated this resource; it still works but will receive
/// no new features.
#[deprecated(note = "the edits endpoint is deprecated by the provider")]
pub struct EditsEndpoint<'a> {
    client: &'a OpenAiClient,
}

impl ApiEndpoint for EditsEndpoint<'_> {
    fn root(&self) -> &'static str {
        "edits"
    }

    fn client(&self) -> &OpenAiClient {
        self.client
    }
}

impl<'a> EditsEndpoint<'a> {
    pub(crate) fn new(client: &'a OpenAiClient) -> Self {
        Self { client }
    }

    /// Create an edit and return the text of the top choice.
    ///
    /// Parameters are passed through unchecked; the service validates them.
    pub async fn create_edit_text(
        &self,
        input: &str,
        instruction: &str,
        edit_count: Option<u32>,
        temperature: Option<f64>,
        top_p: Option<f64>,
        model: Option<&Model>,
    ) -> Result<String> {
        self.create_edit_text_with_cancel(
            input,
            instruction,
            edit_count,
            temperature,
            top_p,
            model,
            &CancellationToken::new(),
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_edit_text_with_cancel(
        &self,
        input: &str,
        instruction: &str,
        edit_count: Option<u32>,
        temperature: Option<f64>,
        top_p: Option<f64>,
        model: Option<&Model>,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let request =
            EditRequest::from_parts(input, instruction, edit_count, temperature, top_p, model);
        let response = self.create_edit_with_cancel(&request, cancel).await?;
        Ok(response.to_string())
    }

    pub async fn create_edit(&self, request: &EditRequest) -> Result<EditResponse> {
        self.create_edit_with_cancel(request, &CancellationToken::new())
            .await
    }

    /// `POST /edits`.
    pub async fn create_edit_with_cancel(
        &self,
        request: &EditRequest,
        cancel: &CancellationToken,
    ) -> Result<EditResponse> {
        let call = ApiCall {
            method: Method::POST,
            endpoint: "edits.create",
            url: self.url(""),
            body: Some(serde_json::to_string(request)?),
            extra_headers: None,
        };
        let response = self.client.execute(call, cancel).await?;
        decode(&response)
    }
}
