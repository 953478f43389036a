//! Models endpoint.

use super::types::Model;
use crate::client::core::ApiCall;
use crate::client::endpoint::{decode, require_id};
use crate::client::{ApiEndpoint, OpenAiClient};
use crate::Result;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// `GET /models` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelList {
    #[serde(default = "default_list_type")]
    pub object: String,
    pub data: Vec<Model>,
}

fn default_list_type() -> String {
    "list".to_string()
}

/// `DELETE /models/{id}` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteModelResponse {
    pub id: String,
    #[serde(default)]
    pub object: Option<String>,
    pub deleted: bool,
}

/// Lists and describes the models available to the account.
pub struct ModelsEndpoint<'a> {
    client: &'a OpenAiClient,
}

impl ApiEndpoint for ModelsEndpoint<'_> {
    fn root(&self) -> &'static str {
        "models"
    }

    fn client(&self) -> &OpenAiClient {
        self.client
    }
}

impl<'a> ModelsEndpoint<'a> {
    pub(crate) fn new(client: &'a OpenAiClient) -> Self {
        Self { client }
    }

    pub async fn list_models(&self) -> Result<Vec<Model>> {
        self.list_models_with_cancel(&CancellationToken::new()).await
    }

    pub async fn list_models_with_cancel(&self, cancel: &CancellationToken) -> Result<Vec<Model>> {
        let call = ApiCall {
            method: Method::GET,
            endpoint: "models.list",
            url: self.url(""),
            body: None,
            extra_headers: None,
        };
        let response = self.client.execute(call, cancel).await?;
        let list: ModelList = decode(&response)?;
        Ok(list.data)
    }

    pub async fn retrieve_model(&self, id: &str) -> Result<Model> {
        self.retrieve_model_with_cancel(id, &CancellationToken::new())
            .await
    }

    pub async fn retrieve_model_with_cancel(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<Model> {
        let id = require_id(id, "model.id", "models")?;
        let call = ApiCall {
            method: Method::GET,
            endpoint: "models.retrieve",
            url: self.url_for(&[id])?,
            body: None,
            extra_headers: None,
        };
        let response = self.client.execute(call, cancel).await?;
        decode(&response)
    }

    /// Delete a fine-tuned model. Ownership is checked by the service.
    pub async fn delete_model(&self, id: &str) -> Result<bool> {
        self.delete_model_with_cancel(id, &CancellationToken::new())
            .await
    }

    pub async fn delete_model_with_cancel(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        let id = require_id(id, "model.id", "models")?;
        let call = ApiCall {
            method: Method::DELETE,
            endpoint: "models.delete",
            url: self.url_for(&[id])?,
            body: None,
            extra_headers: None,
        };
        let response = self.client.execute(call, cancel).await?;
        let deleted: DeleteModelResponse = decode(&response)?;
        Ok(deleted.deleted)
    }
}
