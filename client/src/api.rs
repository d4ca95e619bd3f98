use std::future::Future;

use promptvault_core::domain::prompt::entities::prompt::Prompt;
use reqwest::{Client, RequestBuilder};
use serde::{
    Deserialize, Serialize,
    de::{DeserializeOwned, IgnoredAny},
};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::{ApiAction, ClientError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptFields {
    pub title: String,
    pub content: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
struct EnhanceBody<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct EnhancedBody {
    #[serde(rename = "enhancedPrompt")]
    enhanced_prompt: String,
}

/// Remote prompt store as seen by the gallery.
pub trait PromptApi: Send + Sync {
    fn fetch_prompts(&self) -> impl Future<Output = Result<Vec<Prompt>, ClientError>> + Send;

    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<String>, ClientError>> + Send;

    fn add_prompt(
        &self,
        fields: PromptFields,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    fn update_prompt(
        &self,
        prompt_id: Uuid,
        fields: PromptFields,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    fn delete_prompt(&self, prompt_id: Uuid) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Returns the rewritten prompt.
    fn enhance_prompt(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, ClientError>> + Send;
}

/// reqwest implementation of [`PromptApi`].
#[derive(Debug, Clone)]
pub struct PromptVaultClient {
    http: Client,
    base_url: String,
}

impl PromptVaultClient {
    /// `base_url` includes the API prefix, e.g. `http://localhost:3001/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        action: ApiAction,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport { action, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = %status, body = %body, "{}", action.failure_message());
            return Err(ClientError::Rejected {
                action,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Transport { action, source })
    }
}

impl PromptApi for PromptVaultClient {
    #[instrument(skip(self))]
    async fn fetch_prompts(&self) -> Result<Vec<Prompt>, ClientError> {
        self.send(ApiAction::FetchPrompts, self.http.get(self.url("/prompts")))
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_categories(&self) -> Result<Vec<String>, ClientError> {
        self.send(
            ApiAction::FetchCategories,
            self.http.get(self.url("/categories")),
        )
        .await
    }

    #[instrument(skip(self, fields))]
    async fn add_prompt(&self, fields: PromptFields) -> Result<(), ClientError> {
        self.send::<IgnoredAny>(
            ApiAction::AddPrompt,
            self.http.post(self.url("/prompts")).json(&fields),
        )
        .await?;

        Ok(())
    }

    #[instrument(skip(self, fields))]
    async fn update_prompt(&self, prompt_id: Uuid, fields: PromptFields) -> Result<(), ClientError> {
        self.send::<IgnoredAny>(
            ApiAction::UpdatePrompt,
            self.http
                .put(self.url(&format!("/prompts/{prompt_id}")))
                .json(&fields),
        )
        .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_prompt(&self, prompt_id: Uuid) -> Result<(), ClientError> {
        self.send::<IgnoredAny>(
            ApiAction::DeletePrompt,
            self.http.delete(self.url(&format!("/prompts/{prompt_id}"))),
        )
        .await?;

        Ok(())
    }

    #[instrument(skip(self, prompt))]
    async fn enhance_prompt(&self, prompt: String) -> Result<String, ClientError> {
        let body = self
            .send::<EnhancedBody>(
                ApiAction::EnhancePrompt,
                self.http
                    .post(self.url("/enhance-prompt"))
                    .json(&EnhanceBody { prompt: &prompt }),
            )
            .await?;

        Ok(body.enhanced_prompt)
    }
}
