use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    prompt::{
        entities::prompt::Prompt,
        value_objects::{CreatePromptInput, DeletePromptInput, PromptDraft, UpdatePromptInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PromptService: Send + Sync {
    /// Every prompt, newest first, with normalized categories.
    fn get_prompts(&self) -> impl Future<Output = Result<Vec<Prompt>, CoreError>> + Send;

    /// Distinct normalized categories in ascending order.
    fn get_categories(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn create_prompt(
        &self,
        input: CreatePromptInput,
    ) -> impl Future<Output = Result<Prompt, CoreError>> + Send;

    /// Replaces the editable fields. An id matching no row is a no-op.
    fn update_prompt(
        &self,
        input: UpdatePromptInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_prompt(
        &self,
        input: DeletePromptInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PromptRepository: Send + Sync {
    fn fetch_prompts(&self) -> impl Future<Output = Result<Vec<Prompt>, CoreError>> + Send;

    /// Raw category column of every row, duplicates included.
    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    /// Inserts a row; the datastore assigns `id` and `created_at`.
    fn create_prompt(
        &self,
        draft: PromptDraft,
    ) -> impl Future<Output = Result<Prompt, CoreError>> + Send;

    /// Filtered update by id. Returns the number of rows changed.
    fn update_prompt(
        &self,
        prompt_id: Uuid,
        draft: PromptDraft,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Removes the row if present. Missing rows are not an error.
    fn delete_prompt(
        &self,
        prompt_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
