use tracing::{debug, instrument};

use crate::domain::{
    category::distinct_categories,
    common::{entities::app_errors::CoreError, services::Service},
    enhancement::ports::LLMClient,
    health::ports::HealthCheckRepository,
    prompt::{
        entities::prompt::{Prompt, sort_newest_first},
        ports::{PromptRepository, PromptService},
        value_objects::{CreatePromptInput, DeletePromptInput, PromptDraft, UpdatePromptInput},
    },
};

impl<PR, LLM, HC> PromptService for Service<PR, LLM, HC>
where
    PR: PromptRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_prompts(&self) -> Result<Vec<Prompt>, CoreError> {
        let mut prompts = self
            .prompt_repository
            .fetch_prompts()
            .await?
            .into_iter()
            .map(Prompt::with_normalized_category)
            .collect::<Vec<Prompt>>();

        sort_newest_first(&mut prompts);

        debug!(count = prompts.len(), "fetched prompts");
        Ok(prompts)
    }

    #[instrument(skip(self))]
    async fn get_categories(&self) -> Result<Vec<String>, CoreError> {
        let categories = self.prompt_repository.fetch_categories().await?;

        Ok(distinct_categories(categories))
    }

    #[instrument(skip(self, input))]
    async fn create_prompt(&self, input: CreatePromptInput) -> Result<Prompt, CoreError> {
        let draft = PromptDraft::try_from(input)?;

        let created_prompt = self.prompt_repository.create_prompt(draft).await?;

        debug!(prompt_id = %created_prompt.id, "prompt created");
        Ok(created_prompt)
    }

    #[instrument(skip(self, input), fields(prompt_id = %input.prompt_id))]
    async fn update_prompt(&self, input: UpdatePromptInput) -> Result<(), CoreError> {
        let draft = PromptDraft::new(input.title, input.content, input.category)?;

        let updated = self
            .prompt_repository
            .update_prompt(input.prompt_id, draft)
            .await?;

        if updated == 0 {
            debug!("no prompt matched, nothing updated");
        }

        Ok(())
    }

    #[instrument(skip(self, input), fields(prompt_id = %input.prompt_id))]
    async fn delete_prompt(&self, input: DeletePromptInput) -> Result<(), CoreError> {
        self.prompt_repository
            .delete_prompt(input.prompt_id)
            .await?;

        Ok(())
    }
}
