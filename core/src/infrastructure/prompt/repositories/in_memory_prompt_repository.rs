use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    prompt::{entities::prompt::Prompt, ports::PromptRepository, value_objects::PromptDraft},
};

/// Process-local prompt store.
///
/// Behaves like the Postgres table: ids and timestamps are assigned on insert,
/// and updates or deletes of unknown ids change nothing and succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPromptRepository {
    prompts: Arc<RwLock<Vec<Prompt>>>,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts: Arc::new(RwLock::new(prompts)),
        }
    }

    /// Rows in insertion order.
    pub fn snapshot(&self) -> Vec<Prompt> {
        self.prompts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PromptRepository for InMemoryPromptRepository {
    async fn fetch_prompts(&self) -> Result<Vec<Prompt>, CoreError> {
        let mut prompts = self.snapshot();
        prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(prompts)
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CoreError> {
        Ok(self
            .snapshot()
            .into_iter()
            .map(|prompt| prompt.category)
            .collect())
    }

    async fn create_prompt(&self, draft: PromptDraft) -> Result<Prompt, CoreError> {
        let (title, content, category) = draft.into_parts();
        let prompt = Prompt {
            id: Uuid::new_v4(),
            title,
            content,
            category,
            created_at: Utc::now(),
        };

        self.prompts
            .write()
            .map_err(|_| CoreError::InternalServerError)?
            .push(prompt.clone());

        Ok(prompt)
    }

    async fn update_prompt(&self, prompt_id: Uuid, draft: PromptDraft) -> Result<u64, CoreError> {
        let mut prompts = self
            .prompts
            .write()
            .map_err(|_| CoreError::InternalServerError)?;

        let Some(stored) = prompts.iter_mut().find(|stored| stored.id == prompt_id) else {
            return Ok(0);
        };

        stored.update(draft);
        Ok(1)
    }

    async fn delete_prompt(&self, prompt_id: Uuid) -> Result<(), CoreError> {
        self.prompts
            .write()
            .map_err(|_| CoreError::InternalServerError)?
            .retain(|prompt| prompt.id != prompt_id);

        Ok(())
    }
}
