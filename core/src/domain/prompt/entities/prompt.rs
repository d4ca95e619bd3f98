use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{category::to_initial_caps, prompt::value_objects::PromptDraft};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Prompt {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Prompt {
    /// Replaces the editable fields. `id` and `created_at` never change.
    pub fn update(&mut self, draft: PromptDraft) {
        let (title, content, category) = draft.into_parts();
        self.title = title;
        self.content = content;
        self.category = category;
    }

    pub fn with_normalized_category(mut self) -> Self {
        self.category = to_initial_caps(&self.category);
        self
    }
}

/// Sorts newest first. Ties keep their relative order.
pub fn sort_newest_first(prompts: &mut [Prompt]) {
    prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
