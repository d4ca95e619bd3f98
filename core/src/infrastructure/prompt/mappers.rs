use chrono::Utc;

use crate::domain::prompt::entities::prompt::Prompt;
use crate::entity::prompts::Model as PromptModel;

impl From<PromptModel> for Prompt {
    fn from(model: PromptModel) -> Self {
        Prompt {
            id: model.id,
            title: model.title,
            content: model.content,
            category: model.category,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<&PromptModel> for Prompt {
    fn from(model: &PromptModel) -> Self {
        Prompt {
            id: model.id,
            title: model.title.clone(),
            content: model.content.clone(),
            category: model.category.clone(),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
