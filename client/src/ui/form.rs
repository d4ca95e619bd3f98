use promptvault_core::domain::prompt::entities::prompt::Prompt;

use crate::api::PromptFields;

/// Editable copy of a prompt inside the add or edit modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptForm {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl PromptForm {
    pub fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            title: prompt.title.clone(),
            content: prompt.content.clone(),
            category: prompt.category.clone(),
        }
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Names of the blank fields, in form order. Empty when submittable.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("content", &self.content),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn to_fields(&self) -> PromptFields {
        PromptFields {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
        }
    }
}
