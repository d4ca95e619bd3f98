use uuid::Uuid;

use crate::domain::{category::to_initial_caps, common::entities::app_errors::CoreError};

pub struct CreatePromptInput {
    pub title: String,
    pub content: String,
    pub category: String,
}

pub struct UpdatePromptInput {
    pub prompt_id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
}

pub struct DeletePromptInput {
    pub prompt_id: Uuid,
}

/// Validated editable fields of a prompt, with the category normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDraft {
    title: String,
    content: String,
    category: String,
}

impl PromptDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let title = title.into();
        let content = content.into();
        let category = category.into();

        let missing: Vec<&str> = [("title", &title), ("content", &content), ("category", &category)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::Invalid(format!(
                "{} required",
                missing.join(", ")
            )));
        }

        Ok(Self {
            title,
            content,
            category: to_initial_caps(&category),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn into_parts(self) -> (String, String, String) {
        (self.title, self.content, self.category)
    }
}

impl TryFrom<CreatePromptInput> for PromptDraft {
    type Error = CoreError;

    fn try_from(input: CreatePromptInput) -> Result<Self, Self::Error> {
        PromptDraft::new(input.title, input.content, input.category)
    }
}
