use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Body of create and update requests. Missing fields deserialize as empty
/// strings so they fail validation with a field-specific message.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PromptPayload {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub content: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub category: String,
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::from("is required")));
    }

    Ok(())
}
