use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::prompt::validators::not_blank;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct EnhancePromptRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EnhancePromptResponse {
    #[serde(rename = "enhancedPrompt")]
    pub enhanced_prompt: String,
}
