use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    enhancement::value_objects::{EnhancePromptInput, TextGenerationRequest},
};

/// Text-in, text-out access to a generative language model.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(
        &self,
        request: TextGenerationRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait EnhancementService: Send + Sync {
    /// Rewrites `input.prompt` for clarity without answering it.
    fn enhance_prompt(
        &self,
        input: EnhancePromptInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
