use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    enhancement::{
        ports::{EnhancementService, LLMClient},
        value_objects::{EnhancePromptInput, TextGenerationRequest},
    },
    health::ports::HealthCheckRepository,
    prompt::ports::PromptRepository,
};

impl<PR, LLM, HC> EnhancementService for Service<PR, LLM, HC>
where
    PR: PromptRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(prompt_len = input.prompt.len()))]
    async fn enhance_prompt(&self, input: EnhancePromptInput) -> Result<String, CoreError> {
        if input.prompt.trim().is_empty() {
            return Err(CoreError::Invalid("prompt required".to_string()));
        }

        let enhanced = self
            .llm_client
            .generate_text(TextGenerationRequest::enhancement(&input.prompt))
            .await?;

        info!(enhanced_len = enhanced.len(), "prompt enhanced");
        Ok(enhanced)
    }
}
