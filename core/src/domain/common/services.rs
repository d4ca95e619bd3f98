use crate::domain::{
    enhancement::ports::LLMClient, health::ports::HealthCheckRepository,
    prompt::ports::PromptRepository,
};

/// Application service wiring every port the domain needs.
///
/// Collaborators are injected at construction so tests can substitute
/// in-memory repositories and stub language models.
#[derive(Clone)]
pub struct Service<PR, LLM, HC>
where
    PR: PromptRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub(crate) prompt_repository: PR,
    pub(crate) llm_client: LLM,
    pub(crate) health_check_repository: HC,
}

impl<PR, LLM, HC> Service<PR, LLM, HC>
where
    PR: PromptRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub fn new(prompt_repository: PR, llm_client: LLM, health_check_repository: HC) -> Self {
        Self {
            prompt_repository,
            llm_client,
            health_check_repository,
        }
    }
}
