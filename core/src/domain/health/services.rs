use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    enhancement::ports::LLMClient,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    prompt::ports::PromptRepository,
};

impl<PR, LLM, HC> HealthCheckService for Service<PR, LLM, HC>
where
    PR: PromptRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
