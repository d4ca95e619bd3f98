use tracing::info;

use crate::{
    domain::common::{PromptVaultConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        llm::GeminiLLMClient,
        prompt::repositories::PostgresPromptRepository,
    },
};

pub type PromptVaultService =
    Service<PostgresPromptRepository, GeminiLLMClient, PostgresHealthCheckRepository>;

/// Connects to the datastore and builds the production service.
pub async fn create_service(config: PromptVaultConfig) -> Result<PromptVaultService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url,
    })
    .await?;

    if config.database.run_migrations {
        postgres.run_migrations().await?;
    }

    let llm_client = GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model);
    info!("language model client ready");

    Ok(Service::new(
        PostgresPromptRepository::new(postgres.get_db()),
        llm_client,
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
