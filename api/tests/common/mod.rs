#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use clap::Parser;
use promptvault_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use promptvault_core::{
    domain::{
        common::{entities::app_errors::CoreError, services::Service},
        enhancement::{ports::LLMClient, value_objects::TextGenerationRequest},
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
        prompt::entities::prompt::Prompt,
    },
    infrastructure::prompt::repositories::InMemoryPromptRepository,
};
use test_context::AsyncTestContext;
use uuid::Uuid;

pub const ENHANCED_TEXT: &str = "An enhanced poem prompt";

/// Language model double answering every request with a fixed text.
#[derive(Clone)]
pub struct StubLLMClient {
    pub response: Result<String, CoreError>,
}

impl LLMClient for StubLLMClient {
    async fn generate_text(&self, _request: TextGenerationRequest) -> Result<String, CoreError> {
        self.response.clone()
    }
}

#[derive(Clone)]
pub struct StubHealthCheck {
    pub up: bool,
}

impl HealthCheckRepository for StubHealthCheck {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        if self.up {
            Ok(DatabaseHealthStatus::up())
        } else {
            Ok(DatabaseHealthStatus::down())
        }
    }
}

pub type TestService = Service<InMemoryPromptRepository, StubLLMClient, StubHealthCheck>;

pub fn test_args() -> Args {
    test_args_with(&["--metrics", "false"])
}

/// Test arguments plus `extra` flags. `--metrics` is left to the caller.
pub fn test_args_with(extra: &[&str]) -> Args {
    let mut argv = vec![
        "promptvault",
        "--database-url",
        "postgres://unused@localhost/unused",
        "--gemini-api-key",
        "test-key",
        "--allowed-origins",
        "http://localhost:5173",
    ];
    argv.extend_from_slice(extra);
    Args::parse_from(argv)
}

pub fn prompt_at(title: &str, category: &str, secs: i64) -> Prompt {
    Prompt {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: format!("{title} content"),
        category: category.to_string(),
        created_at: Utc.timestamp_opt(secs, 0).unwrap(),
    }
}

pub struct ApiContext {
    pub server: TestServer,
    pub repository: InMemoryPromptRepository,
}

impl ApiContext {
    pub fn build(
        repository: InMemoryPromptRepository,
        llm: StubLLMClient,
        health: StubHealthCheck,
    ) -> Self {
        Self::build_with_args(test_args(), repository, llm, health)
    }

    pub fn build_with_args(
        args: Args,
        repository: InMemoryPromptRepository,
        llm: StubLLMClient,
        health: StubHealthCheck,
    ) -> Self {
        let service: TestService = Service::new(repository.clone(), llm, health);
        let state = AppState::new(Arc::new(args), service);
        let app = router(state).expect("router builds");

        Self {
            server: TestServer::new(app).expect("test server starts"),
            repository,
        }
    }

    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        Self::with_args(test_args(), prompts)
    }

    pub fn with_args(args: Args, prompts: Vec<Prompt>) -> Self {
        Self::build_with_args(
            args,
            InMemoryPromptRepository::with_prompts(prompts),
            StubLLMClient {
                response: Ok(ENHANCED_TEXT.to_string()),
            },
            StubHealthCheck { up: true },
        )
    }
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        Self::with_prompts(Vec::new())
    }
}
