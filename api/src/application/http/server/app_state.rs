use std::sync::Arc;

use promptvault_core::{
    application::PromptVaultService,
    domain::{
        enhancement::ports::EnhancementService, health::ports::HealthCheckService,
        prompt::ports::PromptService,
    },
};

use crate::args::Args;

/// Everything the HTTP layer needs from the domain.
pub trait AppService:
    PromptService + EnhancementService + HealthCheckService + Clone + 'static
{
}

impl<T> AppService for T where
    T: PromptService + EnhancementService + HealthCheckService + Clone + 'static
{
}

#[derive(Clone)]
pub struct AppState<S: AppService = PromptVaultService> {
    pub args: Arc<Args>,
    pub service: S,
}

impl<S: AppService> AppState<S> {
    pub fn new(args: Arc<Args>, service: S) -> Self {
        Self { args, service }
    }
}
