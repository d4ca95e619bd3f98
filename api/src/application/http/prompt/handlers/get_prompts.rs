use axum::extract::State;
use promptvault_core::domain::prompt::{entities::prompt::Prompt, ports::PromptService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::{AppService, AppState},
};

#[utoipa::path(
    get,
    path = "",
    tag = "prompt",
    summary = "Get prompts",
    description = "Retrieves every prompt, newest first, with categories in initial capitals.",
    responses(
        (status = 200, body = Vec<Prompt>),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn get_prompts<S: AppService>(
    State(state): State<AppState<S>>,
) -> Result<Response<Vec<Prompt>>, ApiError> {
    let prompts = state
        .service
        .get_prompts()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch prompts"))?;

    Ok(Response::OK(prompts))
}
