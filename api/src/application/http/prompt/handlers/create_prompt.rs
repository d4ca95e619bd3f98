use axum::extract::State;
use promptvault_core::domain::prompt::{ports::PromptService, value_objects::CreatePromptInput};
use tracing::info;

use crate::application::http::{
    prompt::validators::PromptPayload,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::{MessageResponse, Response},
        },
        app_state::{AppService, AppState},
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "prompt",
    summary = "Create prompt",
    description = "Stores a new prompt. The created record is not returned; list prompts to observe it.",
    responses(
        (status = 201, body = MessageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = PromptPayload
)]
pub async fn create_prompt<S: AppService>(
    State(state): State<AppState<S>>,
    ValidateJson(payload): ValidateJson<PromptPayload>,
) -> Result<Response<MessageResponse>, ApiError> {
    let prompt = state
        .service
        .create_prompt(CreatePromptInput {
            title: payload.title,
            content: payload.content,
            category: payload.category,
        })
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to add prompt"))?;

    info!(prompt_id = %prompt.id, "prompt added");
    Ok(Response::Created(MessageResponse::new(
        "Prompt added successfully",
    )))
}
