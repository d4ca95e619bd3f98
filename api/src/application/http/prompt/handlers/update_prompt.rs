use axum::extract::{Path, State};
use promptvault_core::domain::prompt::{ports::PromptService, value_objects::UpdatePromptInput};
use uuid::Uuid;

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
    put,
    path = "/{prompt_id}",
    tag = "prompt",
    summary = "Update prompt",
    description = "Replaces the title, content and category of a prompt. An unknown id changes nothing.",
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    params(
        ("prompt_id" = Uuid, Path, description = "Prompt ID"),
    ),
    request_body = PromptPayload
)]
pub async fn update_prompt<S: AppService>(
    Path(prompt_id): Path<Uuid>,
    State(state): State<AppState<S>>,
    ValidateJson(payload): ValidateJson<PromptPayload>,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .update_prompt(UpdatePromptInput {
            prompt_id,
            title: payload.title,
            content: payload.content,
            category: payload.category,
        })
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to update prompt"))?;

    Ok(Response::OK(MessageResponse::new(
        "Prompt updated successfully",
    )))
}
