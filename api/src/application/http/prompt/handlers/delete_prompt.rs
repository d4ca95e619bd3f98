use axum::extract::{Path, State};
use promptvault_core::domain::prompt::{ports::PromptService, value_objects::DeletePromptInput};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::{MessageResponse, Response},
    },
    app_state::{AppService, AppState},
};

#[utoipa::path(
    delete,
    path = "/{prompt_id}",
    tag = "prompt",
    summary = "Delete prompt",
    description = "Removes a prompt. Deleting an unknown id succeeds as well.",
    responses(
        (status = 200, body = MessageResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    params(
        ("prompt_id" = Uuid, Path, description = "Prompt ID"),
    ),
)]
pub async fn delete_prompt<S: AppService>(
    Path(prompt_id): Path<Uuid>,
    State(state): State<AppState<S>>,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .delete_prompt(DeletePromptInput { prompt_id })
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to delete prompt"))?;

    Ok(Response::OK(MessageResponse::new(
        "Prompt deleted successfully",
    )))
}
