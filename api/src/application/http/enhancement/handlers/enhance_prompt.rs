use axum::extract::State;
use promptvault_core::domain::enhancement::{
    ports::EnhancementService, value_objects::EnhancePromptInput,
};

use crate::application::http::{
    enhancement::validators::{EnhancePromptRequest, EnhancePromptResponse},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::{AppService, AppState},
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "enhancement",
    summary = "Enhance prompt",
    description = "Asks the language model to rewrite a prompt for clarity and completeness. Nothing is stored.",
    responses(
        (status = 200, body = EnhancePromptResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = EnhancePromptRequest
)]
pub async fn enhance_prompt<S: AppService>(
    State(state): State<AppState<S>>,
    ValidateJson(payload): ValidateJson<EnhancePromptRequest>,
) -> Result<Response<EnhancePromptResponse>, ApiError> {
    let enhanced_prompt = state
        .service
        .enhance_prompt(EnhancePromptInput {
            prompt: payload.prompt,
        })
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to enhance prompt"))?;

    Ok(Response::OK(EnhancePromptResponse { enhanced_prompt }))
}
