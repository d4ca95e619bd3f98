use axum::extract::State;
use promptvault_core::domain::prompt::ports::PromptService;

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
    summary = "Get categories",
    description = "Lists the distinct categories currently in use, sorted ascending.",
    responses(
        (status = 200, body = Vec<String>),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn get_categories<S: AppService>(
    State(state): State<AppState<S>>,
) -> Result<Response<Vec<String>>, ApiError> {
    let categories = state
        .service
        .get_categories()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch categories"))?;

    Ok(Response::OK(categories))
}
