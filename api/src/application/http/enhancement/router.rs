use super::handlers::enhance_prompt::{__path_enhance_prompt, enhance_prompt};
use crate::application::http::server::app_state::{AppService, AppState};

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(enhance_prompt))]
pub struct EnhancementApiDoc;

pub fn enhancement_routes<S: AppService>(state: &AppState<S>) -> Router<AppState<S>> {
    Router::new().route(
        &format!("{}/enhance-prompt", state.args.server.root_path),
        post(enhance_prompt::<S>),
    )
}
