use super::handlers::create_prompt::{__path_create_prompt, create_prompt};
use super::handlers::delete_prompt::{__path_delete_prompt, delete_prompt};
use super::handlers::get_categories::{__path_get_categories, get_categories};
use super::handlers::get_prompts::{__path_get_prompts, get_prompts};
use super::handlers::update_prompt::{__path_update_prompt, update_prompt};
use crate::application::http::server::app_state::{AppService, AppState};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_prompts, create_prompt, update_prompt, delete_prompt))]
pub struct PromptApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_categories))]
pub struct CategoryApiDoc;

pub fn prompt_routes<S: AppService>(state: &AppState<S>) -> Router<AppState<S>> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/prompts"), get(get_prompts::<S>))
        .route(&format!("{root_path}/prompts"), post(create_prompt::<S>))
        .route(
            &format!("{root_path}/prompts/{{prompt_id}}"),
            put(update_prompt::<S>),
        )
        .route(
            &format!("{root_path}/prompts/{{prompt_id}}"),
            delete(delete_prompt::<S>),
        )
        .route(&format!("{root_path}/categories"), get(get_categories::<S>))
}
