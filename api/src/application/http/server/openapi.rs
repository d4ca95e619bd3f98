use crate::application::http::{
    enhancement::router::EnhancementApiDoc,
    health::HealthApiDoc,
    prompt::router::{CategoryApiDoc, PromptApiDoc},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Prompt Vault API",
        description = "Store, categorize and enhance reusable prompts."
    ),
    nest(
        (path = "/prompts", api = PromptApiDoc),
        (path = "/categories", api = CategoryApiDoc),
        (path = "/enhance-prompt", api = EnhancementApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with every path mounted under `root_path`.
pub fn prefixed_openapi(root_path: &str) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;
    openapi
}
