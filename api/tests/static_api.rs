mod common;

use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use common::{ApiContext, prompt_at, test_args_with};
use promptvault_core::domain::prompt::entities::prompt::Prompt;
use uuid::Uuid;

const INDEX_HTML: &str = "<!doctype html><title>Prompt Vault</title>";

fn static_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("promptvault-static-{}", Uuid::new_v4()));
    std::fs::create_dir_all(dir.join("assets")).unwrap();
    std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.join("assets/app.js"), "console.log('vault');").unwrap();
    dir
}

fn static_context(dir: &Path, prompts: Vec<Prompt>) -> ApiContext {
    let args = test_args_with(&[
        "--metrics",
        "false",
        "--serve-static",
        "--static-dir",
        dir.to_str().unwrap(),
    ]);

    ApiContext::with_args(args, prompts)
}

#[tokio::test]
async fn test_unknown_routes_fall_back_to_index() {
    let dir = static_dir();
    let ctx = static_context(&dir, Vec::new());

    let response = ctx.server.get("/some/spa/route").await;

    response.assert_status_ok();
    response.assert_text(INDEX_HTML);

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_static_files_are_served() {
    let dir = static_dir();
    let ctx = static_context(&dir, Vec::new());

    ctx.server.get("/").await.assert_text(INDEX_HTML);
    ctx.server
        .get("/assets/app.js")
        .await
        .assert_text("console.log('vault');");

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_api_routes_win_over_static_files() {
    let dir = static_dir();
    let ctx = static_context(&dir, vec![prompt_at("kept", "general", 100)]);

    let response = ctx.server.get("/api/prompts").await;

    response.assert_status_ok();
    let prompts = response.json::<Vec<Prompt>>();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].title, "kept");

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_without_static_serving_unknown_routes_are_not_found() {
    let ctx = ApiContext::with_prompts(Vec::new());

    let response = ctx.server.get("/some/spa/route").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
