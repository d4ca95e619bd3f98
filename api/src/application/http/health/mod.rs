use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use promptvault_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::app_state::{AppService, AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses((status = 200, body = LivenessResponse)),
)]
pub async fn live() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Pings the datastore.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = DatabaseHealthStatus)
    ),
)]
pub async fn ready<S: AppService>(State(state): State<AppState<S>>) -> Response {
    let status = match state.service.readiness().await {
        Ok(status) => status,
        Err(e) => {
            warn!("readiness check failed: {}", e);
            DatabaseHealthStatus::down()
        }
    };

    let code = if status.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(status)).into_response()
}

pub fn health_routes<S: AppService>(root_path: &str) -> Router<AppState<S>> {
    Router::new()
        .route(&format!("{root_path}/health/live"), get(live))
        .route(&format!("{root_path}/health/ready"), get(ready::<S>))
}
