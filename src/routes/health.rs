use axum::{routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
}

async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "stockval API running",
    })
}

async fn health() -> Json<StatusResponse> {
    info!("GET /health - liveness probe");
    Json(StatusResponse { status: "healthy" })
}
