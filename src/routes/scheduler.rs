use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::score_refresh_job;
use crate::state::AppState;

// GET is kept from the original API surface even though a trigger is a
// mutation; the frontend calls it as a plain link.
pub fn router() -> Router<AppState> {
    Router::new().route("/trigger-scheduler", get(trigger_refresh))
}

#[derive(Serialize)]
struct TriggerResponse {
    status: &'static str,
    processed: i32,
    failed: i32,
    duration_ms: i64,
}

/// Runs the refresh pass inline and reports its counts.
async fn trigger_refresh(
    State(state): State<AppState>,
) -> Result<Json<TriggerResponse>, AppError> {
    info!("GET /trigger-scheduler - manual refresh pass");

    let result = score_refresh_job::refresh_all_scores(state.job_context()).await?;

    let duration_ms = state
        .last_refresh
        .read()
        .as_ref()
        .map(|s| s.duration_ms)
        .unwrap_or(0);

    Ok(Json(TriggerResponse {
        status: "completed",
        processed: result.items_processed,
        failed: result.items_failed,
        duration_ms,
    }))
}
