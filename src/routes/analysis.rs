use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, warn};

use crate::models::{AnalysisFailure, ScoreRecord, ScoresResponse};
use crate::services::query_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze/:symbol", get(analyze_symbol))
        .route("/stocks", get(list_stocks))
}

/// Either a full score record or the `{error, symbol}` failure payload.
/// The read surface always answers 200; callers check for `error`.
#[derive(Serialize)]
#[serde(untagged)]
enum AnalysisResponse {
    Score(Box<ScoreRecord>),
    Failure(AnalysisFailure),
}

async fn analyze_symbol(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Json<AnalysisResponse> {
    let symbol = symbol.to_uppercase();
    info!("GET /analyze/{} - real-time scoring", symbol);

    match query_service::get_score(state.price_provider.as_ref(), &symbol, &state.scoring).await {
        Ok(record) => Json(AnalysisResponse::Score(Box::new(record))),
        Err(e) => {
            warn!("analysis failed for {}: {}", symbol, e);
            Json(AnalysisResponse::Failure(AnalysisFailure {
                error: e.to_string(),
                symbol,
            }))
        }
    }
}

async fn list_stocks(State(state): State<AppState>) -> Json<ScoresResponse> {
    info!("GET /stocks - universe scores");

    let response = query_service::list_scores(
        state.score_cache.as_ref(),
        state.price_provider.as_ref(),
        &state.universe,
        &state.scoring,
    )
    .await;

    Json(response)
}
