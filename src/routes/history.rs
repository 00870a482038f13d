use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, warn};

use crate::models::{AnalysisFailure, PricePoint};
use crate::state::AppState;

/// The chart endpoint serves one year of closes.
const HISTORY_DAYS: u32 = 365;

pub fn router() -> Router<AppState> {
    Router::new().route("/history/:symbol", get(get_history))
}

#[derive(Serialize)]
#[serde(untagged)]
enum HistoryResponse {
    Series(Vec<PricePoint>),
    Failure(AnalysisFailure),
}

/// Raw `{date, close}` pairs straight from the provider, independent of the
/// scoring pipeline. Same always-200 contract as the other read routes.
async fn get_history(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Json<HistoryResponse> {
    let symbol = symbol.to_uppercase();
    info!("GET /history/{} - one year of closes", symbol);

    match state
        .price_provider
        .fetch_recent(&symbol, HISTORY_DAYS)
        .await
    {
        Ok(series) => Json(HistoryResponse::Series(series)),
        Err(e) => {
            warn!("history fetch failed for {}: {}", symbol, e);
            Json(HistoryResponse::Failure(AnalysisFailure {
                error: e.to_string(),
                symbol,
            }))
        }
    }
}
