use std::cmp::Ordering;

use tracing::{info, warn};

use crate::external::price_provider::PriceProvider;
use crate::models::{ScoreRecord, ScoreSource, ScoresResponse};
use crate::services::score_cache::{CacheError, ScoreCache};
use crate::services::scoring_service::{self, ScoreError, ScoringConfig};

/// Real-time single-symbol scoring. Deliberately bypasses the cache: the
/// per-symbol endpoint always reflects the latest prices.
pub async fn get_score(
    provider: &dyn PriceProvider,
    symbol: &str,
    config: &ScoringConfig,
) -> Result<ScoreRecord, ScoreError> {
    scoring_service::compute_score(provider, symbol, config).await
}

/// Universe-wide listing, cache-first with compute fallback.
///
/// A reachable, non-empty cache answers verbatim (the store already orders
/// by final_score). Otherwise every universe symbol is scored on demand;
/// symbols that fail are dropped and the remainder sorted. Never fails -
/// partial results are acceptable.
pub async fn list_scores(
    cache: &dyn ScoreCache,
    provider: &dyn PriceProvider,
    universe: &[String],
    config: &ScoringConfig,
) -> ScoresResponse {
    match cache.fetch_all_ordered().await {
        Ok(stocks) if !stocks.is_empty() => {
            return ScoresResponse {
                stocks,
                source: ScoreSource::Cache,
            };
        }
        Ok(_) => {
            info!(
                "score cache is empty, computing {} universe symbols on demand",
                universe.len()
            );
        }
        // Disabled was logged once at startup; unreachable is worth a warning.
        Err(CacheError::Disabled) => {}
        Err(e) => warn!("score cache read failed ({e}), computing on demand"),
    }

    let mut stocks = Vec::with_capacity(universe.len());
    for symbol in universe {
        match scoring_service::compute_score(provider, symbol, config).await {
            Ok(record) => stocks.push(record),
            Err(e) => warn!("dropping {symbol} from universe listing: {e}"),
        }
    }

    stocks.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });

    ScoresResponse {
        stocks,
        source: ScoreSource::Computed,
    }
}
