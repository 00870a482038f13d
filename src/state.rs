use std::sync::Arc;

use parking_lot::RwLock;

use crate::external::price_provider::PriceProvider;
use crate::services::job_scheduler_service::{JobContext, RefreshSummary};
use crate::services::score_cache::ScoreCache;
use crate::services::scoring_service::ScoringConfig;

#[derive(Clone)]
pub struct AppState {
    pub score_cache: Arc<dyn ScoreCache>,
    pub price_provider: Arc<dyn PriceProvider>,
    /// Fixed, ordered symbol set the batch job tracks. Static per deployment.
    pub universe: Arc<Vec<String>>,
    pub scoring: ScoringConfig,
    pub last_refresh: Arc<RwLock<Option<RefreshSummary>>>,
}

impl AppState {
    /// The same handles, packaged for a background job run.
    pub fn job_context(&self) -> JobContext {
        JobContext {
            cache: self.score_cache.clone(),
            price_provider: self.price_provider.clone(),
            universe: self.universe.clone(),
            scoring: self.scoring,
            last_refresh: self.last_refresh.clone(),
        }
    }
}
