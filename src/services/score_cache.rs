use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, warn};

use crate::db::score_queries;
use crate::models::ScoreRecord;

#[derive(Debug, Error)]
pub enum CacheError {
    /// No store configured. A permanent state decided at startup, not an
    /// error condition; readers fall back to real-time computation.
    #[error("score cache is disabled (no DATABASE_URL configured)")]
    Disabled,

    #[error("score cache unreachable: {0}")]
    Unreachable(#[from] sqlx::Error),
}

/// Persistent store of the latest scored record per symbol.
///
/// There is exactly one writer (the batch refresher); query paths only read.
/// Readers treat any error as "compute instead" - cache trouble is never
/// surfaced to API callers.
#[async_trait]
pub trait ScoreCache: Send + Sync {
    fn enabled(&self) -> bool;

    /// Replace the record stored for `record.symbol`. A no-op `Ok(())`
    /// when the cache is disabled.
    async fn upsert(&self, record: &ScoreRecord) -> Result<(), CacheError>;

    /// All records, ordered by final_score descending.
    async fn fetch_all_ordered(&self) -> Result<Vec<ScoreRecord>, CacheError>;
}

/// Postgres-backed cache. Construction follows connect-or-disabled: a
/// missing URL yields a cache that is disabled for the life of the process.
pub struct PgScoreCache {
    pool: Option<PgPool>,
}

impl PgScoreCache {
    pub async fn connect(database_url: Option<&str>) -> Self {
        let Some(url) = database_url else {
            // Logged once here; readers silently fall back from now on.
            info!("DATABASE_URL not set - score cache disabled, every read computes in real time");
            return Self { pool: None };
        };

        match PgPoolOptions::new().max_connections(5).connect_lazy(url) {
            Ok(pool) => {
                if let Err(e) = score_queries::ensure_schema(&pool).await {
                    warn!("score cache schema bootstrap failed: {e}; reads fall back until the store is reachable");
                }
                info!("score cache enabled");
                Self { pool: Some(pool) }
            }
            Err(e) => {
                warn!("invalid DATABASE_URL ({e}) - score cache disabled");
                Self { pool: None }
            }
        }
    }
}

#[async_trait]
impl ScoreCache for PgScoreCache {
    fn enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn upsert(&self, record: &ScoreRecord) -> Result<(), CacheError> {
        match &self.pool {
            Some(pool) => {
                score_queries::upsert_score(pool, record).await?;
                Ok(())
            }
            // Disabled cache: batch writes are no-ops.
            None => Ok(()),
        }
    }

    async fn fetch_all_ordered(&self) -> Result<Vec<ScoreRecord>, CacheError> {
        match &self.pool {
            Some(pool) => Ok(score_queries::fetch_all_ordered(pool).await?),
            None => Err(CacheError::Disabled),
        }
    }
}
