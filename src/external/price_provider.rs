use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::PricePoint;

#[derive(Debug, Error)]
pub enum PriceProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("rate limited")]
    RateLimited,
}

/// External price-history collaborator.
///
/// Implementations return the series normalized: sorted ascending by date,
/// one point per trading day (duplicates collapsed), missing closes dropped.
/// Callers never re-shape the data.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Daily closes covering the calendar range `[start, end]`.
    async fn fetch_range(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, PriceProviderError>;

    /// Daily closes for the trailing `days` calendar days.
    async fn fetch_recent(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, PriceProviderError>;
}
