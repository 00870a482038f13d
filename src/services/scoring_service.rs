use chrono::Utc;
use thiserror::Error;

use crate::external::price_provider::PriceProvider;
use crate::models::{PricePoint, ScoreRecord};
use crate::services::score_combiner::{self, BlendWeights};
use crate::services::{timing_model, value_model};

/// History floor shared by both models: anything shorter cannot anchor the
/// decay-weighted fair value.
pub const MIN_HISTORY_POINTS: usize = 200;

/// Calendar lookback for the scoring series, in days (4 years).
pub const LOOKBACK_DAYS: i64 = 4 * 365;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("insufficient price history for {symbol}: {points} points, need {MIN_HISTORY_POINTS}")]
    InsufficientHistory { symbol: String, points: usize },

    #[error("price data unavailable for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },
}

impl ScoreError {
    pub fn symbol(&self) -> &str {
        match self {
            ScoreError::InsufficientHistory { symbol, .. } => symbol,
            ScoreError::DataUnavailable { symbol, .. } => symbol,
        }
    }
}

/// Tunable scoring knobs. The defaults are the deployed business choices;
/// they can be overridden through the environment at startup.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    /// Exponential decay rate per year of age for the fair-value weights.
    pub decay_rate: f64,
    pub weights: BlendWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            decay_rate: 1.0,
            weights: BlendWeights::default(),
        }
    }
}

/// Fetch the 4-year daily series for `symbol` and score it.
///
/// This is the whole per-symbol pipeline: one fetch plus pure computation.
/// It never touches the score cache; persisting a record is the batch
/// refresher's job alone.
pub async fn compute_score(
    provider: &dyn PriceProvider,
    symbol: &str,
    config: &ScoringConfig,
) -> Result<ScoreRecord, ScoreError> {
    let end = Utc::now().date_naive();
    let start = end - chrono::Duration::days(LOOKBACK_DAYS);

    let series = provider
        .fetch_range(symbol, start, end)
        .await
        .map_err(|e| ScoreError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: e.to_string(),
        })?;

    score_series(symbol, &series, config)
}

/// Score an already-fetched series. Pure: no I/O, no cache writes.
pub fn score_series(
    symbol: &str,
    series: &[PricePoint],
    config: &ScoringConfig,
) -> Result<ScoreRecord, ScoreError> {
    if series.len() < MIN_HISTORY_POINTS {
        return Err(ScoreError::InsufficientHistory {
            symbol: symbol.to_string(),
            points: series.len(),
        });
    }

    let insufficient = || ScoreError::InsufficientHistory {
        symbol: symbol.to_string(),
        points: series.len(),
    };

    // Both models consume the same series; the guard above covers them both.
    let value = value_model::estimate(series, config.decay_rate).ok_or_else(|| insufficient())?;
    let timing = timing_model::estimate(series).ok_or_else(|| insufficient())?;

    let blend = score_combiner::combine(value.value_score, timing.timing_score, config.weights);

    Ok(ScoreRecord {
        symbol: symbol.to_string(),
        current_price: value.current_price,
        weighted_avg: value.weighted_avg,
        value_score: value.value_score,
        value_ratio: value.value_ratio,
        timing_score: timing.timing_score,
        momentum_oscillator: timing.momentum_oscillator,
        final_score: blend.final_score,
        signal: blend.signal,
        margin: blend.margin,
        computed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn daily_series(closes: &[f64]) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: start + chrono::Duration::days(i as i64),
                close,
            })
            .collect()
    }

    #[test]
    fn test_short_series_is_rejected_with_symbol() {
        let series = daily_series(&vec![100.0; 199]);
        let err = score_series("AAPL", &series, &ScoringConfig::default()).unwrap_err();

        match err {
            ScoreError::InsufficientHistory { ref symbol, points } => {
                assert_eq!(symbol, "AAPL");
                assert_eq!(points, 199);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.symbol(), "AAPL");
    }

    #[test]
    fn test_empty_series_is_rejected_not_a_panic() {
        let err = score_series("TSLA", &[], &ScoringConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InsufficientHistory { points: 0, .. }
        ));
    }

    #[test]
    fn test_record_fields_are_consistent() {
        let closes: Vec<f64> = (0..250)
            .map(|i| 100.0 + ((i as f64) * 0.13).sin() * 8.0)
            .collect();
        let series = daily_series(&closes);
        let config = ScoringConfig::default();

        let record = score_series("MSFT", &series, &config).unwrap();

        assert_eq!(record.symbol, "MSFT");
        assert_eq!(record.current_price, *closes.last().unwrap());
        assert!((record.value_ratio - record.current_price / record.weighted_avg).abs() < 1e-12);
        assert!(
            (record.final_score - (0.7 * record.value_score + 0.3 * record.timing_score)).abs()
                < 1e-9
        );
        assert!((record.timing_score - (100.0 - record.momentum_oscillator)).abs() < 1e-12);
        assert!((record.margin - (record.final_score - 50.0)).abs() < 1e-12);
        assert!((0.0..=100.0).contains(&record.final_score));
    }

    #[test]
    fn test_exactly_at_floor_is_scored() {
        let series = daily_series(&vec![55.0; MIN_HISTORY_POINTS]);
        assert!(score_series("JPM", &series, &ScoringConfig::default()).is_ok());
    }
}
