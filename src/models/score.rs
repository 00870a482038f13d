use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Discrete recommendation label derived by thresholding the blended score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum Signal {
    #[serde(rename = "STRONG BUY")]
    #[sqlx(rename = "STRONG BUY")]
    StrongBuy,

    #[serde(rename = "BUY")]
    #[sqlx(rename = "BUY")]
    Buy,

    #[serde(rename = "HOLD")]
    #[sqlx(rename = "HOLD")]
    Hold,

    #[serde(rename = "SELL")]
    #[sqlx(rename = "SELL")]
    Sell,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::StrongBuy => write!(f, "STRONG BUY"),
            Signal::Buy => write!(f, "BUY"),
            Signal::Hold => write!(f, "HOLD"),
            Signal::Sell => write!(f, "SELL"),
        }
    }
}

/// The full scored snapshot for one symbol. One row per symbol in the
/// `stock_scores` table; a later computation replaces the prior one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScoreRecord {
    pub symbol: String,
    pub current_price: f64,
    /// Recency-weighted fair-value estimate (exponential decay, not an SMA).
    pub weighted_avg: f64,
    pub value_score: f64,
    /// current_price / weighted_avg.
    pub value_ratio: f64,
    pub timing_score: f64,
    /// Raw 14-period oscillator reading at the most recent date.
    pub momentum_oscillator: f64,
    pub final_score: f64,
    pub signal: Signal,
    /// final_score - 50; positive means net-bullish.
    pub margin: f64,
    pub computed_at: DateTime<Utc>,
}

/// Where a `/stocks` response came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Cache,
    Computed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoresResponse {
    pub stocks: Vec<ScoreRecord>,
    pub source: ScoreSource,
}

/// Per-symbol failure payload of the read surface. The API answers 200 and
/// callers check for the `error` field.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisFailure {
    pub error: String,
    pub symbol: String,
}
