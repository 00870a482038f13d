use crate::services::score_combiner::BlendWeights;
use crate::services::scoring_service::ScoringConfig;

/// Universe used when STOCK_UNIVERSE is not set.
const DEFAULT_UNIVERSE: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA", "JPM", "V", "UNH",
];

/// Once per trading day at market open, 13:30 UTC on business days
/// (sec min hour day month weekday).
const DEFAULT_REFRESH_SCHEDULE: &str = "0 30 13 * * MON-FRI";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Absent => the score cache is disabled for the life of the process.
    pub database_url: Option<String>,
    pub universe: Vec<String>,
    pub refresh_schedule: String,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let universe = std::env::var("STOCK_UNIVERSE")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .ok()
            .filter(|symbols| !symbols.is_empty())
            .unwrap_or_else(|| DEFAULT_UNIVERSE.iter().map(|s| s.to_string()).collect());

        // Business defaults; deployments can tune the model without a
        // rebuild.
        let scoring = ScoringConfig {
            decay_rate: env_f64("DECAY_RATE", 1.0),
            weights: BlendWeights {
                value: env_f64("VALUE_WEIGHT", 0.7),
                timing: env_f64("TIMING_WEIGHT", 0.3),
            },
        };

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            database_url: std::env::var("DATABASE_URL").ok(),
            universe,
            refresh_schedule: std::env::var("SCORE_REFRESH_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_REFRESH_SCHEDULE.to_string()),
            scoring,
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
