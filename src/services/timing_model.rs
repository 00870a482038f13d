use crate::models::PricePoint;
use crate::services::indicators;

/// Window used for the momentum oscillator, in trading days.
pub const OSCILLATOR_PERIOD: usize = 14;

/// Short-horizon timing signal for one symbol.
#[derive(Debug, Clone, Copy)]
pub struct TimingEstimate {
    /// Raw oscillator reading at the most recent date, 0-100.
    pub momentum_oscillator: f64,
    /// 100 - oscillator: oversold conditions map to a HIGH timing score.
    pub timing_score: f64,
}

/// Timing score from the most recent defined oscillator value.
///
/// Returns `None` when no oscillator value is defined yet (fewer than
/// `OSCILLATOR_PERIOD + 1` closes); the pipeline's history floor keeps that
/// branch unreachable in practice.
pub fn estimate(series: &[PricePoint]) -> Option<TimingEstimate> {
    let closes: Vec<f64> = series.iter().map(|p| p.close).collect();
    let oscillator = indicators::momentum_oscillator(&closes, OSCILLATOR_PERIOD);

    // Early indices are undefined; take the latest defined reading.
    let momentum_oscillator = oscillator.iter().rev().find_map(|&v| v)?;

    Some(TimingEstimate {
        momentum_oscillator,
        timing_score: 100.0 - momentum_oscillator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn daily_series(closes: &[f64]) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
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
    fn test_timing_score_inverts_oscillator() {
        let closes: Vec<f64> = (0..40)
            .map(|i| 100.0 + ((i as f64) * 0.9).sin() * 5.0)
            .collect();
        let series = daily_series(&closes);

        let timing = estimate(&series).unwrap();
        assert!((timing.timing_score - (100.0 - timing.momentum_oscillator)).abs() < 1e-12);
    }

    #[test]
    fn test_oversold_series_scores_high() {
        // Persistent selling: oscillator near 0, timing score near 100.
        let closes: Vec<f64> = (0..40).map(|i| 120.0 - i as f64 * 0.5).collect();
        let series = daily_series(&closes);

        let timing = estimate(&series).unwrap();
        assert!(timing.momentum_oscillator < 30.0);
        assert!(timing.timing_score > 70.0);
    }

    #[test]
    fn test_too_short_series_is_undefined() {
        let series = daily_series(&[100.0, 101.0, 99.0]);
        assert!(estimate(&series).is_none());
    }
}
