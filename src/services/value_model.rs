use crate::models::PricePoint;

const DAYS_PER_YEAR: f64 = 365.25;

/// Long-horizon value signal for one symbol.
#[derive(Debug, Clone, Copy)]
pub struct ValueEstimate {
    pub current_price: f64,
    /// Recency-weighted fair-value estimate.
    pub weighted_avg: f64,
    /// current_price / weighted_avg.
    pub value_ratio: f64,
    /// 0-100; above 50 means the price sits below fair value.
    pub value_score: f64,
}

/// Normalized exponential-decay weights for a chronological series.
///
/// The most recent point gets the largest raw weight (`exp(0) = 1`), older
/// points decay with their age in years. Normalization runs exactly once
/// over the full series, so the result sums to 1 (every raw weight is
/// strictly positive). Empty input yields an empty vector.
pub fn decay_weights(series: &[PricePoint], decay_rate: f64) -> Vec<f64> {
    let Some(latest) = series.last() else {
        return Vec::new();
    };

    let raw: Vec<f64> = series
        .iter()
        .map(|p| {
            let age_years = (latest.date - p.date).num_days() as f64 / DAYS_PER_YEAR;
            (-decay_rate * age_years).exp()
        })
        .collect();

    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}

/// Recency-weighted fair value and the 0-100 value score derived from it.
///
/// Returns `None` for an empty series; the scoring pipeline's history floor
/// keeps that branch unreachable in practice.
pub fn estimate(series: &[PricePoint], decay_rate: f64) -> Option<ValueEstimate> {
    let current_price = series.last()?.close;

    let weighted_avg = decay_weights(series, decay_rate)
        .iter()
        .zip(series)
        .map(|(w, p)| w * p.close)
        .sum::<f64>();

    let value_ratio = current_price / weighted_avg;

    // Price below fair value (ratio < 1) pushes the score above 50; the
    // clamp bounds pathological ratios.
    let value_score = (50.0 + (1.0 - value_ratio) * 100.0).clamp(0.0, 100.0);

    Some(ValueEstimate {
        current_price,
        weighted_avg,
        value_ratio,
        value_score,
    })
}
