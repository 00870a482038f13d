/// Numeric contracts of the scoring engine.
///
/// These tests pin down the arithmetic the service promises - decay
/// weighting, oscillator behavior, blending, and the signal threshold
/// ladder - as standalone formulas, independent of the service wiring.
/// The in-crate unit tests exercise the same contracts through the real
/// modules.

// ---------------------------------------------------------------------------
// Decay weighting
// ---------------------------------------------------------------------------

#[cfg(test)]
mod decay_weighting {
    const DAYS_PER_YEAR: f64 = 365.25;

    fn normalized_weights(ages_days: &[i64], decay_rate: f64) -> Vec<f64> {
        let raw: Vec<f64> = ages_days
            .iter()
            .map(|&d| (-decay_rate * d as f64 / DAYS_PER_YEAR).exp())
            .collect();
        let total: f64 = raw.iter().sum();
        raw.into_iter().map(|w| w / total).collect()
    }

    #[test]
    fn test_weights_sum_to_one_for_long_series() {
        let ages: Vec<i64> = (0..1000).rev().collect();
        let sum: f64 = normalized_weights(&ages, 1.0).iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_most_recent_day_carries_the_largest_weight() {
        let ages: Vec<i64> = (0..500).rev().collect();
        let weights = normalized_weights(&ages, 1.0);
        let last = *weights.last().unwrap();
        assert!(weights.iter().all(|&w| w <= last));
    }

    #[test]
    fn test_half_life_is_about_eight_months() {
        // decay_rate 1.0 halves a weight every ln(2) years (~0.69).
        let half_life_days = (2.0_f64.ln() * DAYS_PER_YEAR).round() as i64;
        let w_now = 1.0_f64;
        let w_then = (-(half_life_days as f64) / DAYS_PER_YEAR).exp();
        assert!((w_then / w_now - 0.5).abs() < 1e-3);
    }
}

// ---------------------------------------------------------------------------
// Value score
// ---------------------------------------------------------------------------

#[cfg(test)]
mod value_score {
    fn value_score(ratio: f64) -> f64 {
        (50.0 + (1.0 - ratio) * 100.0).clamp(0.0, 100.0)
    }

    #[test]
    fn test_fair_value_scores_neutral() {
        assert!((value_score(1.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_monotone_decreasing_in_ratio() {
        let mut prev = value_score(0.0);
        for i in 1..200 {
            let next = value_score(i as f64 * 0.05);
            assert!(next <= prev);
            prev = next;
        }
    }

    #[test]
    fn test_bounded_for_pathological_ratios() {
        assert_eq!(value_score(0.0), 100.0);
        assert_eq!(value_score(f64::MAX), 0.0);
        assert!(value_score(0.3) <= 100.0);
        assert!(value_score(3.0) >= 0.0);
    }
}

// ---------------------------------------------------------------------------
// Momentum oscillator
// ---------------------------------------------------------------------------

#[cfg(test)]
mod oscillator {
    fn oscillator(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        }
    }

    #[test]
    fn test_zero_loss_reads_100_not_a_division_fault() {
        assert_eq!(oscillator(1.5, 0.0), 100.0);
        assert_eq!(oscillator(0.0, 0.0), 100.0);
    }

    #[test]
    fn test_balanced_gains_and_losses_read_50() {
        assert!((oscillator(1.0, 1.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounded_for_finite_inputs() {
        for &(g, l) in &[(0.0, 1.0), (1e-9, 1e9), (1e9, 1e-9), (3.7, 0.2)] {
            let v = oscillator(g, l);
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_timing_score_is_the_exact_inversion() {
        for &v in &[0.0f64, 12.5, 50.0, 87.5, 100.0] {
            let timing = 100.0 - v;
            assert!((timing + v - 100.0).abs() < 1e-12);
        }
    }
}

// ---------------------------------------------------------------------------
// Blend and signal ladder
// ---------------------------------------------------------------------------

#[cfg(test)]
mod blend_and_signal {
    #[derive(Debug, PartialEq)]
    enum Label {
        StrongBuy,
        Buy,
        Hold,
        Sell,
    }

    fn classify(final_score: f64) -> Label {
        if final_score > 70.0 {
            Label::StrongBuy
        } else if final_score > 60.0 {
            Label::Buy
        } else if final_score < 40.0 {
            Label::Sell
        } else {
            Label::Hold
        }
    }

    fn blend(value: f64, timing: f64) -> f64 {
        0.7 * value + 0.3 * timing
    }

    #[test]
    fn test_default_blend_is_seventy_thirty() {
        assert!((blend(100.0, 0.0) - 70.0).abs() < 1e-12);
        assert!((blend(0.0, 100.0) - 30.0).abs() < 1e-12);
        assert!((blend(80.0, 40.0) - 68.0).abs() < 1e-12);
    }

    #[test]
    fn test_strict_boundaries() {
        assert_eq!(classify(70.0), Label::Buy);
        assert_eq!(classify(70.01), Label::StrongBuy);
        assert_eq!(classify(60.0), Label::Hold);
        assert_eq!(classify(40.0), Label::Hold);
        assert_eq!(classify(39.99), Label::Sell);
    }

    #[test]
    fn test_margin_is_centered_on_fifty() {
        let final_score = blend(62.0, 31.0);
        let margin = final_score - 50.0;
        assert!((final_score - 52.7).abs() < 1e-12);
        assert!((margin - 2.7).abs() < 1e-12);
    }
}
