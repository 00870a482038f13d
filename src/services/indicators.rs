/// Momentum oscillator over daily closes.
///
/// Measures recent directional momentum by comparing average gains to
/// average losses over a trailing window. Values range from 0 to 100:
/// - Above 70: overbought (potential sell)
/// - Below 30: oversold (potential buy)
///
/// Calculation:
/// 1. Daily deltas between consecutive closes
/// 2. Split into gains (`max(delta, 0)`) and losses (`max(-delta, 0)`)
/// 3. Average gain / average loss = arithmetic mean over the trailing
///    `period` deltas (a simple rolling mean, not Wilder's smoothing)
/// 4. oscillator = 100 - 100 / (1 + avg_gain / avg_loss)
///
/// Returns a vector aligned with `closes`: `None` until `period` deltas
/// exist (the first defined value sits at index `period`), `Some` after.
/// A window with zero average loss reads as exactly 100.0 rather than
/// dividing by zero.
pub fn momentum_oscillator(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if closes.len() < 2 || period == 0 {
        return vec![None; closes.len()];
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    let gains: Vec<f64> = deltas.iter().map(|&d| d.max(0.0)).collect();
    let losses: Vec<f64> = deltas.iter().map(|&d| (-d).max(0.0)).collect();

    let mut result = vec![None; closes.len()];

    // The window of deltas ending at close index i is deltas[i-period..i].
    for i in period..closes.len() {
        let avg_gain = gains[i - period..i].iter().sum::<f64>() / period as f64;
        let avg_loss = losses[i - period..i].iter().sum::<f64>() / period as f64;

        let oscillator = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        };

        result[i] = Some(oscillator);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillator_alignment() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
        let osc = momentum_oscillator(&closes, 14);

        assert_eq!(osc.len(), closes.len());

        // First `period` indices are undefined
        for i in 0..14 {
            assert!(osc[i].is_none());
        }
        for i in 14..osc.len() {
            assert!(osc[i].is_some());
        }
    }

    #[test]
    fn test_oscillator_bounded() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + ((i as f64) * 1.7).sin() * 15.0)
            .collect();

        for value in momentum_oscillator(&closes, 14).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_oscillator_pure_uptrend_reads_100() {
        // No down days: average loss is zero, oscillator pegs at 100.
        let uptrend: Vec<f64> = (0..30).map(|i| 50.0 + i as f64).collect();
        let osc = momentum_oscillator(&uptrend, 14);

        let last = osc.last().and_then(|&v| v).unwrap();
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_oscillator_pure_downtrend_reads_0() {
        let downtrend: Vec<f64> = (0..30).map(|i| 80.0 - i as f64).collect();
        let osc = momentum_oscillator(&downtrend, 14);

        let last = osc.last().and_then(|&v| v).unwrap();
        assert!(last.abs() < 1e-9);
    }

    #[test]
    fn test_oscillator_short_input() {
        let closes = vec![100.0, 101.0, 102.0];
        let osc = momentum_oscillator(&closes, 14);
        assert!(osc.iter().all(|v| v.is_none()));

        assert!(momentum_oscillator(&[], 14).is_empty());
        assert!(momentum_oscillator(&[100.0], 14).iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_oscillator_known_window() {
        // 2 up-days of +2 and 2 down-days of -1 in every 4-delta window:
        // avg_gain = 1.0, avg_loss = 0.5, rs = 2, oscillator = 100 - 100/3.
        let closes = vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0, 14.0];
        let osc = momentum_oscillator(&closes, 4);

        let expected = 100.0 - 100.0 / 3.0;
        for value in osc.into_iter().skip(4).flatten().take(2) {
            assert!((value - expected).abs() < 1e-9);
        }
    }
}
