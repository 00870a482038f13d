use crate::models::Signal;

/// Blend weights for the value and timing components. Must sum to 1.0;
/// applied as given, not renormalized.
#[derive(Debug, Clone, Copy)]
pub struct BlendWeights {
    pub value: f64,
    pub timing: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            value: 0.7,
            timing: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Blend {
    pub final_score: f64,
    pub signal: Signal,
    /// final_score - 50.
    pub margin: f64,
}

/// Weighted blend of the two component scores plus the signal label.
/// Pure; no side effects.
pub fn combine(value_score: f64, timing_score: f64, weights: BlendWeights) -> Blend {
    let final_score = value_score * weights.value + timing_score * weights.timing;

    Blend {
        final_score,
        signal: classify(final_score),
        margin: final_score - 50.0,
    }
}

/// Threshold ladder for the signal label. Evaluated in order, first match
/// wins; the comparisons are strict, so exactly 70.0 is a BUY and exactly
/// 60.0 or 40.0 is a HOLD.
pub fn classify(final_score: f64) -> Signal {
    if final_score > 70.0 {
        Signal::StrongBuy
    } else if final_score > 60.0 {
        Signal::Buy
    } else if final_score < 40.0 {
        Signal::Sell
    } else {
        Signal::Hold
    }
}
