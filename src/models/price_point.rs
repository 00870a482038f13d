use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily close for one symbol.
///
/// Providers return these already normalized: ascending by date, one point
/// per trading day, rows with a missing close dropped at the source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}
