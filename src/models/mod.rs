mod price_point;
mod score;

pub use price_point::PricePoint;
pub use score::{AnalysisFailure, ScoreRecord, ScoreSource, ScoresResponse, Signal};
