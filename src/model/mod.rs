pub mod narrative;
pub mod outcome;
pub mod scores;
pub mod thresholds;
