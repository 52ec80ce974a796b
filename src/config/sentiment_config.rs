//! Sentiment scoring thresholds.
//!
//! These are tuned constants of the scoring collaborator, not operator
//! knobs, so unlike every other group they carry no environment
//! coupling.

use serde::Serialize;

/// Sentiment threshold configuration
#[derive(Debug, Clone, Serialize)]
pub struct SentimentConfig {
    /// Compound score at or above which a text counts as positive.
    pub positive_threshold: f64,
    /// Compound score at or below which a text counts as negative.
    pub negative_threshold: f64,
    /// Scores with confidence below this are ignored.
    pub min_confidence_score: f64,
    /// Texts longer than this are truncated before analysis.
    pub max_text_length: usize,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.05,
            negative_threshold: -0.05,
            min_confidence_score: 0.3,
            max_text_length: 1000,
        }
    }
}
