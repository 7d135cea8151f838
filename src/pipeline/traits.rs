use crate::config::ScoringConfig;
use crate::types::{WordComparison, WordFeedbackItem, WordToken};

pub trait SimilarityScorer: Send + Sync {
    /// Similarity between two word tokens in [0, 1]; must be symmetric.
    fn similarity(&self, a: &str, b: &str) -> f64;
}

pub trait WordAligner: Send + Sync {
    fn align(
        &self,
        expected: &[String],
        hypothesis: &[WordToken],
        scorer: &dyn SimilarityScorer,
        config: &ScoringConfig,
    ) -> Vec<WordComparison>;
}

pub trait FeedbackComposer: Send + Sync {
    fn compose(
        &self,
        words: &[WordFeedbackItem],
        aggregate_score: f64,
        config: &ScoringConfig,
    ) -> String;
}
