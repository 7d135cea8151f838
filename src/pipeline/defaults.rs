use crate::alignment::compare::align_words;
use crate::alignment::similarity::edit_similarity;
use crate::config::ScoringConfig;
use crate::pipeline::traits::{FeedbackComposer, SimilarityScorer, WordAligner};
use crate::scoring::feedback::compose_feedback;
use crate::types::{WordComparison, WordFeedbackItem, WordToken};

pub struct EditDistanceScorer;

impl SimilarityScorer for EditDistanceScorer {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        edit_similarity(a, b)
    }
}

pub struct LcsWordAligner;

impl WordAligner for LcsWordAligner {
    fn align(
        &self,
        expected: &[String],
        hypothesis: &[WordToken],
        scorer: &dyn SimilarityScorer,
        config: &ScoringConfig,
    ) -> Vec<WordComparison> {
        align_words(
            expected,
            hypothesis,
            |a, b| scorer.similarity(a, b),
            config.close_similarity_threshold,
            config.partial_similarity_threshold,
        )
    }
}

pub struct CoachingFeedbackComposer;

impl FeedbackComposer for CoachingFeedbackComposer {
    fn compose(
        &self,
        words: &[WordFeedbackItem],
        aggregate_score: f64,
        config: &ScoringConfig,
    ) -> String {
        compose_feedback(
            words,
            aggregate_score,
            config.focus_accuracy_threshold,
            config.max_focus_words,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchType;

    #[test]
    fn edit_distance_scorer_delegates() {
        let scorer = EditDistanceScorer;
        assert_eq!(scorer.similarity("ไหม", "ไม"), edit_similarity("ไหม", "ไม"));
        assert_eq!(scorer.similarity("a", "a"), 1.0);
    }

    #[test]
    fn lcs_word_aligner_delegates() {
        let aligner = LcsWordAligner;
        let expected = vec!["สวัสดี".to_string()];
        let hypothesis = vec![WordToken {
            text: "สวัสดี".to_string(),
            confidence: 0.9,
            start_time: 0.0,
            end_time: 0.5,
        }];
        let config = ScoringConfig::default();
        let comparisons = aligner.align(&expected, &hypothesis, &EditDistanceScorer, &config);
        assert_eq!(comparisons.len(), 1);
        assert_eq!(comparisons[0].match_type, MatchType::Exact);
    }

    #[test]
    fn coaching_feedback_composer_delegates() {
        let composer = CoachingFeedbackComposer;
        let config = ScoringConfig::default();
        let text = composer.compose(&[], 95.0, &config);
        let expected = compose_feedback(
            &[],
            95.0,
            config.focus_accuracy_threshold,
            config.max_focus_words,
        );
        assert_eq!(text, expected);
        assert!(!text.is_empty());
    }
}
