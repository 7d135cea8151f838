use crate::config::ScoringConfig;
use crate::error::AssessmentError;
use crate::pipeline::traits::{FeedbackComposer, SimilarityScorer, WordAligner};
use crate::scoring::multiplier;
use crate::types::{
    AssessmentInput, AssessmentOutput, ErrorType, MatchType, WordComparison, WordFeedbackItem,
};

/// Stateless assessment engine: alignment, multipliers, and coaching
/// feedback behind one entry point. Safe to share across threads.
pub struct PronunciationAssessor {
    config: ScoringConfig,
    similarity_scorer: Box<dyn SimilarityScorer>,
    word_aligner: Box<dyn WordAligner>,
    feedback_composer: Box<dyn FeedbackComposer>,
}

pub(crate) struct PronunciationAssessorParts {
    pub config: ScoringConfig,
    pub similarity_scorer: Box<dyn SimilarityScorer>,
    pub word_aligner: Box<dyn WordAligner>,
    pub feedback_composer: Box<dyn FeedbackComposer>,
}

struct ScoreSet {
    pronunciation: f64,
    accuracy: f64,
    fluency: f64,
    completeness: f64,
}

impl PronunciationAssessor {
    pub(crate) fn from_parts(parts: PronunciationAssessorParts) -> Self {
        Self {
            config: parts.config,
            similarity_scorer: parts.similarity_scorer,
            word_aligner: parts.word_aligner,
            feedback_composer: parts.feedback_composer,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn assess(&self, input: &AssessmentInput) -> Result<AssessmentOutput, AssessmentError> {
        validate_input(input)?;

        let expected: Vec<String> = input
            .reference_text
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let comparisons = self.word_aligner.align(
            &expected,
            &input.hypothesis,
            self.similarity_scorer.as_ref(),
            &self.config,
        );

        let scores = match &input.provider_scores {
            Some(provider) => ScoreSet {
                pronunciation: provider.pronunciation_score,
                accuracy: provider.accuracy_score,
                fluency: provider.fluency_score,
                completeness: provider.completeness_score,
            },
            None => synthesize_scores(input, &expected, &comparisons),
        };

        let detailed_feedback = match &input.provider_scores {
            Some(provider) if !provider.words.is_empty() => provider.words.clone(),
            _ => comparisons.iter().map(feedback_item_from_comparison).collect(),
        };

        let multipliers = multiplier::calculate(scores.pronunciation, &input.context);
        let word_feedback =
            self.feedback_composer
                .compose(&detailed_feedback, scores.pronunciation, &self.config);

        Ok(AssessmentOutput {
            rating: multipliers.rating,
            pronunciation_score: scores.pronunciation,
            accuracy_score: scores.accuracy,
            fluency_score: scores.fluency,
            completeness_score: scores.completeness,
            attack_damage: multipliers.attack_damage,
            defense_multiplier: multipliers.defense_multiplier,
            comparisons,
            detailed_feedback,
            word_feedback,
            calculation_breakdown: multipliers.breakdown,
        })
    }
}

/// Scores derived from the alignment when no external assessment provider
/// responded. Divisions by empty lists are guarded and yield 0.0.
fn synthesize_scores(
    input: &AssessmentInput,
    expected: &[String],
    comparisons: &[WordComparison],
) -> ScoreSet {
    let pronunciation = if comparisons.is_empty() {
        0.0
    } else {
        comparisons
            .iter()
            .map(|c| c.similarity as f64)
            .sum::<f64>()
            / comparisons.len() as f64
            * 100.0
    };

    let fluency = if input.hypothesis.is_empty() {
        0.0
    } else {
        input
            .hypothesis
            .iter()
            .map(|w| w.confidence as f64)
            .sum::<f64>()
            / input.hypothesis.len() as f64
            * 100.0
    };

    let completeness = if expected.is_empty() {
        // Nothing to complete without a reference.
        100.0
    } else {
        let missing = comparisons
            .iter()
            .filter(|c| c.match_type == MatchType::Missing)
            .count();
        (expected.len() - missing.min(expected.len())) as f64 / expected.len() as f64 * 100.0
    };

    ScoreSet {
        pronunciation,
        accuracy: pronunciation,
        fluency,
        completeness,
    }
}

fn feedback_item_from_comparison(comparison: &WordComparison) -> WordFeedbackItem {
    let (word, error_type) = match comparison.match_type {
        MatchType::Missing => (comparison.expected.clone(), ErrorType::Omission),
        MatchType::Extra => (comparison.word.clone(), ErrorType::Insertion),
        MatchType::Mismatch | MatchType::Partial => {
            (comparison.word.clone(), ErrorType::Mispronunciation)
        }
        MatchType::Exact | MatchType::Close | MatchType::NoReference => {
            (comparison.word.clone(), ErrorType::None)
        }
    };
    WordFeedbackItem {
        word,
        accuracy_score: comparison.similarity as f64 * 100.0,
        error_type,
        transliteration: String::new(),
    }
}

fn validate_input(input: &AssessmentInput) -> Result<(), AssessmentError> {
    for (index, word) in input.hypothesis.iter().enumerate() {
        let confidence = word.confidence as f64;
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(AssessmentError::invalid_input(format!(
                "hypothesis[{index}] '{}': confidence {confidence} outside [0, 1]",
                word.text
            )));
        }
        if !word.start_time.is_finite() || !word.end_time.is_finite() {
            return Err(AssessmentError::invalid_input(format!(
                "hypothesis[{index}] '{}': non-finite timing",
                word.text
            )));
        }
        if word.start_time < 0.0 || word.end_time < word.start_time {
            return Err(AssessmentError::invalid_input(format!(
                "hypothesis[{index}] '{}': timing interval [{}, {}) is invalid",
                word.text, word.start_time, word.end_time
            )));
        }
    }

    if let Some(provider) = &input.provider_scores {
        checked_score(provider.pronunciation_score, "pronunciation_score")?;
        checked_score(provider.accuracy_score, "accuracy_score")?;
        checked_score(provider.fluency_score, "fluency_score")?;
        checked_score(provider.completeness_score, "completeness_score")?;
        for (index, word) in provider.words.iter().enumerate() {
            if !word.accuracy_score.is_finite() || !(0.0..=100.0).contains(&word.accuracy_score) {
                return Err(AssessmentError::invalid_input(format!(
                    "provider word[{index}] '{}': accuracy {} outside [0, 100]",
                    word.word, word.accuracy_score
                )));
            }
        }
    }

    Ok(())
}

fn checked_score(value: f64, name: &str) -> Result<f64, AssessmentError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(AssessmentError::invalid_input(format!(
            "{name} {value} outside [0, 100]"
        )));
    }
    Ok(value)
}
