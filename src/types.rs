use serde::{Deserialize, Serialize};

use crate::scoring::multiplier::CalculationBreakdown;

/// One transcribed word from the external recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordToken {
    pub text: String,
    /// Recognizer confidence in [0, 1].
    pub confidence: f32,
    /// Second interval is [start_time, end_time), i.e. start inclusive/end exclusive.
    pub start_time: f64,
    /// Second interval is [start_time, end_time), i.e. start inclusive/end exclusive.
    pub end_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Close,
    Partial,
    Mismatch,
    Missing,
    Extra,
    NoReference,
}

/// One aligned word pair produced by the aligner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordComparison {
    /// Transcribed word; empty for `Missing` entries.
    pub word: String,
    pub confidence: f32,
    /// Reference word; empty for `Extra` and `NoReference` entries.
    pub expected: String,
    pub match_type: MatchType,
    /// Similarity score in [0, 1].
    pub similarity: f32,
    pub start_time: f64,
    pub end_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorType {
    #[default]
    None,
    Mispronunciation,
    Omission,
    Insertion,
    UnexpectedBreak,
    MissingBreak,
    Monotone,
}

/// Per-word assessment detail, supplied by the external provider or
/// synthesized from the alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFeedbackItem {
    pub word: String,
    /// Accuracy score in [0, 100].
    pub accuracy_score: f64,
    #[serde(default)]
    pub error_type: ErrorType,
    /// Romanization for display; empty when unavailable.
    #[serde(default)]
    pub transliteration: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemRarity {
    Regular,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interaction {
    Attack,
    Defense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rating {
    Excellent,
    Good,
    Okay,
    NeedsImprovement,
}

/// Game-state scalars attached to one assessment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentContext {
    /// Vocabulary item difficulty tier; valid range 1..=5.
    pub complexity: u8,
    pub item_rarity: ItemRarity,
    pub interaction: Interaction,
    pub was_revealed: bool,
}

/// Scores from the external pronunciation-assessment provider, passed
/// through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderScores {
    pub pronunciation_score: f64,
    pub accuracy_score: f64,
    pub fluency_score: f64,
    pub completeness_score: f64,
    #[serde(default)]
    pub words: Vec<WordFeedbackItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Expected phrase; empty means "no ground truth" pass-through mode.
    pub reference_text: String,
    pub hypothesis: Vec<WordToken>,
    pub provider_scores: Option<ProviderScores>,
    pub context: AssessmentContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutput {
    pub rating: Rating,
    pub pronunciation_score: f64,
    pub accuracy_score: f64,
    pub fluency_score: f64,
    pub completeness_score: f64,
    pub attack_damage: f64,
    pub defense_multiplier: f64,
    pub comparisons: Vec<WordComparison>,
    pub detailed_feedback: Vec<WordFeedbackItem>,
    pub word_feedback: String,
    pub calculation_breakdown: CalculationBreakdown,
}
