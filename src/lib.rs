pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod types;

pub use config::ScoringConfig;
pub use error::AssessmentError;
pub use pipeline::builder::PronunciationAssessorBuilder;
pub use pipeline::runtime::PronunciationAssessor;
pub use pipeline::traits::{FeedbackComposer, SimilarityScorer, WordAligner};
pub use scoring::multiplier::{CalculationBreakdown, MultiplierResult};
pub use types::{
    AssessmentContext, AssessmentInput, AssessmentOutput, ErrorType, Interaction, ItemRarity,
    MatchType, ProviderScores, Rating, WordComparison, WordFeedbackItem, WordToken,
};
