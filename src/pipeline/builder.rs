use crate::config::ScoringConfig;
use crate::error::AssessmentError;
use crate::pipeline::defaults::{CoachingFeedbackComposer, EditDistanceScorer, LcsWordAligner};
use crate::pipeline::runtime::{PronunciationAssessor, PronunciationAssessorParts};
use crate::pipeline::traits::{FeedbackComposer, SimilarityScorer, WordAligner};

pub struct PronunciationAssessorBuilder {
    config: ScoringConfig,
    similarity_scorer: Option<Box<dyn SimilarityScorer>>,
    word_aligner: Option<Box<dyn WordAligner>>,
    feedback_composer: Option<Box<dyn FeedbackComposer>>,
}

impl PronunciationAssessorBuilder {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            similarity_scorer: None,
            word_aligner: None,
            feedback_composer: None,
        }
    }

    pub fn with_similarity_scorer(mut self, scorer: Box<dyn SimilarityScorer>) -> Self {
        self.similarity_scorer = Some(scorer);
        self
    }

    pub fn with_word_aligner(mut self, aligner: Box<dyn WordAligner>) -> Self {
        self.word_aligner = Some(aligner);
        self
    }

    pub fn with_feedback_composer(mut self, composer: Box<dyn FeedbackComposer>) -> Self {
        self.feedback_composer = Some(composer);
        self
    }

    pub fn build(self) -> Result<PronunciationAssessor, AssessmentError> {
        self.config.validate()?;
        Ok(PronunciationAssessor::from_parts(
            PronunciationAssessorParts {
                config: self.config,
                similarity_scorer: self
                    .similarity_scorer
                    .unwrap_or_else(|| Box::new(EditDistanceScorer)),
                word_aligner: self.word_aligner.unwrap_or_else(|| Box::new(LcsWordAligner)),
                feedback_composer: self
                    .feedback_composer
                    .unwrap_or_else(|| Box::new(CoachingFeedbackComposer)),
            },
        ))
    }
}
