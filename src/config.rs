use crate::error::AssessmentError;

/// Tunable thresholds for alignment classification and feedback selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Replace-span similarity at or above this classifies as `Close`.
    pub close_similarity_threshold: f64,
    /// Replace-span similarity at or above this (but below close) classifies
    /// as `Partial`; anything lower is `Mismatch`.
    pub partial_similarity_threshold: f64,
    /// Per-word accuracy below this marks a word as needing focus.
    pub focus_accuracy_threshold: f64,
    /// Maximum number of focus words called out in the feedback text.
    pub max_focus_words: usize,
}

impl ScoringConfig {
    pub const DEFAULT_CLOSE_SIMILARITY_THRESHOLD: f64 = 0.8;
    pub const DEFAULT_PARTIAL_SIMILARITY_THRESHOLD: f64 = 0.5;
    pub const DEFAULT_FOCUS_ACCURACY_THRESHOLD: f64 = 80.0;
    pub const DEFAULT_MAX_FOCUS_WORDS: usize = 3;

    pub(crate) fn validate(&self) -> Result<(), AssessmentError> {
        if !self.close_similarity_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.close_similarity_threshold)
        {
            return Err(AssessmentError::config(
                "validating scoring config",
                format!(
                    "close_similarity_threshold must be in [0, 1], got {}",
                    self.close_similarity_threshold
                ),
            ));
        }
        if !self.partial_similarity_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.partial_similarity_threshold)
        {
            return Err(AssessmentError::config(
                "validating scoring config",
                format!(
                    "partial_similarity_threshold must be in [0, 1], got {}",
                    self.partial_similarity_threshold
                ),
            ));
        }
        if self.partial_similarity_threshold > self.close_similarity_threshold {
            return Err(AssessmentError::config(
                "validating scoring config",
                format!(
                    "partial_similarity_threshold ({}) must not exceed close_similarity_threshold ({})",
                    self.partial_similarity_threshold, self.close_similarity_threshold
                ),
            ));
        }
        if !self.focus_accuracy_threshold.is_finite()
            || !(0.0..=100.0).contains(&self.focus_accuracy_threshold)
        {
            return Err(AssessmentError::config(
                "validating scoring config",
                format!(
                    "focus_accuracy_threshold must be in [0, 100], got {}",
                    self.focus_accuracy_threshold
                ),
            ));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            close_similarity_threshold: Self::DEFAULT_CLOSE_SIMILARITY_THRESHOLD,
            partial_similarity_threshold: Self::DEFAULT_PARTIAL_SIMILARITY_THRESHOLD,
            focus_accuracy_threshold: Self::DEFAULT_FOCUS_ACCURACY_THRESHOLD,
            max_focus_words: Self::DEFAULT_MAX_FOCUS_WORDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_config_default() {
        let config = ScoringConfig::default();
        assert_eq!(config.close_similarity_threshold, 0.8);
        assert_eq!(config.partial_similarity_threshold, 0.5);
        assert_eq!(config.focus_accuracy_threshold, 80.0);
        assert_eq!(config.max_focus_words, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_thresholds() {
        let config = ScoringConfig {
            close_similarity_threshold: 1.4,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ScoringConfig {
            focus_accuracy_threshold: f64::NAN,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_similarity_bands() {
        let config = ScoringConfig {
            close_similarity_threshold: 0.4,
            partial_similarity_threshold: 0.6,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
