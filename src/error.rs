use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("invalid configuration while {context}: {message}")]
    Config {
        context: &'static str,
        message: String,
    },
}

impl AssessmentError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn config(context: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            context,
            message: message.into(),
        }
    }
}
