use thiserror::Error;

use crate::model::{ProfileError, StageError, SurveyError};
use crate::scoring::ScoreError;

/// Any failure raised while driving an assessment session.
///
/// Every variant is recoverable: the session is left exactly as it was before
/// the rejected operation.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Survey(#[from] SurveyError),
    #[error(transparent)]
    Stage(#[from] StageError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl AssessmentError {
    /// Text suitable for showing next to the input that caused the error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AssessmentError::Profile(ProfileError::EmptyName) => {
                "Please enter your name.".to_string()
            }
            AssessmentError::Profile(ProfileError::InvalidAge { .. }) => {
                "Please enter a valid age (number).".to_string()
            }
            other => other.to_string(),
        }
    }
}
