use focus_core::AssessmentError;
use focus_core::model::StageError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The user typed or picked something invalid; the text says what.
    Input(String),
    /// The action does not belong to the current stage (stale click, double submit).
    OutOfOrder,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ViewError::Input(message) => message,
            ViewError::OutOfOrder => "That step is not available right now.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<AssessmentError> for ViewError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::Profile(_) | AssessmentError::Survey(_) => {
                ViewError::Input(err.user_message())
            }
            AssessmentError::Stage(StageError::WrongStage { .. } | StageError::NameRequired) => {
                ViewError::OutOfOrder
            }
            _ => ViewError::Unknown,
        }
    }
}
