use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SurveyError {
    #[error("question index {index} is out of range (0..{QUESTION_COUNT})")]
    QuestionOutOfRange { index: usize },

    #[error("invalid answer value: {0} (expected 0-4)")]
    InvalidAnswer(u8),

    #[error("expected {QUESTION_COUNT} answers, got {len}")]
    WrongLength { len: usize },
}

//
// ─── QUESTIONS ────────────────────────────────────────────────────────────────
//

/// Number of items on the ASRS v1.1 screener.
pub const QUESTION_COUNT: usize = 6;

/// Part A of the ASRS v1.1 screener, in presentation order.
pub const ASRS_QUESTIONS: [&str; QUESTION_COUNT] = [
    "How often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?",
    "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
    "How often do you have problems remembering appointments or obligations?",
    "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
    "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
    "How often do you feel overly active and compelled to do things, like you were driven by a motor?",
];

pub const SURVEY_INSTRUCTIONS: &str = "Please answer the following questions based on how you've felt and conducted yourself over the past 6 months.";

pub const SCALE_LEGEND: &str =
    "Use the following scale: 0 = Never, 1 = Rarely, 2 = Sometimes, 3 = Often, 4 = Very Often";

//
// ─── FREQUENCY ────────────────────────────────────────────────────────────────
//

/// Five-point symptom frequency scale used by every question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Frequency {
    #[default]
    Never,
    Rarely,
    Sometimes,
    Often,
    VeryOften,
}

impl Frequency {
    pub const MAX: u8 = 4;

    /// Converts a slider value (0-4) to a `Frequency`.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::InvalidAnswer` if the value is above 4.
    pub fn from_u8(value: u8) -> Result<Self, SurveyError> {
        match value {
            0 => Ok(Self::Never),
            1 => Ok(Self::Rarely),
            2 => Ok(Self::Sometimes),
            3 => Ok(Self::Often),
            4 => Ok(Self::VeryOften),
            _ => Err(SurveyError::InvalidAnswer(value)),
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Frequency::Never => 0,
            Frequency::Rarely => 1,
            Frequency::Sometimes => 2,
            Frequency::Often => 3,
            Frequency::VeryOften => 4,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Never => "Never",
            Frequency::Rarely => "Rarely",
            Frequency::Sometimes => "Sometimes",
            Frequency::Often => "Often",
            Frequency::VeryOften => "Very Often",
        }
    }
}

//
// ─── DRAFT & RESPONSE ─────────────────────────────────────────────────────────
//

/// Slider positions while the questionnaire is on screen.
///
/// Unanswered items stay at `Frequency::Never`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyDraft {
    answers: [Frequency; QUESTION_COUNT],
}

impl SurveyDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the slider for one question.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::QuestionOutOfRange` or `SurveyError::InvalidAnswer`;
    /// the draft is unchanged in both cases.
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), SurveyError> {
        let answer = Frequency::from_u8(value)?;
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(SurveyError::QuestionOutOfRange { index })?;
        *slot = answer;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Frequency> {
        self.answers.get(index).copied()
    }

    #[must_use]
    pub fn answers(&self) -> &[Frequency; QUESTION_COUNT] {
        &self.answers
    }

    /// Snapshot the current slider values.
    #[must_use]
    pub fn submit(&self) -> SurveyResponse {
        SurveyResponse {
            answers: self.answers,
        }
    }
}

/// Submitted questionnaire answers. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyResponse {
    answers: [Frequency; QUESTION_COUNT],
}

impl SurveyResponse {
    /// Build a response from raw 0-4 values.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::WrongLength` unless exactly six values are given,
    /// or `SurveyError::InvalidAnswer` for a value above 4.
    pub fn from_values(values: &[u8]) -> Result<Self, SurveyError> {
        if values.len() != QUESTION_COUNT {
            return Err(SurveyError::WrongLength { len: values.len() });
        }
        let mut draft = SurveyDraft::new();
        for (index, value) in values.iter().enumerate() {
            draft.set(index, *value)?;
        }
        Ok(draft.submit())
    }

    #[must_use]
    pub fn answers(&self) -> &[Frequency; QUESTION_COUNT] {
        &self.answers
    }

    /// Sum of all answers, 0..=24.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.answers.iter().map(|answer| u32::from(answer.value())).sum()
    }
}
