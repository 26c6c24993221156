use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::error::AssessmentError;
use crate::model::profile::{parse_age, parse_name};
use crate::model::{
    ReactionTrial, SessionId, SurveyDraft, SurveyResponse, TrialEvent, UserProfile,
};
use crate::scoring::{Advisory, ScoreResult, score};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StageError {
    #[error("operation requires stage {expected:?}, session is at {actual:?}")]
    WrongStage { expected: Stage, actual: Stage },

    #[error("name must be entered before age")]
    NameRequired,

    #[error("no reaction time has been recorded")]
    Incomplete,
}

/// Top-level position in the assessment. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    #[default]
    Intro,
    Asrs,
    Reaction,
    Results,
}

/// Which intro question is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroStep {
    Name,
    Age,
}

/// Render-ready results for the final stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsReport {
    pub profile: UserProfile,
    pub score: ScoreResult,
    pub reaction_seconds: f64,
    pub advisory: Advisory,
}

/// All state for one user's run through the assessment.
///
/// Each operation checks the current stage first and mutates nothing when it
/// fails, so a rejected input can simply be shown and retried.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSession {
    id: SessionId,
    stage: Stage,
    pending_name: Option<String>,
    profile: Option<UserProfile>,
    survey_draft: SurveyDraft,
    survey: Option<SurveyResponse>,
    trial: ReactionTrial,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            stage: Stage::Intro,
            pending_name: None,
            profile: None,
            survey_draft: SurveyDraft::new(),
            survey: None,
            trial: ReactionTrial::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The intro question awaiting input, or `None` outside the intro stage.
    #[must_use]
    pub fn intro_step(&self) -> Option<IntroStep> {
        if self.stage != Stage::Intro {
            return None;
        }
        Some(if self.pending_name.is_some() {
            IntroStep::Age
        } else {
            IntroStep::Name
        })
    }

    #[must_use]
    pub fn pending_name(&self) -> Option<&str> {
        self.pending_name.as_deref()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn survey_draft(&self) -> &SurveyDraft {
        &self.survey_draft
    }

    #[must_use]
    pub fn survey(&self) -> Option<&SurveyResponse> {
        self.survey.as_ref()
    }

    #[must_use]
    pub fn trial(&self) -> &ReactionTrial {
        &self.trial
    }

    #[must_use]
    pub fn reaction_seconds(&self) -> Option<f64> {
        self.trial.reaction_seconds()
    }

    fn require(&self, expected: Stage) -> Result<(), StageError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(StageError::WrongStage {
                expected,
                actual: self.stage,
            })
        }
    }

    //
    // ─── INTRO ───────────────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `StageError::WrongStage` outside the intro stage and
    /// `ProfileError::EmptyName` for a blank name.
    pub fn submit_name(&mut self, raw: &str) -> Result<(), AssessmentError> {
        self.require(Stage::Intro)?;
        let name = parse_name(raw)?;
        self.pending_name = Some(name);
        Ok(())
    }

    /// Completes the profile and moves to the questionnaire.
    ///
    /// # Errors
    ///
    /// Returns `StageError::NameRequired` before a name was accepted and
    /// `ProfileError::InvalidAge` when `raw` is not a positive integer.
    pub fn submit_age(&mut self, raw: &str) -> Result<&UserProfile, AssessmentError> {
        self.require(Stage::Intro)?;
        let Some(name) = self.pending_name.as_ref() else {
            return Err(StageError::NameRequired.into());
        };
        let age = parse_age(raw)?;
        let profile = UserProfile::from_parts(name.clone(), age);
        self.pending_name = None;
        self.stage = Stage::Asrs;
        Ok(self.profile.insert(profile))
    }

    //
    // ─── QUESTIONNAIRE ───────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `StageError::WrongStage` outside the questionnaire and
    /// `SurveyError` for an unknown question or a value above 4.
    pub fn set_answer(&mut self, index: usize, value: u8) -> Result<(), AssessmentError> {
        self.require(Stage::Asrs)?;
        self.survey_draft.set(index, value)?;
        Ok(())
    }

    /// Freezes the current answers and moves to the reaction test.
    ///
    /// # Errors
    ///
    /// Returns `StageError::WrongStage` outside the questionnaire.
    pub fn submit_survey(&mut self) -> Result<&SurveyResponse, AssessmentError> {
        self.require(Stage::Asrs)?;
        self.stage = Stage::Reaction;
        Ok(self.survey.insert(self.survey_draft.submit()))
    }

    //
    // ─── REACTION ────────────────────────────────────────────────────────────
    //

    fn apply_trial_event(
        &mut self,
        now: DateTime<Utc>,
        event: TrialEvent,
    ) -> Result<&ReactionTrial, AssessmentError> {
        self.require(Stage::Reaction)?;
        self.trial = self.trial.transition(now, event);
        if self.trial.is_done() {
            self.stage = Stage::Results;
        }
        Ok(&self.trial)
    }

    /// # Errors
    ///
    /// Returns `StageError::WrongStage` outside the reaction stage.
    pub fn start_trial(
        &mut self,
        now: DateTime<Utc>,
        delay: Duration,
    ) -> Result<&ReactionTrial, AssessmentError> {
        self.apply_trial_event(now, TrialEvent::Start { delay })
    }

    /// # Errors
    ///
    /// Returns `StageError::WrongStage` outside the reaction stage.
    pub fn poll_trial(&mut self, now: DateTime<Utc>) -> Result<&ReactionTrial, AssessmentError> {
        self.apply_trial_event(now, TrialEvent::Poll)
    }

    /// Records the click; a measured trial moves the session to results.
    ///
    /// # Errors
    ///
    /// Returns `StageError::WrongStage` outside the reaction stage.
    pub fn click_trial(&mut self, now: DateTime<Utc>) -> Result<&ReactionTrial, AssessmentError> {
        self.apply_trial_event(now, TrialEvent::Click)
    }

    //
    // ─── RESULTS ─────────────────────────────────────────────────────────────
    //

    /// Recompute the score from the stored answers and reaction time.
    ///
    /// # Errors
    ///
    /// Returns `StageError::WrongStage` before the results stage and
    /// `StageError::Incomplete` if any input is missing.
    pub fn results(&self) -> Result<ResultsReport, AssessmentError> {
        self.require(Stage::Results)?;
        let (Some(profile), Some(survey), Some(reaction_seconds)) =
            (self.profile.as_ref(), self.survey.as_ref(), self.reaction_seconds())
        else {
            return Err(StageError::Incomplete.into());
        };
        let score = score(survey, reaction_seconds)?;
        Ok(ResultsReport {
            profile: profile.clone(),
            score,
            reaction_seconds,
            advisory: score.advisory(),
        })
    }

    /// Discard everything and start over at the intro stage.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}
