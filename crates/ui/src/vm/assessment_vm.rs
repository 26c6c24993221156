use focus_core::model::{
    ASRS_QUESTIONS, AssessmentSession, IntroStep, Stage, TrialPhase,
};
use services::AssessmentService;

use crate::views::ViewError;
use crate::vm::ResultsVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    SubmitName(String),
    SubmitAge(String),
    SetAnswer { index: usize, value: u8 },
    SubmitSurvey,
    StartReaction,
    PollReaction,
    ClickReaction,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRowVm {
    pub index: usize,
    pub text: &'static str,
    pub value: u8,
    pub value_label: &'static str,
}

/// What the reaction stage shows for the current trial phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReactionPromptVm {
    pub message: Option<&'static str>,
    pub button: Option<&'static str>,
    pub go: bool,
}

impl ReactionPromptVm {
    #[must_use]
    pub fn for_phase(phase: TrialPhase) -> Self {
        match phase {
            TrialPhase::Waiting => Self {
                message: None,
                button: Some("Start Reaction Time Test"),
                go: false,
            },
            TrialPhase::GetReady => Self {
                message: Some(
                    "Get ready... The button will turn green soon! Remember we are checking your Attention span!",
                ),
                button: None,
                go: false,
            },
            TrialPhase::ClickNow => Self {
                message: None,
                button: Some("Click Now!"),
                go: true,
            },
            TrialPhase::Done => Self {
                message: Some("Test completed!"),
                button: None,
                go: false,
            },
        }
    }
}

/// UI-side owner of one assessment session.
///
/// Keeps the last rejected input's message so the view can show it in place.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AssessmentVm {
    session: AssessmentSession,
    error: Option<ViewError>,
}

impl AssessmentVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_session(session: AssessmentSession) -> Self {
        Self {
            session,
            error: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.session.stage()
    }

    #[must_use]
    pub fn intro_step(&self) -> Option<IntroStep> {
        self.session.intro_step()
    }

    #[must_use]
    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn question_rows(&self) -> Vec<QuestionRowVm> {
        let answers = self.session.survey_draft().answers();
        ASRS_QUESTIONS
            .iter()
            .zip(answers.iter())
            .enumerate()
            .map(|(index, (text, answer))| QuestionRowVm {
                index,
                text,
                value: answer.value(),
                value_label: answer.label(),
            })
            .collect()
    }

    #[must_use]
    pub fn reaction_phase(&self) -> TrialPhase {
        self.session.trial().phase()
    }

    #[must_use]
    pub fn reaction_prompt(&self) -> ReactionPromptVm {
        ReactionPromptVm::for_phase(self.reaction_phase())
    }

    /// # Errors
    ///
    /// Returns `ViewError` when the session is not at the results stage.
    pub fn results(&self, service: &AssessmentService) -> Result<ResultsVm, ViewError> {
        let report = service.results(&self.session)?;
        Ok(ResultsVm::from(&report))
    }

    /// Apply one user intent. A rejected intent leaves the session untouched
    /// and records the error for display.
    ///
    /// # Errors
    ///
    /// Returns the same `ViewError` that is recorded on the view model.
    pub fn dispatch(
        &mut self,
        service: &AssessmentService,
        intent: AssessmentIntent,
    ) -> Result<(), ViewError> {
        let session = &mut self.session;
        let result = match intent {
            AssessmentIntent::SubmitName(raw) => service.submit_name(session, &raw),
            AssessmentIntent::SubmitAge(raw) => service.submit_age(session, &raw).map(|_| ()),
            AssessmentIntent::SetAnswer { index, value } => {
                service.set_answer(session, index, value)
            }
            AssessmentIntent::SubmitSurvey => service.submit_survey(session).map(|_| ()),
            AssessmentIntent::StartReaction => service.start_reaction(session).map(|_| ()),
            AssessmentIntent::PollReaction => service.poll_reaction(session).map(|_| ()),
            AssessmentIntent::ClickReaction => service.click_reaction(session).map(|_| ()),
            AssessmentIntent::Restart => {
                service.restart(session);
                Ok(())
            }
        };

        match result {
            Ok(()) => {
                self.error = None;
                Ok(())
            }
            Err(err) => {
                let err = ViewError::from(err);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}
