use focus_core::AssessmentError;
use focus_core::model::{
    AssessmentSession, ReactionSettings, ResultsReport, Stage, SurveyResponse, TrialPhase,
    UserProfile,
};
use focus_core::time::duration_from_secs;
use tracing::{debug, info};

use crate::Clock;
use crate::delay::DelaySampler;

/// Drives an `AssessmentSession` through its stages.
///
/// Owns the clock, the delay sampler and the reaction timing settings; the
/// session itself stays with the caller (one per UI session).
#[derive(Clone, Debug, Default)]
pub struct AssessmentService {
    clock: Clock,
    sampler: DelaySampler,
    settings: ReactionSettings,
}

impl AssessmentService {
    #[must_use]
    pub fn new(settings: ReactionSettings) -> Self {
        Self {
            clock: Clock::default_clock(),
            sampler: DelaySampler::Uniform,
            settings,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_sampler(mut self, sampler: DelaySampler) -> Self {
        self.sampler = sampler;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &ReactionSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// # Errors
    ///
    /// Returns `AssessmentError` for a blank name or when not in the intro stage.
    pub fn submit_name(
        &self,
        session: &mut AssessmentSession,
        raw: &str,
    ) -> Result<(), AssessmentError> {
        session
            .submit_name(raw)
            .inspect_err(|err| debug!(session = %session.id(), error = %err, "name rejected"))
    }

    /// Accept the age and move to the questionnaire.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError` for an invalid age or when called out of order.
    pub fn submit_age(
        &self,
        session: &mut AssessmentSession,
        raw: &str,
    ) -> Result<Stage, AssessmentError> {
        if let Err(err) = session.submit_age(raw) {
            debug!(session = %session.id(), error = %err, "age rejected");
            return Err(err);
        }
        let age = session.profile().map(UserProfile::age);
        info!(session = %session.id(), age, stage = ?session.stage(), "profile complete");
        Ok(session.stage())
    }

    /// # Errors
    ///
    /// Returns `AssessmentError` for an unknown question, a value above 4,
    /// or when not in the questionnaire stage.
    pub fn set_answer(
        &self,
        session: &mut AssessmentSession,
        index: usize,
        value: u8,
    ) -> Result<(), AssessmentError> {
        session.set_answer(index, value).inspect_err(|err| {
            debug!(session = %session.id(), index, value, error = %err, "answer rejected");
        })
    }

    /// # Errors
    ///
    /// Returns `AssessmentError` when not in the questionnaire stage.
    pub fn submit_survey(
        &self,
        session: &mut AssessmentSession,
    ) -> Result<SurveyResponse, AssessmentError> {
        let response = *session.submit_survey()?;
        info!(
            session = %session.id(),
            asrs_total = response.total(),
            stage = ?session.stage(),
            "questionnaire submitted"
        );
        Ok(response)
    }

    /// Arm the reaction trial with a fresh random delay.
    ///
    /// Pressing start again after the trial is armed changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError` when not in the reaction stage.
    pub fn start_reaction(
        &self,
        session: &mut AssessmentSession,
    ) -> Result<TrialPhase, AssessmentError> {
        if session.stage() == Stage::Reaction && session.trial().phase() != TrialPhase::Waiting {
            return Ok(session.trial().phase());
        }
        let delay_secs = self.sampler.sample(
            self.settings.min_delay_secs(),
            self.settings.max_delay_secs(),
        );
        let phase = session
            .start_trial(self.clock.now(), duration_from_secs(delay_secs))?
            .phase();
        info!(session = %session.id(), delay_secs, "reaction trial armed");
        Ok(phase)
    }

    /// Redraw tick: reveals the "go" signal once the delay has elapsed.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError` when not in the reaction stage.
    pub fn poll_reaction(
        &self,
        session: &mut AssessmentSession,
    ) -> Result<TrialPhase, AssessmentError> {
        let before = session.trial().phase();
        let after = session.poll_trial(self.clock.now())?.phase();
        if before != after {
            debug!(session = %session.id(), phase = ?after, "reaction signal shown");
        }
        Ok(after)
    }

    /// Register the user's click. Early clicks are ignored.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError` when not in the reaction stage.
    pub fn click_reaction(
        &self,
        session: &mut AssessmentSession,
    ) -> Result<TrialPhase, AssessmentError> {
        let trial = *session.click_trial(self.clock.now())?;
        let Some(reaction_seconds) = trial.reaction_seconds() else {
            debug!(session = %session.id(), phase = ?trial.phase(), "click ignored");
            return Ok(trial.phase());
        };
        info!(
            session = %session.id(),
            reaction_seconds,
            stage = ?session.stage(),
            "reaction measured"
        );
        // Logged here, once per run; `results` is re-read on every render.
        match session.results() {
            Ok(report) => info!(
                session = %session.id(),
                final_score = report.score.final_score,
                attention_span_seconds = report.score.attention_span_seconds,
                advisory = ?report.advisory,
                "score computed"
            ),
            Err(err) => debug!(session = %session.id(), error = %err, "score unavailable"),
        }
        Ok(trial.phase())
    }

    /// # Errors
    ///
    /// Returns `AssessmentError` before the results stage.
    pub fn results(&self, session: &AssessmentSession) -> Result<ResultsReport, AssessmentError> {
        let report = session.results()?;
        debug!(session = %session.id(), final_score = report.score.final_score, "results read");
        Ok(report)
    }

    pub fn restart(&self, session: &mut AssessmentSession) {
        let previous = session.id();
        session.restart();
        info!(previous = %previous, session = %session.id(), "session restarted");
    }
}
