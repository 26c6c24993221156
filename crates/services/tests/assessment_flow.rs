use std::io;
use std::sync::{Arc, Mutex};

use chrono::Duration;
use focus_core::AssessmentError;
use focus_core::model::{
    AssessmentSession, ProfileError, ReactionSettings, ReactionTrial, Stage, TrialPhase,
};
use focus_core::scoring::Advisory;
use focus_core::time::fixed_now;
use services::{AssessmentService, Clock, DelaySampler};
use tracing_subscriber::fmt::MakeWriter;

fn service_at(offset_ms: i64) -> AssessmentService {
    AssessmentService::new(ReactionSettings::default())
        .with_sampler(DelaySampler::Fixed(3.0))
        .with_clock(Clock::fixed(fixed_now() + Duration::milliseconds(offset_ms)))
}

fn through_survey(answers: [u8; 6]) -> AssessmentSession {
    let service = service_at(0);
    let mut session = AssessmentSession::new();
    service.submit_name(&mut session, "Ada").unwrap();
    service.submit_age(&mut session, "36").unwrap();
    for (index, value) in answers.into_iter().enumerate() {
        service.set_answer(&mut session, index, value).unwrap();
    }
    service.submit_survey(&mut session).unwrap();
    session
}

#[test]
fn full_run_scores_midpoint() {
    let mut session = through_survey([2; 6]);
    assert_eq!(session.stage(), Stage::Reaction);

    service_at(0).start_reaction(&mut session).unwrap();
    assert_eq!(
        session.trial().armed_at(),
        Some(fixed_now() + Duration::seconds(3))
    );

    assert_eq!(
        service_at(3_001).poll_reaction(&mut session).unwrap(),
        TrialPhase::ClickNow
    );
    assert_eq!(
        service_at(3_251).click_reaction(&mut session).unwrap(),
        TrialPhase::Done
    );
    assert_eq!(session.stage(), Stage::Results);

    let report = service_at(4_000).results(&session).unwrap();
    assert_eq!(report.score.asrs_total, 12);
    assert_eq!(report.score.final_score, 5.0);
    assert_eq!(report.score.attention_span_seconds, 15);
    assert_eq!(report.advisory, Advisory::Average);
    assert_eq!(format!("{:.3}", report.reaction_seconds), "0.250");
}

#[test]
fn intro_never_advances_on_bad_input() {
    let service = service_at(0);
    let mut session = AssessmentSession::new();

    assert_eq!(
        service.submit_name(&mut session, "").unwrap_err(),
        AssessmentError::Profile(ProfileError::EmptyName)
    );
    service.submit_name(&mut session, "Ada").unwrap();
    for raw in ["", "abc", "4.5", "-1", "0"] {
        assert!(service.submit_age(&mut session, raw).is_err(), "{raw:?}");
        assert_eq!(session.stage(), Stage::Intro);
        assert!(session.profile().is_none());
    }
    assert_eq!(service.submit_age(&mut session, "29").unwrap(), Stage::Asrs);
}

#[test]
fn polling_reveals_exactly_once() {
    let mut session = through_survey([0; 6]);
    service_at(0).start_reaction(&mut session).unwrap();

    let mut transitions = 0;
    let mut last = session.trial().phase();
    for offset_ms in (0..=6_000).step_by(50) {
        let phase = service_at(offset_ms).poll_reaction(&mut session).unwrap();
        if phase != last {
            transitions += 1;
            assert_eq!(phase, TrialPhase::ClickNow);
            assert_eq!(offset_ms, 3_050, "first poll after the armed instant");
        }
        last = phase;
    }
    assert_eq!(transitions, 1);
}

#[test]
fn early_click_and_repeated_start_change_nothing() {
    let mut session = through_survey([0; 6]);
    service_at(0).start_reaction(&mut session).unwrap();
    let armed = *session.trial();

    assert_eq!(
        service_at(1_000).click_reaction(&mut session).unwrap(),
        TrialPhase::GetReady
    );
    assert_eq!(
        service_at(1_500).start_reaction(&mut session).unwrap(),
        TrialPhase::GetReady
    );
    assert_eq!(*session.trial(), armed);
    assert_eq!(session.stage(), Stage::Reaction);
}

#[test]
fn restart_discards_the_whole_session() {
    let mut session = through_survey([1; 6]);
    let service = service_at(0);
    service.start_reaction(&mut session).unwrap();

    service.restart(&mut session);

    assert_eq!(session.stage(), Stage::Intro);
    assert!(session.profile().is_none());
    assert!(session.survey().is_none());
    assert_eq!(*session.trial(), ReactionTrial::Waiting);
}

#[test]
fn results_are_unavailable_before_the_trial_finishes() {
    let session = through_survey([0; 6]);
    assert!(service_at(0).results(&session).is_err());
}

#[test]
fn uniform_sampler_arms_within_window() {
    let mut session = through_survey([0; 6]);
    let service =
        AssessmentService::new(ReactionSettings::default()).with_clock(Clock::fixed(fixed_now()));
    service.start_reaction(&mut session).unwrap();

    let armed_at = session.trial().armed_at().unwrap();
    let delay = armed_at - fixed_now();
    assert!(delay >= Duration::seconds(2), "{delay:?}");
    assert!(delay <= Duration::seconds(5), "{delay:?}");
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn count(&self, needle: &str) -> usize {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).matches(needle).count()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn score_is_logged_once_per_run_not_per_read() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut session = through_survey([2; 6]);
        service_at(0).start_reaction(&mut session).unwrap();
        service_at(3_001).poll_reaction(&mut session).unwrap();
        service_at(3_251).click_reaction(&mut session).unwrap();
        for _ in 0..5 {
            service_at(4_000).results(&session).unwrap();
        }
    });

    assert_eq!(logs.count("score computed"), 1);
    assert_eq!(logs.count("reaction measured"), 1);
}
