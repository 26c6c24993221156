use chrono::{DateTime, Duration, Utc};

use crate::time::seconds_between;

/// Coarse state of a reaction trial, for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPhase {
    Waiting,
    GetReady,
    ClickNow,
    Done,
}

/// Inputs that can move a trial forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialEvent {
    /// The user pressed "start"; `delay` is the randomized wait before "go".
    Start { delay: Duration },
    /// A redraw tick.
    Poll,
    /// The user pressed the reaction button.
    Click,
}

/// One stimulus-response measurement.
///
/// The reference instant for the measurement (`shown_at`) is captured once,
/// on the poll that reveals the "go" signal, and carried in the state itself.
/// Redraws never touch it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ReactionTrial {
    #[default]
    Waiting,
    GetReady {
        armed_at: DateTime<Utc>,
    },
    ClickNow {
        shown_at: DateTime<Utc>,
    },
    Done {
        reaction_seconds: f64,
    },
}

impl ReactionTrial {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event at time `now`.
    ///
    /// Pairs that have no meaning (clicking before "go", starting twice,
    /// anything after `Done`) return the trial unchanged.
    #[must_use]
    pub fn transition(self, now: DateTime<Utc>, event: TrialEvent) -> Self {
        match (self, event) {
            (ReactionTrial::Waiting, TrialEvent::Start { delay }) => ReactionTrial::GetReady {
                armed_at: now + delay,
            },
            (ReactionTrial::GetReady { armed_at }, TrialEvent::Poll) if now > armed_at => {
                ReactionTrial::ClickNow { shown_at: now }
            }
            (ReactionTrial::ClickNow { shown_at }, TrialEvent::Click) => ReactionTrial::Done {
                reaction_seconds: seconds_between(shown_at, now),
            },
            (unchanged, _) => unchanged,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TrialPhase {
        match self {
            ReactionTrial::Waiting => TrialPhase::Waiting,
            ReactionTrial::GetReady { .. } => TrialPhase::GetReady,
            ReactionTrial::ClickNow { .. } => TrialPhase::ClickNow,
            ReactionTrial::Done { .. } => TrialPhase::Done,
        }
    }

    /// When the "go" signal becomes due. `None` until the trial is started.
    #[must_use]
    pub fn armed_at(&self) -> Option<DateTime<Utc>> {
        match self {
            ReactionTrial::GetReady { armed_at } => Some(*armed_at),
            _ => None,
        }
    }

    #[must_use]
    pub fn shown_at(&self) -> Option<DateTime<Utc>> {
        match self {
            ReactionTrial::ClickNow { shown_at } => Some(*shown_at),
            _ => None,
        }
    }

    #[must_use]
    pub fn reaction_seconds(&self) -> Option<f64> {
        match self {
            ReactionTrial::Done { reaction_seconds } => Some(*reaction_seconds),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, ReactionTrial::Done { .. })
    }
}
