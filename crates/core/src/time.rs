use chrono::{DateTime, Duration, Utc};

/// Wall-clock source for the assessment.
///
/// `Default` reads system time; `Fixed` holds a manually advanced instant so
/// reaction trials can be replayed deterministically in tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Advance a fixed clock by fractional seconds.
    pub fn advance_secs(&mut self, secs: f64) {
        self.advance(duration_from_secs(secs));
    }
}

/// Converts fractional seconds into a `Duration` with microsecond precision.
///
/// Negative or non-finite input yields a zero duration.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn duration_from_secs(secs: f64) -> Duration {
    if !secs.is_finite() || secs <= 0.0 {
        return Duration::zero();
    }
    Duration::microseconds((secs * 1_000_000.0).round() as i64)
}

/// Seconds elapsed from `earlier` to `later`, clamped at zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn seconds_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    let delta = later - earlier;
    delta
        .num_microseconds()
        .map_or(f64::MAX, |micros| micros as f64 / 1_000_000.0)
        .max(0.0)
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances_by_fractional_seconds() {
        let mut clock = fixed_clock();
        let start = clock.now();
        clock.advance_secs(0.25);
        assert!((seconds_between(start, clock.now()) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn default_clock_ignores_advance() {
        let mut clock = Clock::default_clock();
        clock.advance_secs(3600.0);
        assert!(clock.now() < Utc::now() + Duration::minutes(1));
    }

    #[test]
    fn seconds_between_never_goes_negative() {
        let now = fixed_now();
        assert_eq!(seconds_between(now, now - Duration::seconds(2)), 0.0);
    }

    #[test]
    fn duration_from_secs_rejects_garbage() {
        assert_eq!(duration_from_secs(f64::NAN), Duration::zero());
        assert_eq!(duration_from_secs(-1.0), Duration::zero());
        assert_eq!(duration_from_secs(2.5), Duration::milliseconds(2500));
    }
}
