use thiserror::Error;

use crate::model::SurveyResponse;

//
// ─── CONSTANTS ─────────────────────────────────────────────────────────────────
//

/// Highest possible questionnaire total (6 items × 4).
pub const ASRS_MAX_TOTAL: u32 = 24;

/// Reaction times at or below this score full marks.
pub const REACTION_BEST_SECS: f64 = 0.15;

/// Width of the linear band above `REACTION_BEST_SECS`; 0.35s and slower score zero.
pub const REACTION_BAND_SECS: f64 = 0.2;

/// Seconds of estimated attention span per score point.
pub const SPAN_SECS_PER_POINT: f64 = 3.0;

pub const MAX_SCORE: f64 = 10.0;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("reaction time must be finite and non-negative, got {0}")]
    InvalidReactionTime(f64),
}

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

/// Everything derived from one completed assessment.
///
/// # Fields
///
/// * `asrs_normalized` - 1.0 means no reported symptoms
/// * `reaction_normalized` - 1.0 for 0.15s or faster, 0.0 for 0.35s or slower
/// * `composite` - unrounded mean of the two, in `[0, 1]`
/// * `final_score` - `composite` on a 0-10 scale, one decimal
/// * `attention_span_seconds` - `floor(final_score * 3)`, 0-30
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub asrs_total: u32,
    pub asrs_normalized: f64,
    pub reaction_normalized: f64,
    pub composite: f64,
    pub final_score: f64,
    pub attention_span_seconds: u32,
}

impl ScoreResult {
    #[must_use]
    pub fn advisory(&self) -> Advisory {
        Advisory::for_score(self.final_score)
    }
}

/// Blend questionnaire answers and a reaction time into a 0-10 score.
///
/// # Errors
///
/// Returns `ScoreError::InvalidReactionTime` for NaN, infinite or negative input.
///
/// # Examples
///
/// ```
/// # use focus_core::model::SurveyResponse;
/// # use focus_core::scoring::score;
/// let survey = SurveyResponse::from_values(&[2, 2, 2, 2, 2, 2]).unwrap();
/// let result = score(&survey, 0.25).unwrap();
/// assert_eq!(result.final_score, 5.0);
/// assert_eq!(result.attention_span_seconds, 15);
/// ```
pub fn score(survey: &SurveyResponse, reaction_seconds: f64) -> Result<ScoreResult, ScoreError> {
    if !reaction_seconds.is_finite() || reaction_seconds < 0.0 {
        return Err(ScoreError::InvalidReactionTime(reaction_seconds));
    }

    let asrs_total = survey.total().min(ASRS_MAX_TOTAL);
    let asrs_normalized = 1.0 - f64::from(asrs_total) / f64::from(ASRS_MAX_TOTAL);
    let reaction_normalized =
        (1.0 - (reaction_seconds - REACTION_BEST_SECS) / REACTION_BAND_SECS).clamp(0.0, 1.0);

    let composite = (asrs_normalized + reaction_normalized) / 2.0;
    let final_score = round_one_decimal(composite * MAX_SCORE).clamp(0.0, MAX_SCORE);

    Ok(ScoreResult {
        asrs_total,
        asrs_normalized,
        reaction_normalized,
        composite,
        final_score,
        attention_span_seconds: attention_span_seconds(final_score),
    })
}

/// Rounds the exact binary value, so `6.35` (stored as `6.3499...`) goes down
/// and only true ties go to even.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn attention_span_seconds(final_score: f64) -> u32 {
    let max = MAX_SCORE * SPAN_SECS_PER_POINT;
    (final_score * SPAN_SECS_PER_POINT).floor().clamp(0.0, max) as u32
}

//
// ─── ADVISORY ──────────────────────────────────────────────────────────────────
//

/// Qualitative feedback tier for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Below 3.0.
    SeekEvaluation,
    /// 3.0 up to (not including) 7.0.
    Average,
    /// 7.0 and above.
    Strong,
}

impl Advisory {
    pub const AVERAGE_FROM: f64 = 3.0;
    pub const STRONG_FROM: f64 = 7.0;

    #[must_use]
    pub fn for_score(final_score: f64) -> Self {
        if final_score < Self::AVERAGE_FROM {
            Advisory::SeekEvaluation
        } else if final_score < Self::STRONG_FROM {
            Advisory::Average
        } else {
            Advisory::Strong
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Advisory::SeekEvaluation => {
                "Your score indicates potential attention difficulties. Consider consulting a healthcare professional for a comprehensive evaluation."
            }
            Advisory::Average => {
                "Your score is in the average range. There are techniques you can use to improve your focus and attention."
            }
            Advisory::Strong => {
                "Great job! You have a strong attention span. Keep up the good work and continue practicing mindfulness techniques."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn survey(values: [u8; 6]) -> SurveyResponse {
        SurveyResponse::from_values(&values).unwrap()
    }

    #[test]
    fn best_case_scores_ten() {
        let result = score(&survey([0; 6]), 0.15).unwrap();
        assert_eq!(result.asrs_total, 0);
        assert!((result.asrs_normalized - 1.0).abs() < EPS);
        assert!((result.reaction_normalized - 1.0).abs() < EPS);
        assert!((result.composite - 1.0).abs() < EPS);
        assert_eq!(result.final_score, 10.0);
        assert_eq!(result.attention_span_seconds, 30);
    }

    #[test]
    fn worst_case_scores_zero() {
        let result = score(&survey([4; 6]), 0.35).unwrap();
        assert_eq!(result.asrs_total, 24);
        assert!(result.asrs_normalized.abs() < EPS);
        assert!(result.reaction_normalized.abs() < EPS);
        assert_eq!(result.final_score, 0.0);
        assert_eq!(result.attention_span_seconds, 0);
    }

    #[test]
    fn midpoint_scores_five() {
        let result = score(&survey([2; 6]), 0.25).unwrap();
        assert_eq!(result.asrs_total, 12);
        assert!((result.asrs_normalized - 0.5).abs() < EPS);
        assert!((result.reaction_normalized - 0.5).abs() < EPS);
        assert!((result.composite - 0.5).abs() < EPS);
        assert_eq!(result.final_score, 5.0);
        assert_eq!(result.attention_span_seconds, 15);
    }

    #[test]
    fn rounding_uses_the_stored_value_not_its_shortest_form() {
        // composite * 10 is 6.35 in shortest form but below it in binary.
        let result = score(&survey([2; 6]), 0.196).unwrap();
        assert_eq!(result.final_score, 6.3);
        assert_eq!(result.attention_span_seconds, 18);

        // 8.75 is exact, so the tie goes to even.
        let result = score(&survey([0; 6]), 0.2).unwrap();
        assert_eq!(result.final_score, 8.8);
        assert_eq!(round_one_decimal(0.25), 0.2);
    }

    #[test]
    fn reaction_normalization_clamps_both_ends() {
        let fast = score(&survey([0; 6]), 0.01).unwrap();
        assert_eq!(fast.reaction_normalized, 1.0);
        let slow = score(&survey([0; 6]), 4.0).unwrap();
        assert_eq!(slow.reaction_normalized, 0.0);
        assert_eq!(slow.final_score, 5.0);
    }

    #[test]
    fn outputs_stay_in_range_across_inputs() {
        let reaction_times = [0.0, 0.05, 0.15, 0.2, 0.249, 0.3, 0.35, 0.5, 2.0, 60.0];
        for a in 0..=4u8 {
            for b in 0..=4u8 {
                let values = [a, b, a, b, a, b];
                for rt in reaction_times {
                    let result = score(&survey(values), rt).unwrap();
                    assert!(
                        (0.0..=10.0).contains(&result.final_score),
                        "{values:?} {rt} -> {}",
                        result.final_score
                    );
                    assert!(result.attention_span_seconds <= 30);
                }
            }
        }
    }

    #[test]
    fn invalid_reaction_time_is_rejected() {
        for rt in [f64::NAN, f64::INFINITY, -0.1] {
            assert!(matches!(
                score(&survey([0; 6]), rt),
                Err(ScoreError::InvalidReactionTime(_))
            ));
        }
    }

    #[test]
    fn advisory_thresholds() {
        assert_eq!(Advisory::for_score(0.0), Advisory::SeekEvaluation);
        assert_eq!(Advisory::for_score(2.9), Advisory::SeekEvaluation);
        assert_eq!(Advisory::for_score(3.0), Advisory::Average);
        assert_eq!(Advisory::for_score(6.9), Advisory::Average);
        assert_eq!(Advisory::for_score(7.0), Advisory::Strong);
        assert_eq!(Advisory::for_score(10.0), Advisory::Strong);
    }

    #[test]
    fn advisory_messages_are_distinct() {
        let messages = [
            Advisory::SeekEvaluation.message(),
            Advisory::Average.message(),
            Advisory::Strong.message(),
        ];
        assert!(messages[0].contains("healthcare professional"));
        assert!(messages[1].contains("average range"));
        assert!(messages[2].starts_with("Great job!"));
    }
}
