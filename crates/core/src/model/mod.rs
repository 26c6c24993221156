mod ids;
mod profile;
mod reaction;
mod session;
mod settings;
mod survey;

pub use ids::SessionId;
pub use profile::{ProfileError, UserProfile, parse_age, parse_name};
pub use reaction::{ReactionTrial, TrialEvent, TrialPhase};
pub use session::{AssessmentSession, IntroStep, ResultsReport, Stage, StageError};
pub use settings::{AiSettings, AiSettingsDraft, ReactionSettings, SettingsError};
pub use survey::{
    ASRS_QUESTIONS, Frequency, QUESTION_COUNT, SCALE_LEGEND, SURVEY_INSTRUCTIONS, SurveyDraft,
    SurveyError, SurveyResponse,
};
