mod assessment_vm;
mod results_vm;
mod time_fmt;

pub use assessment_vm::{AssessmentIntent, AssessmentVm, QuestionRowVm, ReactionPromptVm};
pub use results_vm::ResultsVm;
pub use time_fmt::{format_reaction_secs, format_score};
