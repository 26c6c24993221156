mod assessment;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::{AssessmentPage, AssessmentView};
pub use state::ViewError;
