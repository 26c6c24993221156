use focus_core::model::ResultsReport;

use crate::vm::time_fmt::{format_reaction_secs, format_score};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub greeting: String,
    pub score_label: String,
    pub span_label: String,
    pub reaction_label: String,
    pub advice: &'static str,
}

impl From<&ResultsReport> for ResultsVm {
    fn from(report: &ResultsReport) -> Self {
        Self {
            greeting: format!("Thank you, {}!", report.profile.name()),
            score_label: format!(
                "Your Attention Score: {}/10",
                format_score(report.score.final_score)
            ),
            span_label: format!(
                "Estimated Attention Span: {} seconds",
                report.score.attention_span_seconds
            ),
            reaction_label: format!(
                "Your reaction time: {} seconds",
                format_reaction_secs(report.reaction_seconds)
            ),
            advice: report.advisory.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focus_core::model::{SurveyResponse, UserProfile};
    use focus_core::scoring::score;

    #[test]
    fn maps_report_to_labels() {
        let survey = SurveyResponse::from_values(&[2, 2, 2, 2, 2, 2]).unwrap();
        let result = score(&survey, 0.25).unwrap();
        let report = ResultsReport {
            profile: UserProfile::new("Ada", "36").unwrap(),
            score: result,
            reaction_seconds: 0.25,
            advisory: result.advisory(),
        };

        let vm = ResultsVm::from(&report);
        assert_eq!(vm.greeting, "Thank you, Ada!");
        assert_eq!(vm.score_label, "Your Attention Score: 5.0/10");
        assert_eq!(vm.span_label, "Estimated Attention Span: 15 seconds");
        assert_eq!(vm.reaction_label, "Your reaction time: 0.250 seconds");
        assert!(vm.advice.contains("average range"));
    }
}
