use dioxus::prelude::*;
use focus_core::model::{Frequency, SCALE_LEGEND, SURVEY_INSTRUCTIONS};

use crate::vm::{AssessmentIntent, QuestionRowVm};

#[component]
pub(super) fn SurveyStage(
    rows: Vec<QuestionRowVm>,
    on_intent: Callback<AssessmentIntent>,
) -> Element {
    let max = Frequency::MAX;

    rsx! {
        div { class: "stage stage-asrs",
            h2 { "ASRS v1.1 Screener" }
            p { "{SURVEY_INSTRUCTIONS}" }
            p { class: "scale-legend", "{SCALE_LEGEND}" }
            ol { class: "questions",
                for row in rows {
                    li { class: "question", key: "{row.index}",
                        label { r#for: "question-{row.index}", "{row.text}" }
                        div { class: "question-input",
                            input {
                                id: "question-{row.index}",
                                r#type: "range",
                                min: "0",
                                max: "{max}",
                                step: "1",
                                value: "{row.value}",
                                oninput: move |evt| {
                                    if let Ok(value) = evt.value().parse::<u8>() {
                                        on_intent.call(AssessmentIntent::SetAnswer {
                                            index: row.index,
                                            value,
                                        });
                                    }
                                },
                            }
                            span { class: "question-value", "{row.value} · {row.value_label}" }
                        }
                    }
                }
            }
            button {
                id: "asrs-submit",
                class: "primary",
                r#type: "button",
                onclick: move |_| on_intent.call(AssessmentIntent::SubmitSurvey),
                "Submit ASRS Test"
            }
        }
    }
}
