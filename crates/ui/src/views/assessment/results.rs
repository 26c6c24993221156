use dioxus::prelude::*;

use crate::vm::{AssessmentIntent, ResultsVm};

#[component]
pub(super) fn ResultsStage(results: ResultsVm, on_intent: Callback<AssessmentIntent>) -> Element {
    rsx! {
        div { class: "stage stage-results",
            p { class: "results-greeting", "{results.greeting}" }
            dl { class: "results",
                dd { "{results.score_label}" }
                dd { "{results.span_label}" }
                dd { "{results.reaction_label}" }
            }
            p { class: "results-advice", "{results.advice}" }
            button {
                id: "results-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(AssessmentIntent::Restart),
                "Restart Test"
            }
        }
    }
}
