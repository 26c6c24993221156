use dioxus::prelude::*;
use focus_core::model::IntroStep;

use crate::vm::AssessmentIntent;

fn prompt_for_step(step: IntroStep) -> (&'static str, &'static str) {
    match step {
        IntroStep::Name => ("intro-name", "What's your name?"),
        IntroStep::Age => ("intro-age", "How old are you?"),
    }
}

#[component]
pub(super) fn IntroStage(step: IntroStep, on_intent: Callback<AssessmentIntent>) -> Element {
    let mut text = use_signal(String::new);
    let (input_id, prompt) = prompt_for_step(step);

    rsx! {
        div { class: "stage stage-intro",
            label { r#for: input_id, "{prompt}" }
            input {
                id: input_id,
                r#type: "text",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }
            button {
                id: "intro-continue",
                class: "primary",
                r#type: "button",
                onclick: move |_| {
                    let raw = text();
                    let intent = match step {
                        IntroStep::Name => AssessmentIntent::SubmitName(raw),
                        IntroStep::Age => AssessmentIntent::SubmitAge(raw),
                    };
                    on_intent.call(intent);
                },
                "Continue"
            }
        }
    }
}
