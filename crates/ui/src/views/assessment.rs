mod intro;
mod reaction;
mod results;
mod survey;

use dioxus::prelude::*;
use focus_core::model::{IntroStep, Stage};

use crate::context::AppContext;
use crate::vm::{AssessmentIntent, AssessmentVm};

use intro::IntroStage;
use reaction::ReactionStage;
use results::ResultsStage;
use survey::SurveyStage;

#[component]
pub fn AssessmentView() -> Element {
    rsx! {
        AssessmentPage { initial: AssessmentVm::new() }
    }
}

/// Hosts one session. The view model lives in a signal for the lifetime of
/// the page; restart replaces its session in place.
#[component]
pub fn AssessmentPage(initial: AssessmentVm) -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.assessment();
    let vm = use_signal(move || initial);

    let dispatch = {
        let service = service.clone();
        use_callback(move |intent: AssessmentIntent| {
            let mut vm = vm;
            // Rejections are kept on the view model and rendered below.
            if let Err(err) = vm.write().dispatch(&service, intent) {
                tracing::debug!(error = ?err, "intent rejected");
            }
        })
    };

    let vm_guard = vm.read();
    let error_message = vm_guard.error().map(|err| err.message().to_string());

    rsx! {
        div { class: "page",
            match vm_guard.stage() {
                Stage::Intro => {
                    let step = vm_guard.intro_step().unwrap_or(IntroStep::Name);
                    rsx! {
                        IntroStage { key: "{step:?}", step, on_intent: dispatch }
                    }
                }
                Stage::Asrs => rsx! {
                    SurveyStage { rows: vm_guard.question_rows(), on_intent: dispatch }
                },
                Stage::Reaction => rsx! {
                    ReactionStage { vm, on_intent: dispatch }
                },
                Stage::Results => match vm_guard.results(&service) {
                    Ok(results) => rsx! {
                        ResultsStage { results, on_intent: dispatch }
                    },
                    Err(err) => rsx! {
                        p { class: "error", "{err.message()}" }
                    },
                },
            }
            if let Some(message) = error_message {
                p { class: "error", role: "alert", "{message}" }
            }
        }
    }
}
