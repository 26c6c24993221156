use dioxus::prelude::*;
use focus_core::model::TrialPhase;

use crate::context::AppContext;
use crate::vm::{AssessmentIntent, AssessmentVm};

#[component]
pub(super) fn ReactionStage(
    vm: Signal<AssessmentVm>,
    on_intent: Callback<AssessmentIntent>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let poll_interval = ctx.poll_interval();

    // Cooperative redraw loop: nothing sleeps inside the session, the tick
    // just asks it whether the "go" instant has passed.
    use_future(move || async move {
        loop {
            tokio::time::sleep(poll_interval).await;
            if vm.peek().reaction_phase() == TrialPhase::GetReady {
                on_intent.call(AssessmentIntent::PollReaction);
            }
        }
    });

    let prompt = vm.read().reaction_prompt();
    let phase = vm.read().reaction_phase();
    let intent = match phase {
        TrialPhase::Waiting => Some(AssessmentIntent::StartReaction),
        TrialPhase::ClickNow => Some(AssessmentIntent::ClickReaction),
        TrialPhase::GetReady | TrialPhase::Done => None,
    };

    rsx! {
        div { class: "stage stage-reaction",
            h2 { "Reaction Time Test" }
            if let Some(message) = prompt.message {
                p { class: "reaction-message", "{message}" }
            }
            if let (Some(label), Some(intent)) = (prompt.button, intent) {
                button {
                    id: "reaction-button",
                    class: if prompt.go { "reaction-button reaction-button--go" } else { "primary" },
                    r#type: "button",
                    onclick: move |_| on_intent.call(intent.clone()),
                    "{label}"
                }
            }
        }
    }
}
