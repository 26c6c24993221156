use std::sync::Arc;

use chrono::Duration;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use focus_core::model::ReactionSettings;
use focus_core::time::fixed_now;
use services::{AssessmentService, Clock, DelaySampler};

use crate::context::{UiApp, build_app_context};
use crate::views::AssessmentPage;
use crate::vm::{AssessmentIntent, AssessmentVm};

pub const TEST_DELAY_SECS: f64 = 2.0;

#[derive(Clone)]
struct TestApp {
    assessment: Arc<AssessmentService>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "FocusForward Test".to_string()
    }

    fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }
}

#[derive(Props, Clone)]
struct HarnessRootProps {
    app: Arc<TestApp>,
    initial: AssessmentVm,
}

impl PartialEq for HarnessRootProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessRootProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        AssessmentPage { initial: props.initial.clone() }
    }
}

/// Service pinned to `offset_ms` after the fixed test instant, with a
/// deterministic reveal delay.
pub fn service_at(offset_ms: i64) -> AssessmentService {
    AssessmentService::new(ReactionSettings::default())
        .with_sampler(DelaySampler::Fixed(TEST_DELAY_SECS))
        .with_clock(Clock::fixed(fixed_now() + Duration::milliseconds(offset_ms)))
}

/// Drive a fresh view model through `intents` at the fixed test instant.
pub fn vm_after(intents: impl IntoIterator<Item = AssessmentIntent>) -> AssessmentVm {
    let service = service_at(0);
    let mut vm = AssessmentVm::new();
    for intent in intents {
        let _ = vm.dispatch(&service, intent);
    }
    vm
}

pub fn intro_done() -> Vec<AssessmentIntent> {
    vec![
        AssessmentIntent::SubmitName("Ada".into()),
        AssessmentIntent::SubmitAge("36".into()),
    ]
}

pub struct PageHarness {
    pub dom: VirtualDom,
}

impl PageHarness {
    pub fn new(initial: AssessmentVm) -> Self {
        Self::with_service(initial, service_at(0))
    }

    pub fn with_service(initial: AssessmentVm, service: AssessmentService) -> Self {
        let app = Arc::new(TestApp {
            assessment: Arc::new(service),
        });
        let dom = VirtualDom::new_with_props(HarnessRoot, HarnessRootProps { app, initial });
        Self { dom }
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}
