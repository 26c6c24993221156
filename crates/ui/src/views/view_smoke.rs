use focus_core::model::ASRS_QUESTIONS;

use super::test_harness::{PageHarness, intro_done, service_at, vm_after};
use crate::vm::{AssessmentIntent, AssessmentVm};

fn render(harness: &mut PageHarness) -> String {
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn intro_smoke_asks_for_name_then_age() {
    let mut harness = PageHarness::new(AssessmentVm::new());
    let html = render(&mut harness);
    assert!(html.contains("your name?"), "missing name prompt in {html}");
    assert!(html.contains("intro-continue"), "missing continue button in {html}");

    let mut harness = PageHarness::new(vm_after([AssessmentIntent::SubmitName("Ada".into())]));
    let html = render(&mut harness);
    assert!(html.contains("How old are you?"), "missing age prompt in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn intro_smoke_renders_rejection_message() {
    let mut harness = PageHarness::new(vm_after([AssessmentIntent::SubmitName("   ".into())]));
    let html = render(&mut harness);
    assert!(
        html.contains("Please enter your name."),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn survey_smoke_renders_all_questions() {
    let mut harness = PageHarness::new(vm_after(intro_done()));
    let html = render(&mut harness);
    assert!(html.contains("ASRS v1.1 Screener"), "missing heading in {html}");
    for question in ASRS_QUESTIONS {
        assert!(html.contains(question), "missing {question} in {html}");
    }
    assert!(html.contains("question-5"), "missing last slider in {html}");
    assert!(html.contains("Submit ASRS Test"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reaction_smoke_walks_prompts() {
    let mut intents = intro_done();
    intents.push(AssessmentIntent::SubmitSurvey);
    let mut harness = PageHarness::new(vm_after(intents.clone()));
    let html = render(&mut harness);
    assert!(
        html.contains("Start Reaction Time Test"),
        "missing start button in {html}"
    );

    intents.push(AssessmentIntent::StartReaction);
    let mut harness = PageHarness::new(vm_after(intents.clone()));
    let html = render(&mut harness);
    assert!(html.contains("Get ready..."), "missing get ready in {html}");
    assert!(!html.contains("reaction-button"), "button shown early in {html}");

    let mut vm = vm_after(intents);
    vm.dispatch(&service_at(2_100), AssessmentIntent::PollReaction)
        .expect("poll");
    let mut harness = PageHarness::new(vm);
    let html = render(&mut harness);
    assert!(html.contains("Click Now!"), "missing click button in {html}");
    assert!(html.contains("reaction-button--go"), "missing go style in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_smoke_renders_report() {
    let mut intents = intro_done();
    intents.push(AssessmentIntent::SubmitSurvey);
    intents.push(AssessmentIntent::StartReaction);
    let mut vm = vm_after(intents);
    vm.dispatch(&service_at(2_100), AssessmentIntent::PollReaction)
        .expect("poll");
    vm.dispatch(&service_at(2_300), AssessmentIntent::ClickReaction)
        .expect("click");

    let mut harness = PageHarness::new(vm);
    let html = render(&mut harness);
    assert!(html.contains("Thank you, Ada!"), "missing greeting in {html}");
    assert!(
        html.contains("Your Attention Score: 8.8/10"),
        "missing score in {html}"
    );
    assert!(
        html.contains("Estimated Attention Span: 26 seconds"),
        "missing span in {html}"
    );
    assert!(
        html.contains("Your reaction time: 0.200 seconds"),
        "missing reaction in {html}"
    );
    assert!(html.contains("Restart Test"), "missing restart in {html}");
}
