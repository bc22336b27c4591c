use dioxus::prelude::ReadableExt;
use pathway_core::model::{Catalog, ModuleId, ProgressRecord};
use pathway_core::time::fixed_now;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_record};

fn record_with(active: &str, topics: &[&str]) -> ProgressRecord {
    let catalog = Catalog::builtin();
    topics.iter().fold(
        ProgressRecord::fresh(&catalog, fixed_now()).with_active_module(ModuleId::new(active)),
        |record, topic| record.toggle_topic(topic),
    )
}

const ANATOMY_TOPICS: [&str; 4] = [
    "Bony Landmarks & Palpation",
    "The 0-5 Strength Scale",
    "Goniometry Lab",
    "Safe Patient Transfer Techniques",
];

#[tokio::test(flavor = "current_thread")]
async fn sidebar_smoke_renders_first_year_for_new_student() {
    let mut harness = setup_view_harness(ViewKind::Sidebar).await;
    harness.settle().await;
    let html = harness.render();

    for expected in [
        "Year 1",
        "Year 3",
        "Clinical Power Modules",
        "Anatomy in Motion",
        "Start your intensive streak today",
        "0 of 9 modules complete",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Physical Rehab"), "year 2 module leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_smoke_follows_active_module_year() {
    let record = record_with("y3-m1", &[]);
    let mut harness = setup_view_harness_with_record(ViewKind::Sidebar, Some(record)).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("The Maker Lab"), "missing year 3 module in {html}");
    assert!(!html.contains("Anatomy in Motion"), "year 1 module leaked into {html}");
    assert!(html.contains("module-card active"), "no active card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_smoke_marks_completed_module() {
    let record = record_with("y1-m2", &ANATOMY_TOPICS);
    let mut harness = setup_view_harness_with_record(ViewKind::Sidebar, Some(record)).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("module-complete"), "missing completion mark in {html}");
    assert!(html.contains("1 of 9 modules complete"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_active_module_progress() {
    let record = record_with("y1-m2", &["Goniometry Lab", "The 0-5 Strength Scale"]);
    let mut harness = setup_view_harness_with_record(ViewKind::Dashboard, Some(record)).await;
    harness.settle().await;
    let html = harness.render();

    for expected in [
        "Clinical Track: Year 1",
        "Hands-On Anatomy",
        "Clinical Skills to Master",
        "Goniometry Lab",
        "Safe Patient Transfer Techniques",
        "50%",
        "2 of 4 skills",
        "Origin and Insertion",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Mentor Clinical Notes"), "panel shown before any request in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_shows_completed_module() {
    let record = record_with("y1-m2", &ANATOMY_TOPICS);
    let mut harness = setup_view_harness_with_record(ViewKind::Dashboard, Some(record)).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("100%"), "missing 100% in {html}");
    assert!(html.contains("badge complete"), "missing complete badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_falls_back_to_first_module() {
    let record = record_with("retired-module", &[]);
    let mut harness = setup_view_harness_with_record(ViewKind::Dashboard, Some(record)).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("The 60-Second Scan"), "missing first module in {html}");
    assert!(html.contains("0%"), "missing percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_recovers_from_corrupt_storage() {
    let mut harness = setup_view_harness(ViewKind::Dashboard).await;
    harness
        .repo
        .put_raw(storage::repository::PROGRESS_SLOT, "{not json")
        .expect("corrupt slot");
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("The 60-Second Scan"), "missing fresh dashboard in {html}");
    let stored = harness.stored_record().await.expect("fresh record written back");
    assert!(stored.completed_topics().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn header_smoke_renders_overall_progress() {
    let record = record_with("y1-m2", &ANATOMY_TOPICS);
    let mut harness = setup_view_harness_with_record(ViewKind::Header, Some(record)).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Clinical Pathway"), "missing title in {html}");
    // 4 of 36 catalog topics.
    assert!(html.contains("11%"), "missing overall percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_unknown_id_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Module("y9-m9".into())).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Module not found"), "missing not-found in {html}");
    assert!(html.contains("Back to your pathway"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_renders_and_remembers_selection() {
    let mut harness = setup_view_harness(ViewKind::Module("y2-m2".into())).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Wheelchair Seating"), "missing module topics in {html}");
    let stored = harness.stored_record().await.expect("stored record");
    assert_eq!(stored.active_module_id().map(ModuleId::as_str), Some("y2-m2"));
}

#[tokio::test(flavor = "current_thread")]
async fn focus_timer_smoke_renders_idle_work_phase() {
    let mut harness = setup_view_harness(ViewKind::FocusTimer).await;
    harness.settle().await;
    let html = harness.render();

    for expected in ["Focus Flow", "Work Session", "25:00", "Start", "Reset", "Box Breathing"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn focus_timer_smoke_counts_down_and_stops_on_pause() {
    let mut harness = setup_view_harness(ViewKind::FocusTimer).await;
    harness.settle().await;
    let controls = harness.timer.controls();

    harness.press(controls.toggle).await;
    harness.advance(1).await;
    assert_eq!(controls.timer.peek().remaining_secs(), 1499);
    assert!(harness.render().contains("24:59"));

    harness.press(controls.toggle).await;
    harness.advance(5).await;
    let timer = *controls.timer.peek();
    assert!(!timer.is_running());
    assert_eq!(timer.remaining_secs(), 1499);
    assert!(harness.render().contains("24:59"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn focus_timer_smoke_keeps_a_single_tick_across_restarts() {
    let mut harness = setup_view_harness(ViewKind::FocusTimer).await;
    harness.settle().await;
    let controls = harness.timer.controls();

    harness.press(controls.toggle).await;
    // Pause and resume re-arm the tick; the earlier one must not also fire.
    harness.press(controls.toggle).await;
    harness.press(controls.toggle).await;

    harness.advance(1).await;
    assert_eq!(controls.timer.peek().remaining_secs(), 1499);
    harness.advance(1).await;
    assert_eq!(controls.timer.peek().remaining_secs(), 1498);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn focus_timer_smoke_reset_cancels_pending_tick() {
    let mut harness = setup_view_harness(ViewKind::FocusTimer).await;
    harness.settle().await;
    let controls = harness.timer.controls();

    harness.press(controls.toggle).await;
    harness.advance(1).await;
    harness.press(controls.reset).await;
    harness.advance(3).await;

    let timer = *controls.timer.peek();
    assert!(!timer.is_running());
    assert_eq!(timer.remaining_secs(), 1500);
    assert!(harness.render().contains("25:00"));
}
