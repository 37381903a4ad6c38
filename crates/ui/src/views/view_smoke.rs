use std::sync::Arc;

use content::{BundledCatalog, CatalogSource};
use services::ProgressionEngine;

use super::test_harness::{ViewKind, render_view};
use crate::vm::test_support::engine;

#[test]
fn quest_view_renders_first_lesson() {
    let html = render_view(ViewKind::Quest, engine());

    assert!(html.contains("Level 1"), "missing level in {html}");
    assert!(html.contains("PHASE 1, LESSON 1"), "missing phase card in {html}");
    assert!(html.contains("Variables"), "missing lesson title in {html}");
    assert!(html.contains("Quest 1 of 3"), "missing subtitle in {html}");
    assert!(!html.contains("Next Quest"), "next shown before answering in {html}");
}

#[test]
fn quest_view_renders_feedback_after_answer() {
    let mut engine = engine();
    engine.submit_answer(1).unwrap();

    let html = render_view(ViewKind::Quest, engine);
    assert!(html.contains("Almost there!"), "missing feedback in {html}");
    assert!(html.contains("Because."), "missing explanation in {html}");
    assert!(html.contains("Next Quest"), "missing next button in {html}");
}

#[test]
fn quest_view_renders_review_banner() {
    let mut engine = engine();
    for pick in [1, 1] {
        engine.submit_answer(pick).unwrap();
        engine.advance().unwrap();
    }

    let html = render_view(ViewKind::Quest, engine);
    assert!(html.contains("Review: Beginner Forest"), "missing banner in {html}");
}

#[test]
fn quest_view_renders_phase_transition() {
    let mut engine = engine();
    for pick in [0, 1] {
        engine.submit_answer(pick).unwrap();
        engine.advance().unwrap();
    }

    let html = render_view(ViewKind::Quest, engine);
    assert!(html.contains("New region unlocked"), "missing banner in {html}");
    assert!(html.contains("Arcane Library"), "missing phase name in {html}");
    assert!(html.contains("Explore"), "missing explore button in {html}");
}

#[test]
fn quest_view_renders_victory() {
    let mut engine = engine();
    for pick in [0, 1] {
        engine.submit_answer(pick).unwrap();
        engine.advance().unwrap();
    }
    engine.acknowledge_phase_transition().unwrap();
    engine.submit_answer(2).unwrap();
    engine.advance().unwrap();

    let html = render_view(ViewKind::Quest, engine);
    assert!(html.contains("Quest Complete!"), "missing title in {html}");
    assert!(html.contains("100%"), "missing accuracy in {html}");
    assert!(html.contains("Play Again"), "missing restart in {html}");
}

#[test]
fn map_view_renders_bundled_regions() {
    let catalog = Arc::new(BundledCatalog.load().unwrap());
    let html = render_view(ViewKind::Map, ProgressionEngine::new(catalog));

    assert!(html.contains("Realm Map"), "missing title in {html}");
    assert!(html.contains("0/20 quests completed"), "missing subtitle in {html}");
    assert!(html.contains("Forest"), "missing first region in {html}");
    assert!(html.contains("Castle"), "missing last region in {html}");
    assert!(html.contains("map-node current"), "missing current node in {html}");
}
