use std::sync::Arc;

use content::{BundledCatalog, CatalogSource};
use quest_core::model::{Lesson, LessonDraft, Phase, PhaseDraft, PhaseId};
use quest_core::model::CatalogError;
use services::{
    AdvanceOutcome, EventKind, PhaseStatus, ProgressError, ProgressState, ProgressionEngine, Rank,
    Screen, SequenceViolation,
};

fn phase(id: u32) -> Phase {
    PhaseDraft {
        id: PhaseId::new(id),
        name: format!("Region {id}"),
        description: String::new(),
        icon: String::new(),
    }
    .validate()
    .unwrap()
}

fn lesson(phase: u32, correct: usize) -> Lesson {
    LessonDraft {
        title: "T".to_string(),
        question: "Q".to_string(),
        options: vec!["a".into(), "b".into(), "c".into()],
        correct,
        explanation: String::new(),
        icon: String::new(),
        phase: PhaseId::new(phase),
    }
    .validate()
    .unwrap()
}

fn two_phase_engine() -> ProgressionEngine {
    ProgressionEngine::from_parts(
        vec![phase(1), phase(2)],
        vec![lesson(1, 0), lesson(1, 2), lesson(2, 1)],
    )
    .unwrap()
}

/// Lesson 0 right, lesson 1 wrong, then advance into review.
fn reach_review(engine: &mut ProgressionEngine) {
    engine.submit_answer(0).unwrap();
    assert_eq!(engine.xp(), 50);
    engine.advance().unwrap();

    engine.submit_answer(0).unwrap();
    assert_eq!(engine.review_queue_for_phase(PhaseId::new(1)), vec![1]);

    let outcome = engine.advance().unwrap();
    assert_eq!(
        outcome,
        AdvanceOutcome::ReviewStarted {
            phase: PhaseId::new(1),
            queue_len: 1
        }
    );
}

#[test]
fn wrong_answer_gates_phase_boundary() {
    let mut engine = two_phase_engine();
    reach_review(&mut engine);

    assert!(engine.is_in_review_mode());
    assert_eq!(engine.review_phase().map(Phase::id), Some(PhaseId::new(1)));
    assert_eq!(engine.state().review().map(|r| r.cursor()), Some(0));
    assert_eq!(engine.current_lesson_index(), 1);
    assert_eq!(engine.current_phase().id(), PhaseId::new(1));
    assert_eq!(engine.screen(), Screen::Review);
}

#[test]
fn crossing_boundary_with_mistakes_schedules_transition_behind_review() {
    let mut engine = two_phase_engine();
    reach_review(&mut engine);

    assert_eq!(
        engine.pending_phase_transition().map(Phase::id),
        Some(PhaseId::new(2))
    );
    assert_eq!(engine.screen(), Screen::Review);
    assert!(engine.can_submit());

    let err = engine.acknowledge_phase_transition().unwrap_err();
    assert_eq!(
        err,
        ProgressError::InvalidEventSequence {
            event: EventKind::AcknowledgePhaseTransition,
            reason: SequenceViolation::ReviewInProgress,
        }
    );

    // A miss keeps the review open and the transition scheduled.
    engine.submit_answer(0).unwrap();
    engine.advance().unwrap();
    assert!(engine.is_in_review_mode());
    assert_eq!(engine.current_lesson_index(), 1);
    assert_eq!(
        engine.pending_phase_transition().map(Phase::id),
        Some(PhaseId::new(2))
    );

    engine.submit_answer(2).unwrap();
    engine.advance().unwrap();
    assert_eq!(engine.screen(), Screen::PhaseTransitionPending);
    assert_eq!(engine.acknowledge_phase_transition().unwrap(), PhaseId::new(2));
    assert_eq!(engine.screen(), Screen::Lesson);
    assert_eq!(engine.current_phase().id(), PhaseId::new(2));
}

#[test]
fn remediation_clears_review_and_unlocks_next_phase() {
    let mut engine = two_phase_engine();
    reach_review(&mut engine);

    let (index, item) = engine.current_review_item().unwrap();
    assert_eq!(index, 1);
    engine.submit_answer(item.correct_option()).unwrap();

    assert!(engine.state().wrong_answers().is_empty());
    assert_eq!(engine.correct_answer_count(), 2);
    assert_eq!(engine.xp(), 100);
    assert_eq!(engine.level(), 2);

    engine.advance().unwrap();
    assert!(!engine.is_in_review_mode());
    assert_eq!(engine.current_lesson_index(), 2);
    assert_eq!(
        engine.pending_phase_transition().map(Phase::id),
        Some(PhaseId::new(2))
    );
}

#[test]
fn single_phase_all_correct_completes() {
    let mut engine = ProgressionEngine::from_parts(
        vec![phase(1)],
        vec![lesson(1, 0), lesson(1, 1), lesson(1, 2)],
    )
    .unwrap();

    for correct in [0, 1, 2] {
        assert!(!engine.is_game_complete());
        engine.submit_answer(correct).unwrap();
        engine.advance().unwrap();
    }

    assert!(engine.is_game_complete());
    assert_eq!(engine.xp(), 150);
    assert_eq!(engine.correct_answer_count(), 3);
}

#[test]
fn restart_returns_to_initial_state() {
    let mut engine = two_phase_engine();
    reach_review(&mut engine);
    engine.submit_answer(1).unwrap();

    engine.restart();

    assert_eq!(engine.state(), &ProgressState::default());
    assert_eq!(engine.current_lesson_index(), 0);
    assert_eq!(engine.xp(), 0);
    assert_eq!(engine.correct_answer_count(), 0);
    assert!(engine.state().wrong_answers().is_empty());
    assert!(!engine.is_in_review_mode());
    assert!(!engine.is_game_complete());
    assert!(engine.pending_phase_transition().is_none());
}

#[test]
fn out_of_range_option_is_rejected_without_side_effects() {
    let mut engine = two_phase_engine();
    let before = engine.state().clone();
    let len = engine.current_lesson().option_count();

    let err = engine.submit_answer(len).unwrap_err();

    assert_eq!(err, ProgressError::OptionIndexOutOfRange { index: len, len });
    assert_eq!(engine.state(), &before);
    assert!(engine.can_submit());
}

#[test]
fn lesson_with_unknown_phase_fails_construction() {
    let err = ProgressionEngine::from_parts(vec![phase(1)], vec![lesson(2, 0)]).unwrap_err();
    assert_eq!(err, ProgressError::EmptyCatalog);

    let err = ProgressionEngine::from_parts(vec![phase(1)], Vec::new()).unwrap_err();
    assert_eq!(err, ProgressError::EmptyCatalog);
}

#[test]
fn malformed_phase_list_keeps_catalog_error() {
    let err = ProgressionEngine::from_parts(vec![phase(1), phase(1)], vec![lesson(1, 0)])
        .unwrap_err();
    assert_eq!(
        err,
        ProgressError::Catalog(CatalogError::DuplicatePhase {
            id: PhaseId::new(1)
        })
    );
}

#[test]
fn bundled_quest_plays_through_with_one_remediation_per_phase() {
    let catalog = Arc::new(BundledCatalog.load().unwrap());
    let mut engine = ProgressionEngine::new(Arc::clone(&catalog));
    let mut reviews = 0;
    let mut unlocks = Vec::new();

    while !engine.is_game_complete() {
        match engine.screen() {
            Screen::PhaseTransitionPending => {
                unlocks.push(engine.acknowledge_phase_transition().unwrap());
                continue;
            }
            Screen::Review => {
                let correct = engine.presented_lesson().correct_option();
                engine.submit_answer(correct).unwrap();
            }
            Screen::Lesson => {
                // Miss the first lesson of each phase, answer the rest.
                let index = engine.presented_lesson_index();
                let lesson = engine.presented_lesson();
                let first_of_phase = catalog.lessons_in_phase(lesson.phase()).start == index;
                let pick = if first_of_phase {
                    (lesson.correct_option() + 1) % lesson.option_count()
                } else {
                    lesson.correct_option()
                };
                engine.submit_answer(pick).unwrap();
            }
            Screen::Complete => unreachable!(),
        }
        if let AdvanceOutcome::ReviewStarted { queue_len, .. } = engine.advance().unwrap() {
            assert_eq!(queue_len, 1);
            reviews += 1;
        }
    }

    assert_eq!(reviews, 4);
    assert_eq!(
        unlocks,
        vec![PhaseId::new(2), PhaseId::new(3), PhaseId::new(4)]
    );
    assert_eq!(engine.correct_answer_count(), 20);
    assert_eq!(engine.xp(), 1000);
    assert_eq!(engine.level(), 11);

    let report = engine.final_report();
    assert_eq!(report.percent, 100);
    assert_eq!(report.rank, Rank::Legend);

    let map = engine.world_map_status();
    assert!(map.entries.iter().all(|e| e.status == PhaseStatus::Completed));
    assert_eq!(map.completed_lessons, 20);
}
