use quest_core::model::{Lesson, LessonDraft, Phase, PhaseDraft, PhaseId};
use services::ProgressionEngine;

fn phase(id: u32, name: &str, icon: &str) -> Phase {
    PhaseDraft {
        id: PhaseId::new(id),
        name: name.to_string(),
        description: format!("{name} awaits."),
        icon: icon.to_string(),
    }
    .validate()
    .unwrap()
}

fn lesson(phase: u32, title: &str, correct: usize) -> Lesson {
    LessonDraft {
        title: title.to_string(),
        question: format!("What about {title}?"),
        options: vec!["first".into(), "second".into(), "third".into()],
        correct,
        explanation: "Because.".to_string(),
        icon: "📜".to_string(),
        phase: PhaseId::new(phase),
    }
    .validate()
    .unwrap()
}

/// Two regions: "Beginner Forest" with lessons answered by 0 then 1, and
/// "Arcane Library" with one lesson answered by 2.
pub(crate) fn engine() -> ProgressionEngine {
    ProgressionEngine::from_parts(
        vec![
            phase(1, "Beginner Forest", "🌲"),
            phase(2, "Arcane Library", "📚"),
        ],
        vec![
            lesson(1, "Variables", 0),
            lesson(1, "Conditionals", 1),
            lesson(2, "Loops", 2),
        ],
    )
    .unwrap()
}
