use services::{ProgressEvent, ProgressionEngine, Rank, Screen};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestIntent {
    Choose(usize),
    Next,
    Explore,
    Restart,
}

impl From<QuestIntent> for ProgressEvent {
    fn from(intent: QuestIntent) -> Self {
        match intent {
            QuestIntent::Choose(index) => ProgressEvent::SubmitAnswer(index),
            QuestIntent::Next => ProgressEvent::Advance,
            QuestIntent::Explore => ProgressEvent::AcknowledgePhaseTransition,
            QuestIntent::Restart => ProgressEvent::Restart,
        }
    }
}

/// Which card the quest page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestScreenVm {
    Question(QuestCardVm),
    Transition(PhaseTransitionVm),
    Victory(VictoryVm),
}

#[must_use]
pub fn map_quest_screen(engine: &ProgressionEngine) -> QuestScreenVm {
    match engine.screen() {
        Screen::Complete => QuestScreenVm::Victory(map_victory(engine)),
        Screen::PhaseTransitionPending => match map_transition(engine) {
            Some(vm) => QuestScreenVm::Transition(vm),
            None => QuestScreenVm::Question(map_quest_card(engine)),
        },
        Screen::Lesson | Screen::Review => QuestScreenVm::Question(map_quest_card(engine)),
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Open,
    Correct,
    Incorrect,
    Dimmed,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Open => "option",
            OptionState::Correct => "option correct",
            OptionState::Incorrect => "option incorrect",
            OptionState::Dimmed => "option dimmed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: String,
    pub text: String,
    pub state: OptionState,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub headline: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestCardVm {
    pub title: String,
    pub icon: String,
    pub subtitle: String,
    pub question: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    /// Set while a phase's wrong answers are being corrected.
    pub review_banner: Option<String>,
    pub next_label: String,
}

/// `A`, `B`, `C`... and plain numbers past `Z`.
#[must_use]
pub fn option_letter(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|index| *index < 26)
        .map_or_else(
            || (index + 1).to_string(),
            |index| char::from(b'A' + index).to_string(),
        )
}

#[must_use]
pub fn map_quest_card(engine: &ProgressionEngine) -> QuestCardVm {
    let lesson = engine.presented_lesson();
    let answer = engine.last_answer();
    let correct = lesson.correct_option();

    let options = lesson
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let state = match answer {
                None => OptionState::Open,
                Some(_) if index == correct => OptionState::Correct,
                Some(answer) if index == answer.selected => OptionState::Incorrect,
                Some(_) => OptionState::Dimmed,
            };
            OptionVm {
                index,
                letter: option_letter(index),
                text: text.clone(),
                state,
                disabled: answer.is_some(),
            }
        })
        .collect();

    let feedback = answer.map(|answer| FeedbackVm {
        is_correct: answer.is_correct,
        headline: if answer.is_correct {
            "Well done, adventurer!".to_string()
        } else {
            "Almost there!".to_string()
        },
        explanation: lesson.explanation().to_string(),
    });

    let review_banner = engine.review_phase().map(|phase| {
        let remaining = engine.review_queue_size_for_phase(phase.id());
        format!("Review: {} | {remaining} left to correct", phase.name())
    });

    let subtitle = match engine.state().review() {
        Some(review) => {
            let queue = engine.review_queue_size_for_phase(review.phase()).max(1);
            format!("Review {} of {queue}", (review.cursor() + 1).min(queue))
        }
        None => format!(
            "Quest {} of {}",
            engine.current_lesson_index() + 1,
            engine.catalog().total_lessons()
        ),
    };

    QuestCardVm {
        title: lesson.title().to_string(),
        icon: lesson.icon().to_string(),
        subtitle,
        question: lesson.question().to_string(),
        options,
        feedback,
        review_banner,
        next_label: "Next Quest".to_string(),
    }
}

//
// ─── PHASE TRANSITION ──────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseTransitionVm {
    pub icon: String,
    pub name: String,
    pub description: String,
    pub banner: String,
    pub cta: String,
}

#[must_use]
pub fn map_transition(engine: &ProgressionEngine) -> Option<PhaseTransitionVm> {
    engine
        .pending_phase_transition()
        .map(|phase| PhaseTransitionVm {
            icon: phase.icon().to_string(),
            name: phase.name().to_string(),
            description: phase.description().to_string(),
            banner: "New region unlocked".to_string(),
            cta: "Explore".to_string(),
        })
}

//
// ─── VICTORY ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VictoryVm {
    pub xp_label: String,
    pub level_label: String,
    pub percent_label: String,
    pub best_streak_label: String,
    pub message: String,
}

#[must_use]
pub fn rank_message(rank: Rank) -> &'static str {
    match rank {
        Rank::Legend => "🎉 Incredible! You are a true code hero!",
        Rank::Adept => "⚔️ Very good! Keep practicing to master every region!",
        Rank::Novice => "🛡️ Good start! Review the concepts and try again!",
    }
}

#[must_use]
pub fn map_victory(engine: &ProgressionEngine) -> VictoryVm {
    let report = engine.final_report();
    VictoryVm {
        xp_label: report.xp.to_string(),
        level_label: report.level.to_string(),
        percent_label: format!("{}%", report.percent),
        best_streak_label: format!("Best streak: {}", report.best_streak),
        message: rank_message(report.rank).to_string(),
    }
}
