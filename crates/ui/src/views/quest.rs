use dioxus::prelude::*;
use services::ProgressionEngine;
use tracing::warn;

use crate::views::ViewError;
use crate::vm::{
    HudVm, OptionVm, PhaseCardVm, PhaseTransitionVm, QuestCardVm, QuestIntent, QuestScreenVm,
    VictoryVm, map_hud, map_phase_card, map_quest_screen,
};

#[component]
pub fn QuestView() -> Element {
    let engine = use_context::<Signal<ProgressionEngine>>();
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: QuestIntent| {
        let mut engine = engine;
        let mut error = error;
        let result = engine.write().handle(intent.into());
        match result {
            Ok(_) => error.set(None),
            Err(err) => {
                warn!(%err, ?intent, "quest action rejected");
                error.set(Some(ViewError::from_progress(&err)));
            }
        }
    });

    let (hud, phase_card, screen) = {
        let engine = engine.read();
        (
            map_hud(&engine),
            map_phase_card(&engine),
            map_quest_screen(&engine),
        )
    };

    rsx! {
        div { class: "page quest",
            HudBar { hud }
            if let Some(err) = *error.read() {
                p { class: "quest-error", "{err.message()}" }
            }
            match screen {
                QuestScreenVm::Question(card) => rsx! {
                    PhaseCard { card: phase_card }
                    QuestCard { card, on_intent: dispatch_intent }
                },
                QuestScreenVm::Transition(transition) => rsx! {
                    TransitionCard { transition, on_intent: dispatch_intent }
                },
                QuestScreenVm::Victory(victory) => rsx! {
                    VictoryCard { victory, on_intent: dispatch_intent }
                },
            }
        }
    }
}

#[component]
fn HudBar(hud: HudVm) -> Element {
    rsx! {
        header { class: "hud",
            span { class: "hud-level", "{hud.level_label}" }
            div { class: "hud-xp",
                div { class: "hud-xp__labels",
                    span { "XP" }
                    span { "{hud.xp_label}" }
                }
                div { class: "progress",
                    div { class: "progress__fill", style: "width: {hud.bar_percent}%" }
                }
            }
            span { class: "hud-total", "{hud.total_xp_label}" }
            span { class: "hud-streak", "{hud.streak_label}" }
        }
    }
}

#[component]
fn PhaseCard(card: PhaseCardVm) -> Element {
    rsx! {
        section { class: "phase-card",
            div { class: "phase-card__head",
                div {
                    p { class: "phase-card__heading", "{card.heading}" }
                    h2 { "{card.name}" }
                    p { class: "phase-card__description", "{card.description}" }
                }
                span { class: "phase-card__icon", "{card.icon}" }
            }
            div { class: "progress",
                div { class: "progress__fill", style: "width: {card.percent}%" }
            }
            p { class: "phase-card__progress", "{card.progress_label}" }
        }
    }
}

#[component]
fn QuestCard(card: QuestCardVm, on_intent: EventHandler<QuestIntent>) -> Element {
    rsx! {
        article { class: "quest-card",
            if let Some(banner) = card.review_banner.as_deref() {
                p { class: "quest-card__review", "{banner}" }
            }
            div { class: "quest-card__head",
                span { class: "quest-card__icon", "{card.icon}" }
                div {
                    h2 { "{card.title}" }
                    p { class: "quest-card__subtitle", "{card.subtitle}" }
                }
            }
            p { class: "quest-card__question", "{card.question}" }
            div { class: "quest-card__options",
                for option in card.options.iter().cloned() {
                    OptionButton { key: "{option.index}", option, on_intent }
                }
            }
            if let Some(feedback) = card.feedback.as_ref() {
                div { class: if feedback.is_correct { "feedback feedback--correct" } else { "feedback feedback--wrong" },
                    p { class: "feedback__headline", "{feedback.headline}" }
                    p { class: "feedback__explanation", "{feedback.explanation}" }
                }
                button {
                    class: "btn btn-primary",
                    id: "quest-next",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuestIntent::Next),
                    "{card.next_label}"
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuestIntent>) -> Element {
    let index = option.index;
    rsx! {
        button {
            class: "{option.state.class()}",
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| on_intent.call(QuestIntent::Choose(index)),
            span { class: "option__letter", "{option.letter}" }
            code { class: "option__text", "{option.text}" }
        }
    }
}

#[component]
fn TransitionCard(transition: PhaseTransitionVm, on_intent: EventHandler<QuestIntent>) -> Element {
    rsx! {
        article { class: "transition-card",
            span { class: "transition-card__icon", "{transition.icon}" }
            p { class: "transition-card__banner", "{transition.banner}" }
            h2 { "{transition.name}" }
            p { "{transition.description}" }
            button {
                class: "btn btn-primary",
                id: "transition-explore",
                r#type: "button",
                onclick: move |_| on_intent.call(QuestIntent::Explore),
                "{transition.cta}"
            }
        }
    }
}

#[component]
fn VictoryCard(victory: VictoryVm, on_intent: EventHandler<QuestIntent>) -> Element {
    rsx! {
        article { class: "victory-card",
            h2 { "Quest Complete!" }
            p { "You have mastered every challenge of this journey!" }
            div { class: "victory-card__stats",
                div {
                    p { class: "stat__value", "{victory.xp_label}" }
                    p { class: "stat__label", "Total XP" }
                }
                div {
                    p { class: "stat__value", "{victory.level_label}" }
                    p { class: "stat__label", "Level" }
                }
                div {
                    p { class: "stat__value", "{victory.percent_label}" }
                    p { class: "stat__label", "Accuracy" }
                }
            }
            p { class: "victory-card__streak", "{victory.best_streak_label}" }
            p { class: "victory-card__message", "{victory.message}" }
            button {
                class: "btn btn-primary",
                id: "victory-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuestIntent::Restart),
                "Play Again"
            }
        }
    }
}
