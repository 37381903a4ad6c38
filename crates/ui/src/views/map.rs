use dioxus::prelude::*;
use dioxus_router::Link;
use services::{PhaseStatus, ProgressionEngine};

use crate::routes::Route;
use crate::vm::{MapNodeVm, MapPathVm, map_world};

#[component]
pub fn MapView() -> Element {
    let engine = use_context::<Signal<ProgressionEngine>>();
    let map = map_world(&engine.read());

    rsx! {
        div { class: "page map",
            div { class: "map__header",
                div {
                    h2 { "{map.title}" }
                    p { class: "map__subtitle", "{map.subtitle}" }
                }
                Link { class: "btn btn-secondary", to: Route::Quest {}, "Close" }
            }
            div { class: "map__area",
                svg { class: "map__paths",
                    for path in map.paths.iter().cloned() {
                        MapPath { path }
                    }
                }
                for node in map.nodes.iter().cloned() {
                    MapNode { key: "{node.phase}", node }
                }
            }
            div { class: "map__legend",
                span { class: "legend legend--completed", "Completed" }
                span { class: "legend legend--current", "Current" }
                span { class: "legend legend--locked", "Locked" }
            }
        }
    }
}

#[component]
fn MapPath(path: MapPathVm) -> Element {
    let (x1, y1) = path.from;
    let (x2, y2) = path.to;
    rsx! {
        line {
            class: if path.reached { "map-path reached" } else { "map-path" },
            x1: "{x1}%",
            y1: "{y1}%",
            x2: "{x2}%",
            y2: "{y2}%",
        }
    }
}

#[component]
fn MapNode(node: MapNodeVm) -> Element {
    let marker = match node.status {
        PhaseStatus::Locked => "🔒",
        PhaseStatus::Current => "✨",
        PhaseStatus::Completed => "✔",
    };
    rsx! {
        div {
            class: "{node.class()}",
            style: "left: {node.x}%; top: {node.y}%",
            span { class: "map-node__icon",
                if node.status == PhaseStatus::Locked { "{marker}" } else { "{node.icon}" }
            }
            if node.status != PhaseStatus::Locked {
                span { class: "map-node__marker", "{marker}" }
            }
            span { class: "map-node__label", "{node.label}" }
            if let Some(percent) = node.progress_percent {
                div { class: "progress progress--small",
                    div { class: "progress__fill", style: "width: {percent}%" }
                }
            }
        }
    }
}
