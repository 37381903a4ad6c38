use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quest_core::model::{LessonCatalog, ProgressionRules};
use services::ProgressionEngine;

use crate::context::{UiApp, build_app_context};
use crate::views::{MapView, QuestView};

struct TestApp {
    catalog: Arc<LessonCatalog>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<LessonCatalog> {
        Arc::clone(&self.catalog)
    }

    fn rules(&self) -> ProgressionRules {
        ProgressionRules::default()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quest,
    Map,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    engine: ProgressionEngine,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        catalog: props.engine.catalog_handle(),
    });
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.engine.clone()));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Quest => rsx! { QuestView {} },
        ViewKind::Map => rsx! { MapView {} },
    }
}

/// Render `view` over a session already driven to the state under test.
pub fn render_view(view: ViewKind, engine: ProgressionEngine) -> String {
    let mut dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { engine, view });
    dom.rebuild_in_place();
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(&dom)
}
