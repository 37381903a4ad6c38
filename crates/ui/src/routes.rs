use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{MapView, QuestView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuestView)] Quest {},
        #[route("/map", MapView)] Map {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "app",
            nav { class: "topbar",
                h1 { "{ctx.title()}" }
                ul {
                    li { Link { to: Route::Quest {}, "Quest" } }
                    li { Link { to: Route::Map {}, "Map" } }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
