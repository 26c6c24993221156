use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::AssessmentView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", AssessmentView)] Assessment {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "{ctx.title()}" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
