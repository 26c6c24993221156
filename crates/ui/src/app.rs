use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title().to_string();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "focus-app",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    FatalPanel { details: format!("{errors:?}") }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Shown when a view panics out of its own error handling. The session is
/// gone at this point; closing the window is the only way back.
#[component]
fn FatalPanel(details: String) -> Element {
    tracing::error!(%details, "view crashed");
    rsx! {
        div { class: "fatal",
            h2 { "The assessment stopped unexpectedly" }
            p { "Please close the window and start again." }
            pre { "{details}" }
        }
    }
}
