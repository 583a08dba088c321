use dioxus::prelude::*;
use tracing::debug;
use ui::{t, use_lang};

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let lang = use_lang().current();
    use_hook(|| debug!(path = %segments.join("/"), "no route matched"));

    rsx! {
        section { class: "section not_found",
            div { class: "container_narrow",
                h1 { "404" }
                h2 { {t(lang, "not_found.title")} }
                p { class: "lead", {t(lang, "not_found.body")} }
                div { class: "cta_row",
                    Link { class: "btn primary", to: Route::Home {}, {t(lang, "not_found.back")} }
                }
            }
        }
    }
}
