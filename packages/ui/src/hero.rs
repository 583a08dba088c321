use dioxus::prelude::*;

/// Full-height landing banner. CTA buttons come in as children.
#[component]
pub fn Hero(
    #[props(into)] title: String,
    #[props(into)] subtitle: String,
    #[props(into)] description: String,
    children: Element,
) -> Element {
    rsx! {
        section { id: "hero",
            div { class: "hero_backdrop" }
            div { class: "hero_inner container_wide fade_in_up",
                h1 {
                    span { class: "gradient_text", "{title}" }
                    br {}
                    span { "{subtitle}" }
                }
                p { class: "hero_description", "{description}" }
                div { class: "cta_row", {children} }
            }
        }
    }
}

/// Title band at the top of the inner pages.
#[component]
pub fn PageHeader(#[props(into)] title: String, #[props(into)] subtitle: String) -> Element {
    rsx! {
        section { class: "page_header",
            div { class: "container_wide",
                h1 { class: "fade_in_up", "{title}" }
                p { class: "lead", "{subtitle}" }
            }
        }
    }
}
