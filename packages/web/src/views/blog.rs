use dioxus::prelude::*;
use ui::content;
use ui::{use_lang, Lang, PageHeader};

#[component]
pub fn Blog() -> Element {
    let lang = use_lang().current();
    rsx! { BlogPage { lang } }
}

#[component]
fn BlogPage(lang: Lang) -> Element {
    let copy = content::blog(lang);

    rsx! {
        PageHeader { title: copy.title, subtitle: copy.subtitle }

        section { class: "section",
            div { class: "container_narrow",
                div { class: "card coming_soon",
                    h2 { class: "gradient_text", {copy.coming_soon} }
                    p { class: "lead", {copy.description} }
                    h3 { {copy.what_to_expect} }
                    ul { class: "feature_list",
                        for topic in copy.topics {
                            li { key: "{topic}", "✓ {topic}" }
                        }
                    }
                }
                div { class: "card notify",
                    h3 { {copy.notify} }
                    p { {copy.notify_description} }
                    button { class: "btn primary", r#type: "button", "{copy.subscribe} →" }
                }
            }
        }

        section { class: "section section_alt",
            div { class: "container_wide grid_3",
                for index in 0..3 {
                    div { key: "{index}", class: "card skeleton_card",
                        div { class: "skeleton skeleton_media" }
                        div { class: "skeleton skeleton_line" }
                        div { class: "skeleton skeleton_line short" }
                    }
                }
            }
        }
    }
}
