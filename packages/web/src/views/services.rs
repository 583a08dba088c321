use dioxus::prelude::*;
use ui::content;
use ui::{use_lang, Lang, PageHeader, Page};

use crate::layout::route_for;

#[component]
pub fn Services() -> Element {
    let lang = use_lang().current();
    rsx! { ServicesPage { lang } }
}

/// Romanian alias of [`Services`].
#[component]
pub fn Servicii() -> Element {
    let lang = use_lang().current();
    rsx! { ServicesPage { lang } }
}

#[component]
fn ServicesPage(lang: Lang) -> Element {
    let copy = content::services(lang);

    rsx! {
        PageHeader { title: copy.title, subtitle: copy.subtitle }

        section { class: "section",
            div { class: "container_wide service_list",
                for (index, service) in copy.services.iter().enumerate() {
                    article {
                        key: "{service.title}",
                        class: if index % 2 == 1 { "service_detail reversed" } else { "service_detail" },
                        div { class: "service_text",
                            h2 { {service.title} }
                            p { class: "lead", {service.description} }
                            ul { class: "feature_list",
                                for feature in service.features {
                                    li { key: "{feature}", "✓ {feature}" }
                                }
                            }
                        }
                        div { class: "card service_process",
                            h3 { {service.process_title} }
                            ol {
                                for step in service.steps {
                                    li { key: "{step}", {*step} }
                                }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section cta_band",
            div { class: "container_wide",
                h2 { {copy.cta.title} }
                p { class: "lead", {copy.cta.subtitle} }
                div { class: "cta_row",
                    Link { class: "btn primary", to: route_for(Page::Contact, lang), "{copy.cta.button} →" }
                }
            }
        }
    }
}
