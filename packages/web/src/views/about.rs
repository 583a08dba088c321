use dioxus::prelude::*;
use ui::content;
use ui::{use_lang, AnimatedCounter, Lang, Page, PageHeader};

use crate::layout::route_for;

#[component]
pub fn About() -> Element {
    let lang = use_lang().current();
    rsx! { AboutPage { lang } }
}

/// Romanian alias of [`About`].
#[component]
pub fn DespreNoi() -> Element {
    let lang = use_lang().current();
    rsx! { AboutPage { lang } }
}

#[component]
fn AboutPage(lang: Lang) -> Element {
    let copy = content::about(lang);

    rsx! {
        PageHeader { title: copy.title, subtitle: copy.subtitle }

        section { class: "section",
            div { class: "container_wide grid_2",
                div { class: "card",
                    h2 { {copy.mission.title} }
                    p { {copy.mission.description} }
                }
                div { class: "card",
                    h2 { {copy.vision.title} }
                    p { {copy.vision.description} }
                }
            }
        }

        section { class: "section section_alt",
            div { class: "container_wide",
                h2 { class: "section_title", {copy.values_title} }
                div { class: "grid_3",
                    for value in copy.values {
                        div { key: "{value.title}", class: "card",
                            h3 { {value.title} }
                            p { {value.description} }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container_wide",
                h2 { class: "section_title", {copy.stats_title} }
                div { class: "grid_4",
                    for stat in copy.stats {
                        div { key: "{stat.label}", class: "stat",
                            AnimatedCounter {
                                value: stat.value,
                                suffix: stat.suffix,
                                color: stat.color.map(String::from),
                            }
                            p { class: "stat_label", {stat.label} }
                        }
                    }
                }
            }
        }

        section { class: "section section_alt",
            div { class: "container_wide",
                div { class: "section_title",
                    h2 { {copy.team_title} }
                    p { class: "lead", {copy.team_subtitle} }
                }
                div { class: "grid_4",
                    for member in copy.team {
                        div { key: "{member.name}", class: "card team_card",
                            div { class: "team_avatar", {initials(member.name)} }
                            h3 { {member.name} }
                            p { class: "team_role", {member.role} }
                            p { {member.description} }
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

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}
