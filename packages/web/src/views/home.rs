use dioxus::prelude::*;
use ui::content::{self, PARTNER_LOGOS};
use ui::{use_lang, AnimatedCounter, CardVariant, Hero, Lang, LogoLoop, Page, PixelCard};

use crate::layout::route_for;

const CARD_VARIANTS: [CardVariant; 3] = [CardVariant::Yellow, CardVariant::Green, CardVariant::Purple];

#[component]
pub fn Home() -> Element {
    let lang = use_lang().current();
    rsx! { HomePage { lang } }
}

#[component]
fn HomePage(lang: Lang) -> Element {
    let copy = content::home(lang);
    let logos: Vec<String> = PARTNER_LOGOS.iter().map(|logo| logo.to_string()).collect();

    rsx! {
        Hero {
            title: copy.hero.title,
            subtitle: copy.hero.subtitle,
            description: copy.hero.description,
            Link { class: "btn primary", to: route_for(Page::Services, lang), "{copy.hero.cta} →" }
            Link { class: "btn", to: route_for(Page::Contact, lang), {copy.hero.cta_secondary} }
        }

        section { class: "section section_alt",
            div { class: "container_wide",
                h2 { class: "section_title", {copy.stats_title} }
                div { class: "grid_3",
                    for stat in copy.stats {
                        div { key: "{stat.value}{stat.suffix}", class: "stat",
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

        section { class: "section",
            div { class: "container_wide",
                div { class: "section_title",
                    h2 { {copy.services_title} }
                    p { class: "lead", {copy.services_subtitle} }
                }
                div { class: "grid_3",
                    for (service, variant) in copy.services.iter().zip(CARD_VARIANTS) {
                        Link { key: "{service.title}", to: route_for(Page::Services, lang),
                            PixelCard {
                                variant,
                                title: service.title,
                                description: service.description,
                                image_alt: service.image_alt,
                                footer_text: service.footer,
                            }
                        }
                    }
                }
            }
        }

        section { class: "section section_alt",
            div { class: "container_wide",
                div { class: "section_title",
                    h2 { {copy.partners.title} }
                    p { class: "lead", {copy.partners.description} }
                }
                LogoLoop {
                    logos,
                    logo_height: 60,
                    gap: 60,
                    pause_on_hover: true,
                    scale_on_hover: true,
                    fade_out: true,
                    fade_out_color: "#f8fafc",
                    aria_label: copy.partners.title,
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
