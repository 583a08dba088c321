use dioxus::prelude::*;

/// Brand colour family of a [`PixelCard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Yellow,
    Green,
    Purple,
}

impl CardVariant {
    pub fn class(self) -> &'static str {
        match self {
            CardVariant::Yellow => "pixel_card pixel_card_yellow",
            CardVariant::Green => "pixel_card pixel_card_green",
            CardVariant::Purple => "pixel_card pixel_card_purple",
        }
    }
}

/// Service card with a gradient icon tile and pixel corners on hover.
#[component]
pub fn PixelCard(
    #[props(default)] variant: CardVariant,
    #[props(into)] title: String,
    #[props(into)] description: String,
    #[props(into)] image_src: Option<String>,
    #[props(into)] image_alt: Option<String>,
    #[props(into)] footer_text: Option<String>,
) -> Element {
    let alt = image_alt.unwrap_or_else(|| title.clone());

    rsx! {
        div { class: variant.class(),
            div { class: "pixel_card_glow" }
            div { class: "pixel_card_corners",
                span { class: "corner corner_tl" }
                span { class: "corner corner_tr" }
                span { class: "corner corner_bl" }
                span { class: "corner corner_br" }
            }
            div { class: "pixel_card_body",
                div { class: "pixel_card_icon",
                    if let Some(src) = image_src {
                        img { src: "{src}", alt: "{alt}" }
                    } else {
                        span { class: "pixel_card_check", "✓" }
                    }
                }
                h3 { class: "pixel_card_title", "{title}" }
                p { class: "pixel_card_description", "{description}" }
                if let Some(footer) = footer_text {
                    div { class: "pixel_card_footer",
                        span { class: "pixel_card_check", "✓" }
                        span { "{footer}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_have_distinct_classes() {
        let classes = [
            CardVariant::Yellow.class(),
            CardVariant::Green.class(),
            CardVariant::Purple.class(),
        ];
        assert!(classes.iter().all(|c| c.starts_with("pixel_card ")));
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_eq!(CardVariant::default(), CardVariant::Yellow);
    }
}
