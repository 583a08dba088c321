use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Left,
    Right,
}

impl ScrollDirection {
    fn css(self) -> &'static str {
        match self {
            ScrollDirection::Left => "normal",
            ScrollDirection::Right => "reverse",
        }
    }
}

/// The track holds the logos twice so translating by -50% loops seamlessly.
pub fn loop_track(logos: &[String]) -> Vec<String> {
    logos.iter().chain(logos.iter()).cloned().collect()
}

/// One full cycle lasts two seconds per logo.
pub fn cycle_seconds(logo_count: usize) -> usize {
    logo_count.max(1) * 2
}

/// Endless horizontal marquee of partner logos.
#[component]
pub fn LogoLoop(
    logos: Vec<String>,
    #[props(default)] direction: ScrollDirection,
    #[props(default = 48)] logo_height: u32,
    #[props(default = 40)] gap: u32,
    #[props(default = false)] pause_on_hover: bool,
    #[props(default = false)] scale_on_hover: bool,
    #[props(default = false)] fade_out: bool,
    #[props(into, default = "#ffffff".to_string())] fade_out_color: String,
    #[props(into, default = "Logo carousel".to_string())] aria_label: String,
) -> Element {
    let mut hovered = use_signal(|| false);

    let track = loop_track(&logos);
    let last = track.len().saturating_sub(1);
    let play_state = if hovered() && pause_on_hover {
        "paused"
    } else {
        "running"
    };
    let scale = if scale_on_hover && hovered() {
        "scale(1.1)"
    } else {
        "scale(1)"
    };
    let track_style = format!(
        "animation: logoScroll {}s linear infinite; animation-direction: {}; animation-play-state: {play_state};",
        cycle_seconds(logos.len()),
        direction.css(),
    );

    rsx! {
        div {
            class: "logo_loop",
            "aria-label": "{aria_label}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            if fade_out {
                div {
                    class: "logo_loop_fade logo_loop_fade_left",
                    style: "background: linear-gradient(to right, {fade_out_color}, transparent);",
                }
                div {
                    class: "logo_loop_fade logo_loop_fade_right",
                    style: "background: linear-gradient(to left, {fade_out_color}, transparent);",
                }
            }

            div { class: "logo_loop_track", style: "{track_style}",
                for (index, logo) in track.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "logo_loop_item",
                        style: format!(
                            "height: {logo_height}px; margin-right: {}px; transform: {scale};",
                            if index < last { gap } else { 0 },
                        ),
                        img {
                            src: "{logo}",
                            alt: format!("Partner logo {}", index + 1),
                            style: "height: {logo_height}px;",
                            "loading": "lazy",
                        }
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
    fn track_repeats_logos_once() {
        let logos = vec!["a.svg".to_string(), "b.png".to_string()];
        assert_eq!(loop_track(&logos), vec!["a.svg", "b.png", "a.svg", "b.png"]);
        assert!(loop_track(&[]).is_empty());
    }

    #[test]
    fn cycle_scales_with_logo_count() {
        assert_eq!(cycle_seconds(8), 16);
        assert_eq!(cycle_seconds(0), 2);
    }
}
