use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const WIDGETS_CSS: Asset = asset!("/assets/styling/widgets.css");

#[component]
pub fn SiteTheme() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: WIDGETS_CSS }
    }
}
