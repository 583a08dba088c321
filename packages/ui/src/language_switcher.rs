use dioxus::prelude::*;

use crate::i18n::{t, Lang};

/// RO / EN toggle. Requests changes through `on_change`.
#[component]
pub fn LanguageSwitcher(lang: Lang, on_change: EventHandler<Lang>) -> Element {
    rsx! {
        div { class: "lang_switch", role: "group", "aria-label": t(lang, "lang.label"),
            for option in Lang::ALL {
                button {
                    key: "{option}",
                    class: if option == lang { "lang_btn active" } else { "lang_btn" },
                    "aria-pressed": option == lang,
                    onclick: move |_| on_change.call(option),
                    {option.code().to_ascii_uppercase()}
                }
            }
        }
    }
}
