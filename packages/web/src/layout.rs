use dioxus::prelude::*;
use ui::{t, use_lang, Lang, LanguageSwitcher, Page};

use crate::Route;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Route for `page` under the path alias that matches `lang`.
pub fn route_for(page: Page, lang: Lang) -> Route {
    match (page, lang) {
        (Page::Home, _) => Route::Home {},
        (Page::Services, Lang::Ro) => Route::Servicii {},
        (Page::Services, Lang::En) => Route::Services {},
        (Page::About, Lang::Ro) => Route::DespreNoi {},
        (Page::About, Lang::En) => Route::About {},
        (Page::Contact, _) => Route::Contact {},
        (Page::Blog, _) => Route::Blog {},
    }
}

fn page_of(route: &Route) -> Option<Page> {
    Page::from_path(&route.to_string())
}

/// Header, routed page, footer.
#[component]
pub fn SiteLayout() -> Element {
    let handle = use_lang();
    let lang = handle.current();

    rsx! {
        SiteHeader { lang, on_change: move |next| handle.set(next) }
        main { class: "route_view", Outlet::<Route> {} }
        SiteFooter { lang }
    }
}

#[component]
fn SiteHeader(lang: Lang, on_change: EventHandler<Lang>) -> Element {
    let route = use_route::<Route>();
    let active = page_of(&route);
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "site_header",
            div { class: "container_wide header_inner",
                Link { class: "brand", to: Route::Home {},
                    img { class: "brand_logo", src: LOGO, alt: t(lang, "brand.alt") }
                    span { class: "brand_name", {t(lang, "brand.name")} }
                }
                nav { class: "nav_links",
                    for page in Page::NAVIGATION {
                        Link {
                            key: "{page:?}",
                            class: if active == Some(page) { "nav_link active" } else { "nav_link" },
                            to: route_for(page, lang),
                            {page.label(lang)}
                        }
                    }
                }
                div { class: "header_actions",
                    LanguageSwitcher { lang, on_change }
                    button {
                        class: "menu_toggle",
                        "aria-label": t(lang, "nav.menu"),
                        "aria-expanded": menu_open(),
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }
            if menu_open() {
                nav { class: "mobile_nav",
                    for page in Page::NAVIGATION {
                        Link {
                            key: "{page:?}",
                            class: if active == Some(page) { "nav_link active" } else { "nav_link" },
                            to: route_for(page, lang),
                            onclick: move |_| menu_open.set(false),
                            {page.label(lang)}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SiteFooter(lang: Lang) -> Element {
    let email = t(lang, "footer.email");
    let phone = t(lang, "footer.phone");

    rsx! {
        footer { class: "site_footer",
            div { class: "container_wide footer_grid",
                div { class: "footer_brand",
                    img { class: "brand_logo", src: LOGO, alt: t(lang, "brand.alt") }
                    p { {t(lang, "footer.tagline")} }
                }
                div {
                    h4 { {t(lang, "footer.quick_links")} }
                    ul { class: "footer_links",
                        for page in Page::NAVIGATION {
                            li { key: "{page:?}",
                                Link { to: route_for(page, lang), {page.label(lang)} }
                            }
                        }
                    }
                }
                div {
                    h4 { {t(lang, "footer.contact")} }
                    ul { class: "footer_contact",
                        li { "📍 " {t(lang, "footer.address")} }
                        li { a { href: "mailto:{email}", "✉ {email}" } }
                        li { a { href: "tel:{phone}", "☎ {phone}" } }
                    }
                }
                div {
                    h4 { {t(lang, "footer.follow_us")} }
                    div { class: "footer_social",
                        a { href: "#", "aria-label": "Facebook", "Facebook" }
                        a { href: "#", "aria-label": "LinkedIn", "LinkedIn" }
                    }
                }
            }
            div { class: "footer_bottom container_wide", {t(lang, "footer.copyright")} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_routes_match_localized_paths() {
        for lang in Lang::ALL {
            for page in Page::NAVIGATION {
                let route = route_for(page, lang);
                assert_eq!(route.to_string(), page.path(lang));
                assert_eq!(page_of(&route), Some(page));
            }
        }
    }

    #[test]
    fn not_found_has_no_page() {
        let route = Route::NotFound {
            segments: vec!["nowhere".to_string()],
        };
        assert_eq!(page_of(&route), None);
    }
}
