use crate::i18n::{t, Lang};

/// Top-level pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Services,
    About,
    Contact,
    Blog,
}

impl Page {
    /// Pages shown in the header and footer navigation.
    pub const NAVIGATION: [Page; 4] = [Page::Home, Page::Services, Page::About, Page::Contact];

    /// Localized path. Every page is also reachable through its other alias.
    pub fn path(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Page::Home, _) => "/",
            (Page::Services, Lang::Ro) => "/servicii",
            (Page::Services, Lang::En) => "/services",
            (Page::About, Lang::Ro) => "/despre-noi",
            (Page::About, Lang::En) => "/about",
            (Page::Contact, _) => "/contact",
            (Page::Blog, _) => "/blog",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match path {
            "/" => Some(Page::Home),
            "/services" | "/servicii" => Some(Page::Services),
            "/about" | "/despre-noi" => Some(Page::About),
            "/contact" => Some(Page::Contact),
            "/blog" => Some(Page::Blog),
            _ => None,
        }
    }

    pub fn label(self, lang: Lang) -> String {
        let key = match self {
            Page::Home => "nav.home",
            Page::Services => "nav.services",
            Page::About => "nav.about",
            Page::Contact => "nav.contact",
            Page::Blog => "nav.blog",
        };
        t(lang, key)
    }
}
