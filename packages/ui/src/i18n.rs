use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::error::I18nError;
use crate::storage::{default_storage, PreferenceStorage};

/// Key of the persisted language preference.
pub const LANGUAGE_STORAGE_KEY: &str = "digitalsense-language";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Ro,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Ro, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ro => "ro",
            Lang::En => "en",
        }
    }

    /// Exact match on a stored code. Anything else is not a language.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ro" => Some(Lang::Ro),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Infer a language from a locale tag such as `ro-RO` or `en-US`.
    pub fn from_locale(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if tag.to_ascii_lowercase().starts_with("ro") => Lang::Ro,
            _ => Lang::En,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| I18nError::UnknownLanguage(s.to_string()))
    }
}

/// Resolve the startup language from the persisted record and the locale.
pub fn resolve_language(persisted: Option<&str>, locale: Option<&str>) -> Lang {
    match persisted.and_then(Lang::from_code) {
        Some(lang) => lang,
        None => Lang::from_locale(locale),
    }
}

/// Single source of truth for the display language.
pub struct LanguageStore {
    current: Lang,
    storage: Box<dyn PreferenceStorage>,
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl LanguageStore {
    /// Resolve the initial language. The inferred value is not persisted.
    pub fn initialize(storage: Box<dyn PreferenceStorage>, locale: Option<&str>) -> Self {
        let persisted = match storage.read(LANGUAGE_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!("language preference unreadable, inferring: {err}");
                None
            }
        };
        let current = resolve_language(persisted.as_deref(), locale);
        debug!(
            persisted = persisted.as_deref().unwrap_or("<none>"),
            locale = locale.unwrap_or("<none>"),
            %current,
            "language resolved"
        );
        Self { current, storage }
    }

    /// Platform storage plus the OS or browser locale.
    pub fn from_environment() -> Self {
        let locale = sys_locale::get_locale();
        Self::initialize(default_storage(), locale.as_deref())
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    pub fn set(&mut self, lang: Lang) {
        self.current = lang;
        if let Err(err) = self.storage.write(LANGUAGE_STORAGE_KEY, lang.code()) {
            warn!("language preference not persisted: {err}");
        }
        info!(%lang, "language switched");
    }

    pub fn set_code(&mut self, code: &str) -> Result<(), I18nError> {
        let lang = code.parse::<Lang>()?;
        self.set(lang);
        Ok(())
    }
}

/// Reactive handle to the store, provided by [`I18nProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct LanguageHandle {
    store: Signal<LanguageStore>,
}

impl LanguageHandle {
    pub fn current(&self) -> Lang {
        self.store.read().current()
    }

    pub fn set(&self, lang: Lang) {
        let mut store = self.store;
        store.write().set(lang);
    }

    pub fn set_code(&self, code: &str) -> Result<(), I18nError> {
        let mut store = self.store;
        let lang = code.parse::<Lang>()?;
        store.write().set(lang);
        Ok(())
    }
}

/// Resolve the language once and provide it to the component tree.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let store = use_signal(LanguageStore::from_environment);
    use_context_provider(|| LanguageHandle { store });

    use_effect(move || {
        let code = store.read().current().code();
        spawn(async move {
            if let Err(err) = document::eval(&format!(
                r#"(function(){{ document.documentElement.lang = "{code}"; return ""; }})()"#
            ))
            .await
            {
                debug!("<html lang> not updated to {code}: {err:?}");
            }
        });
    });

    rsx! { {children} }
}

pub fn try_use_lang() -> Result<LanguageHandle, I18nError> {
    try_use_context::<LanguageHandle>().ok_or(I18nError::MissingProvider)
}

/// Like [`try_use_lang`], but panics outside of [`I18nProvider`].
pub fn use_lang() -> LanguageHandle {
    match try_use_lang() {
        Ok(handle) => handle,
        Err(err) => panic!("{err}"),
    }
}

/// Keys served by [`t`].
#[cfg(test)]
const CHROME_KEYS: &[&str] = &[
    "brand.name",
    "brand.alt",
    "nav.home",
    "nav.services",
    "nav.about",
    "nav.contact",
    "nav.blog",
    "nav.menu",
    "lang.label",
    "footer.tagline",
    "footer.quick_links",
    "footer.contact",
    "footer.follow_us",
    "footer.address",
    "footer.email",
    "footer.phone",
    "footer.copyright",
    "toast.dismiss",
    "not_found.title",
    "not_found.body",
    "not_found.back",
];

/// Translate a shared UI string. Falls back to Romanian, then to the key.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        (_, "brand.name") => "Digitalsense".to_string(),
        (_, "brand.alt") => "Digitalsense - Intelligent Web Solutions".to_string(),

        (Lang::Ro, "nav.home") => "Acasă".to_string(),
        (Lang::En, "nav.home") => "Home".to_string(),
        (Lang::Ro, "nav.services") => "Servicii".to_string(),
        (Lang::En, "nav.services") => "Services".to_string(),
        (Lang::Ro, "nav.about") => "Despre noi".to_string(),
        (Lang::En, "nav.about") => "About Us".to_string(),
        (Lang::Ro, "nav.contact") => "Contact".to_string(),
        (Lang::En, "nav.contact") => "Contact".to_string(),
        (Lang::Ro, "nav.blog") => "Blog".to_string(),
        (Lang::En, "nav.blog") => "Blog".to_string(),
        (Lang::Ro, "nav.menu") => "Deschide meniul".to_string(),
        (Lang::En, "nav.menu") => "Toggle menu".to_string(),
        (Lang::Ro, "lang.label") => "Limbă".to_string(),
        (Lang::En, "lang.label") => "Language".to_string(),

        // Footer
        (Lang::Ro, "footer.tagline") => "Agenție de marketing digital specializată în Social Media, SEO și soluții de marketing AI.".to_string(),
        (Lang::En, "footer.tagline") => "Digital marketing agency specialized in Social Media, SEO and AI marketing solutions.".to_string(),
        (Lang::Ro, "footer.quick_links") => "Link-uri rapide".to_string(),
        (Lang::En, "footer.quick_links") => "Quick Links".to_string(),
        (Lang::Ro, "footer.contact") => "Contact".to_string(),
        (Lang::En, "footer.contact") => "Contact".to_string(),
        (Lang::Ro, "footer.follow_us") => "Urmărește-ne".to_string(),
        (Lang::En, "footer.follow_us") => "Follow Us".to_string(),
        (Lang::Ro, "footer.address") => "Str. Exemplu nr. 123, București, România".to_string(),
        (Lang::En, "footer.address") => "123 Example Street, Bucharest, Romania".to_string(),
        (Lang::Ro, "footer.email") => "contact@digitalsense.ro".to_string(),
        (Lang::En, "footer.email") => "contact@digitalsense.com".to_string(),
        (_, "footer.phone") => "+40 721 234 567".to_string(),
        (Lang::Ro, "footer.copyright") => "© 2025 Digitalsense. Toate drepturile rezervate.".to_string(),
        (Lang::En, "footer.copyright") => "© 2025 Digitalsense. All rights reserved.".to_string(),

        (Lang::Ro, "toast.dismiss") => "Închide".to_string(),
        (Lang::En, "toast.dismiss") => "Dismiss".to_string(),

        (Lang::Ro, "not_found.title") => "Pagina nu a fost găsită".to_string(),
        (Lang::En, "not_found.title") => "Page not found".to_string(),
        (Lang::Ro, "not_found.body") => "Pagina pe care o cauți nu există sau a fost mutată.".to_string(),
        (Lang::En, "not_found.body") => "The page you are looking for does not exist or has moved.".to_string(),
        (Lang::Ro, "not_found.back") => "Înapoi la pagina principală".to_string(),
        (Lang::En, "not_found.back") => "Back to home".to_string(),

        (Lang::En, k) => t(Lang::Ro, k),
        (Lang::Ro, _) => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStorage;
    use dioxus::core::NoOpMutations;
    use std::cell::{Cell, RefCell};

    struct BrokenStorage;

    impl PreferenceStorage for BrokenStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write { key: key.to_string() })
        }
    }

    fn store_with(persisted: Option<&str>, locale: Option<&str>) -> LanguageStore {
        let storage = match persisted {
            Some(value) => MemoryStorage::with_value(LANGUAGE_STORAGE_KEY, value),
            None => MemoryStorage::default(),
        };
        LanguageStore::initialize(Box::new(storage), locale)
    }

    #[test]
    fn persisted_value_wins_over_locale() {
        assert_eq!(store_with(Some("ro"), Some("en-US")).current(), Lang::Ro);
        assert_eq!(store_with(Some("en"), Some("ro-RO")).current(), Lang::En);
    }

    #[test]
    fn invalid_persisted_value_falls_back_to_locale() {
        for stored in ["", "RO", "En", "fr", "romanian", " ro"] {
            assert_eq!(store_with(Some(stored), Some("ro-RO")).current(), Lang::Ro, "{stored:?}");
            assert_eq!(store_with(Some(stored), Some("en-GB")).current(), Lang::En, "{stored:?}");
        }
        assert_eq!(store_with(None, Some("ro")).current(), Lang::Ro);
    }

    #[test]
    fn locale_inference() {
        assert_eq!(Lang::from_locale(Some("ro-RO")), Lang::Ro);
        assert_eq!(Lang::from_locale(Some("ro")), Lang::Ro);
        assert_eq!(Lang::from_locale(Some("RO-MD")), Lang::Ro);
        assert_eq!(Lang::from_locale(Some("en-US")), Lang::En);
        assert_eq!(Lang::from_locale(Some("fr-FR")), Lang::En);
        assert_eq!(Lang::from_locale(Some("")), Lang::En);
        assert_eq!(Lang::from_locale(None), Lang::En);
    }

    #[test]
    fn inferred_language_is_not_persisted() {
        let storage = MemoryStorage::default();
        let store = LanguageStore::initialize(Box::new(storage.clone()), Some("ro-RO"));
        assert_eq!(store.current(), Lang::Ro);
        assert_eq!(storage.read(LANGUAGE_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn set_persists_across_reload() {
        let storage = MemoryStorage::default();
        let mut store = LanguageStore::initialize(Box::new(storage.clone()), Some("ro-RO"));
        store.set(Lang::En);
        assert_eq!(store.current(), Lang::En);
        assert_eq!(storage.read(LANGUAGE_STORAGE_KEY).unwrap().as_deref(), Some("en"));

        // A Romanian locale would infer `ro`; the persisted choice must win.
        let reloaded = LanguageStore::initialize(Box::new(storage), Some("ro-RO"));
        assert_eq!(reloaded.current(), Lang::En);
    }

    #[test]
    fn unknown_code_leaves_state_unchanged() {
        let storage = MemoryStorage::default();
        let mut store = LanguageStore::initialize(Box::new(storage.clone()), Some("en-US"));
        let err = store.set_code("de").unwrap_err();
        assert_eq!(err, I18nError::UnknownLanguage("de".to_string()));
        assert_eq!(store.current(), Lang::En);
        assert_eq!(storage.read(LANGUAGE_STORAGE_KEY).unwrap(), None);

        store.set_code("ro").unwrap();
        assert_eq!(store.current(), Lang::Ro);
    }

    #[test]
    fn broken_storage_degrades_to_memory() {
        let mut store = LanguageStore::initialize(Box::new(BrokenStorage), Some("ro-RO"));
        assert_eq!(store.current(), Lang::Ro);
        store.set(Lang::En);
        assert_eq!(store.current(), Lang::En);
    }

    #[test]
    fn codes_round_trip_through_display() {
        for lang in Lang::ALL {
            assert_eq!(lang.to_string().parse::<Lang>(), Ok(lang));
        }
    }

    #[test]
    fn every_chrome_key_is_translated_in_both_languages() {
        for key in CHROME_KEYS {
            for lang in Lang::ALL {
                let text = t(lang, key);
                assert_ne!(text, *key, "{key} missing for {lang}");
                assert!(!text.is_empty());
            }
        }
        assert_eq!(t(Lang::Ro, "nav.about"), "Despre noi");
        assert_eq!(t(Lang::En, "nav.about"), "About Us");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(t(Lang::En, "missing.key"), "missing.key");
    }

    thread_local! {
        static SEEN: RefCell<Option<Result<Lang, I18nError>>> = const { RefCell::new(None) };
    }

    #[allow(non_snake_case)]
    fn Reader() -> Element {
        let seen = try_use_lang().map(|handle| handle.current());
        SEEN.with(|slot| *slot.borrow_mut() = Some(seen));
        rsx! {}
    }

    #[allow(non_snake_case)]
    fn Unprovided() -> Element {
        rsx! { Reader {} }
    }

    #[allow(non_snake_case)]
    fn Provided() -> Element {
        rsx! {
            I18nProvider { Reader {} }
        }
    }

    #[test]
    fn accessor_fails_outside_provider() {
        let mut dom = VirtualDom::new(Unprovided);
        dom.rebuild_in_place();
        let seen = SEEN.with(|slot| slot.borrow_mut().take());
        assert_eq!(seen, Some(Err(I18nError::MissingProvider)));
    }

    #[test]
    fn accessor_succeeds_inside_provider() {
        let mut dom = VirtualDom::new(Provided);
        dom.rebuild_in_place();
        let seen = SEEN.with(|slot| slot.borrow_mut().take());
        assert!(matches!(seen, Some(Ok(_))));
    }

    thread_local! {
        static HANDLE: Cell<Option<LanguageHandle>> = const { Cell::new(None) };
    }

    #[allow(non_snake_case)]
    fn Switcher() -> Element {
        let handle = use_lang();
        HANDLE.with(|slot| slot.set(Some(handle)));
        rsx! { Reader {} }
    }

    #[allow(non_snake_case)]
    fn Switchable() -> Element {
        rsx! {
            I18nProvider { Switcher {} }
        }
    }

    fn switch(
        dom: &mut VirtualDom,
        apply: impl FnOnce(LanguageHandle) -> Result<(), I18nError>,
    ) -> Result<(), I18nError> {
        let handle = HANDLE.with(Cell::get).unwrap();
        let outcome = dom.in_runtime(|| apply(handle));
        dom.process_events();
        dom.render_immediate(&mut NoOpMutations);
        outcome
    }

    fn last_seen() -> Option<Result<Lang, I18nError>> {
        SEEN.with(|slot| slot.borrow().clone())
    }

    #[test]
    fn consumers_rerender_after_a_switch() {
        let mut dom = VirtualDom::new(Switchable);
        dom.rebuild_in_place();

        switch(&mut dom, |handle| {
            handle.set(Lang::Ro);
            Ok(())
        })
        .unwrap();
        assert_eq!(last_seen(), Some(Ok(Lang::Ro)));

        switch(&mut dom, |handle| handle.set_code("en")).unwrap();
        assert_eq!(last_seen(), Some(Ok(Lang::En)));
    }

    #[test]
    fn rejected_code_leaves_the_handle_unchanged() {
        let mut dom = VirtualDom::new(Switchable);
        dom.rebuild_in_place();
        switch(&mut dom, |handle| handle.set_code("en")).unwrap();

        let err = switch(&mut dom, |handle| handle.set_code("EN")).unwrap_err();
        assert_eq!(err, I18nError::UnknownLanguage("EN".to_string()));
        let handle = HANDLE.with(Cell::get).unwrap();
        assert_eq!(dom.in_runtime(|| handle.current()), Lang::En);
        assert_eq!(last_seen(), Some(Ok(Lang::En)));
    }

    #[test]
    fn html_lang_sync_survives_a_document_without_eval() {
        let mut dom = VirtualDom::new(Switchable);
        dom.rebuild_in_place();
        // Runs the provider effect and its eval task against the no-op document.
        dom.process_events();
        dom.process_events();

        switch(&mut dom, |handle| handle.set_code("ro")).unwrap();
        dom.process_events();
        assert_eq!(last_seen(), Some(Ok(Lang::Ro)));
    }
}
