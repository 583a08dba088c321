//! Shared UI for the Digitalsense site: language store, content tables and
//! presentational widgets.

mod error;
pub use error::{I18nError, StorageError};

mod storage;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
pub use storage::{default_storage, MemoryStorage, PreferenceStorage};

mod i18n;
pub use i18n::{
    resolve_language, t, try_use_lang, use_lang, I18nProvider, Lang, LanguageHandle,
    LanguageStore, LANGUAGE_STORAGE_KEY,
};

mod reveal;
pub use reveal::{
    drive, BrowserFrames, FrameSource, RevealAnimation, RevealPhase, Visibility,
    DEFAULT_DURATION_MS, DEFAULT_THRESHOLD,
};

mod counter;
pub use counter::AnimatedCounter;

mod logo_loop;
pub use logo_loop::{LogoLoop, ScrollDirection};

mod pixel_card;
pub use pixel_card::{CardVariant, PixelCard};

mod hero;
pub use hero::{Hero, PageHeader};

mod language_switcher;
pub use language_switcher::LanguageSwitcher;

mod toast;
pub use toast::{use_toasts, Toast, ToastKind, ToastProvider, Toasts};

mod theme;
pub use theme::SiteTheme;

mod config;
pub use config::{AppMode, SiteConfig};

mod nav;
pub use nav::Page;

mod contact_form;
pub use contact_form::{ContactField, ContactForm};

pub mod content;
