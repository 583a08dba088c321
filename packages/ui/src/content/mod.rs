//! Static bilingual copy. Each page owns one table per language, selected by
//! an exhaustive match so a language can never lack a branch.

mod about;
mod blog;
mod contact;
mod home;
mod services;

pub use about::{AboutContent, TeamMember, ABOUT_EN, ABOUT_RO};
pub use blog::{BlogContent, BLOG_EN, BLOG_RO};
pub use contact::{ContactContent, FormCopy, InfoItem, CONTACT_EN, CONTACT_RO};
pub use home::{HomeContent, HeroCopy, ServiceTeaser, HOME_EN, HOME_RO, PARTNER_LOGOS};
pub use services::{ServiceDetail, ServicesContent, SERVICES_EN, SERVICES_RO};

use crate::i18n::Lang;

/// Title plus one paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitledText {
    pub title: &'static str,
    pub description: &'static str,
}

/// Closing call-to-action band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button: &'static str,
}

/// Headline figure rendered with an animated counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u64,
    pub suffix: &'static str,
    pub label: &'static str,
    /// CSS colour for the figure, when it differs from the primary one.
    pub color: Option<&'static str>,
}

pub fn home(lang: Lang) -> &'static HomeContent {
    match lang {
        Lang::Ro => &HOME_RO,
        Lang::En => &HOME_EN,
    }
}

pub fn services(lang: Lang) -> &'static ServicesContent {
    match lang {
        Lang::Ro => &SERVICES_RO,
        Lang::En => &SERVICES_EN,
    }
}

pub fn about(lang: Lang) -> &'static AboutContent {
    match lang {
        Lang::Ro => &ABOUT_RO,
        Lang::En => &ABOUT_EN,
    }
}

pub fn contact(lang: Lang) -> &'static ContactContent {
    match lang {
        Lang::Ro => &CONTACT_RO,
        Lang::En => &CONTACT_EN,
    }
}

pub fn blog(lang: Lang) -> &'static BlogContent {
    match lang {
        Lang::Ro => &BLOG_RO,
        Lang::En => &BLOG_EN,
    }
}
