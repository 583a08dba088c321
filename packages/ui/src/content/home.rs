use super::{CtaCopy, Stat, TitledText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub cta_secondary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTeaser {
    pub title: &'static str,
    pub description: &'static str,
    pub footer: &'static str,
    pub image_alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeContent {
    pub hero: HeroCopy,
    pub stats_title: &'static str,
    pub stats: &'static [Stat],
    pub services_title: &'static str,
    pub services_subtitle: &'static str,
    /// Social media, SEO, AI, in that order.
    pub services: &'static [ServiceTeaser],
    pub partners: TitledText,
    pub cta: CtaCopy,
}

pub const PARTNER_LOGOS: &[&str] = &[
    "https://redogroup.com/wp-content/uploads/2024/02/logo.svg",
    "https://lightsmart.ro/image/cache/catalog/Logo%20Producatori/Logo-Arelux-870x457.png",
    "https://redogroup.com/wp-content/uploads/2024/02/logo.svg",
    "https://lightsmart.ro/image/cache/catalog/Logo%20Producatori/Logo-Arelux-870x457.png",
    "https://redogroup.com/wp-content/uploads/2024/02/logo.svg",
    "https://lightsmart.ro/image/cache/catalog/Logo%20Producatori/Logo-Arelux-870x457.png",
    "https://redogroup.com/wp-content/uploads/2024/02/logo.svg",
    "https://lightsmart.ro/image/cache/catalog/Logo%20Producatori/Logo-Arelux-870x457.png",
];

pub static HOME_RO: HomeContent = HomeContent {
    hero: HeroCopy {
        title: "Marketing Inteligent.",
        subtitle: "Rezultate Reale.",
        description: "Transformăm prezența ta online cu strategii bazate pe date în Social Media, SEO și Marketing AI.",
        cta: "Explorează Serviciile",
        cta_secondary: "Contactează-ne",
    },
    stats_title: "Rezultate Care Vorbesc",
    stats: &[
        Stat { value: 150, suffix: "+", label: "Clienți Mulțumiți", color: None },
        Stat { value: 300, suffix: "%", label: "Creștere Medie", color: Some("var(--accent)") },
        Stat { value: 500, suffix: "+", label: "Campanii de Succes", color: None },
    ],
    services_title: "Serviciile Noastre",
    services_subtitle: "Soluții complete de marketing digital pentru afacerea ta",
    services: &[
        ServiceTeaser {
            title: "Social Media Marketing",
            description: "Construim și gestionăm prezența ta pe rețelele sociale pentru a maximiza angajamentul și conversiile.",
            footer: "Strategie & Conținut",
            image_alt: "Social Media Marketing",
        },
        ServiceTeaser {
            title: "Optimizare SEO",
            description: "Îmbunătățim vizibilitatea ta în motoarele de căutare pentru a atrage mai mulți clienți potențiali.",
            footer: "SEO Tehnic & de Conținut",
            image_alt: "Optimizare SEO",
        },
        ServiceTeaser {
            title: "Marketing AI",
            description: "Folosim inteligența artificială pentru a automatiza și optimiza campaniile tale de marketing.",
            footer: "Automatizare & Analiză",
            image_alt: "Marketing AI",
        },
    ],
    partners: TitledText {
        title: "Partenerii Noștri de Încredere",
        description: "Colaborăm cu branduri de top pentru a le transforma viziunea în realitate.",
    },
    cta: CtaCopy {
        title: "Gata să Îți Transformi Afacerea?",
        subtitle: "Să discutăm despre cum putem ajuta brandul tău să crească în mediul digital.",
        button: "Solicită Consultație Gratuită",
    },
};

pub static HOME_EN: HomeContent = HomeContent {
    hero: HeroCopy {
        title: "Intelligent Marketing.",
        subtitle: "Real Results.",
        description: "Transform your online presence with data-driven strategies in Social Media, SEO & AI Marketing.",
        cta: "Explore Our Services",
        cta_secondary: "Get in Touch",
    },
    stats_title: "Results That Speak",
    stats: &[
        Stat { value: 150, suffix: "+", label: "Happy Clients", color: None },
        Stat { value: 300, suffix: "%", label: "Average Growth", color: Some("var(--accent)") },
        Stat { value: 500, suffix: "+", label: "Successful Campaigns", color: None },
    ],
    services_title: "Our Services",
    services_subtitle: "Complete digital marketing solutions for your business",
    services: &[
        ServiceTeaser {
            title: "Social Media Marketing",
            description: "We build and manage your social media presence to maximize engagement and conversions.",
            footer: "Strategy & Content",
            image_alt: "Social Media Marketing",
        },
        ServiceTeaser {
            title: "SEO Optimization",
            description: "We improve your search engine visibility to attract more qualified leads.",
            footer: "Technical & Content SEO",
            image_alt: "SEO Optimization",
        },
        ServiceTeaser {
            title: "AI Marketing",
            description: "We leverage artificial intelligence to automate and optimize your marketing campaigns.",
            footer: "Automation & Analytics",
            image_alt: "AI Marketing",
        },
    ],
    partners: TitledText {
        title: "Our Trusted Partners",
        description: "We collaborate with top brands to transform their vision into reality.",
    },
    cta: CtaCopy {
        title: "Ready to Transform Your Business?",
        subtitle: "Let's discuss how we can help your brand grow in the digital landscape.",
        button: "Request Free Consultation",
    },
};
