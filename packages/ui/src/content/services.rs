use super::CtaCopy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDetail {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub process_title: &'static str,
    pub steps: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicesContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Social media, SEO, AI, in that order.
    pub services: &'static [ServiceDetail],
    pub cta: CtaCopy,
}

pub static SERVICES_RO: ServicesContent = ServicesContent {
    title: "Serviciile Noastre",
    subtitle: "Soluții complete de marketing digital adaptate nevoilor afacerii tale",
    services: &[
        ServiceDetail {
            title: "Social Media Marketing",
            description: "Construim și gestionăm prezența ta pe rețelele sociale pentru a maximiza angajamentul și conversiile. Strategiile noastre personalizate sunt create pentru a reflecta vocea brandului tău.",
            features: &[
                "Strategie de conținut personalizată",
                "Gestionare comunitate 24/7",
                "Campanii publicitare targetate",
                "Analiză și raportare detaliată",
                "Influencer marketing",
                "Creație video și grafică",
            ],
            process_title: "Procesul Nostru",
            steps: &[
                "Audit și analiză competitori",
                "Dezvoltare strategie de brand",
                "Creație conținut și calendar",
                "Implementare și monitorizare",
            ],
        },
        ServiceDetail {
            title: "Optimizare SEO",
            description: "Îmbunătățim vizibilitatea ta în motoarele de căutare pentru a atrage mai mulți clienți potențiali calificați. Folosim cele mai noi tehnici și instrumente pentru rezultate durabile.",
            features: &[
                "Audit SEO complet",
                "Optimizare tehnică on-page",
                "Strategie de cuvinte cheie",
                "Link building de calitate",
                "SEO local și Google My Business",
                "Monitorizare și raportare",
            ],
            process_title: "Procesul Nostru",
            steps: &[
                "Audit și analiză site",
                "Cercetare cuvinte cheie",
                "Optimizare tehnică",
                "Monitorizare și îmbunătățire",
            ],
        },
        ServiceDetail {
            title: "Marketing AI",
            description: "Folosim inteligența artificială pentru a automatiza și optimiza campaniile tale de marketing. Soluțiile noastre AI te ajută să iei decizii mai bune bazate pe date.",
            features: &[
                "Automatizare campanii",
                "Personalizare conținut",
                "Analiză predictivă",
                "Chatbots inteligenți",
                "Optimizare conversii",
                "Targeting avansat",
            ],
            process_title: "Procesul Nostru",
            steps: &[
                "Analiză date existente",
                "Implementare soluții AI",
                "Training și optimizare",
                "Monitorizare și scalare",
            ],
        },
    ],
    cta: CtaCopy {
        title: "Gata să Începem?",
        subtitle: "Contactează-ne pentru o consultație gratuită și să discutăm cum putem ajuta afacerea ta să crească.",
        button: "Contactează-ne Acum",
    },
};

pub static SERVICES_EN: ServicesContent = ServicesContent {
    title: "Our Services",
    subtitle: "Complete digital marketing solutions tailored to your business needs",
    services: &[
        ServiceDetail {
            title: "Social Media Marketing",
            description: "We build and manage your social media presence to maximize engagement and conversions. Our personalized strategies are crafted to reflect your brand voice.",
            features: &[
                "Custom content strategy",
                "24/7 community management",
                "Targeted advertising campaigns",
                "Detailed analytics and reporting",
                "Influencer marketing",
                "Video and graphic creation",
            ],
            process_title: "Our Process",
            steps: &[
                "Audit & competitor analysis",
                "Brand strategy development",
                "Content creation & calendar",
                "Implementation & monitoring",
            ],
        },
        ServiceDetail {
            title: "SEO Optimization",
            description: "We improve your search engine visibility to attract more qualified leads. Using the latest techniques and tools for sustainable results.",
            features: &[
                "Complete SEO audit",
                "Technical on-page optimization",
                "Keyword strategy",
                "Quality link building",
                "Local SEO & Google My Business",
                "Monitoring and reporting",
            ],
            process_title: "Our Process",
            steps: &[
                "Site audit & analysis",
                "Keyword research",
                "Technical optimization",
                "Monitoring & improvement",
            ],
        },
        ServiceDetail {
            title: "AI Marketing",
            description: "We leverage artificial intelligence to automate and optimize your marketing campaigns. Our AI solutions help you make better data-driven decisions.",
            features: &[
                "Campaign automation",
                "Content personalization",
                "Predictive analytics",
                "Intelligent chatbots",
                "Conversion optimization",
                "Advanced targeting",
            ],
            process_title: "Our Process",
            steps: &[
                "Existing data analysis",
                "AI solution implementation",
                "Training & optimization",
                "Monitoring & scaling",
            ],
        },
    ],
    cta: CtaCopy {
        title: "Ready to Get Started?",
        subtitle: "Contact us for a free consultation and let's discuss how we can help your business grow.",
        button: "Contact Us Now",
    },
};
