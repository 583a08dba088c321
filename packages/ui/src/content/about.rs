use super::{CtaCopy, Stat, TitledText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub mission: TitledText,
    pub vision: TitledText,
    pub values_title: &'static str,
    pub values: &'static [TitledText],
    pub team_title: &'static str,
    pub team_subtitle: &'static str,
    pub team: &'static [TeamMember],
    pub stats_title: &'static str,
    pub stats: &'static [Stat],
    pub cta: CtaCopy,
}

pub static ABOUT_RO: AboutContent = AboutContent {
    title: "Despre Digitalsense",
    subtitle: "Suntem o echipă pasionată de specialiști în marketing digital, dedicați să transformăm viziunea brandurilor în rezultate concrete.",
    mission: TitledText {
        title: "Misiunea Noastră",
        description: "Să împuternicim afacerile să prospere în era digitală prin strategii inovatoare de marketing, tehnologie avansată și o abordare centată pe rezultate.",
    },
    vision: TitledText {
        title: "Viziunea Noastră",
        description: "Să devenim partenerul de încredere pentru brandurile care vor să își transforme prezența online și să obțină o creștere sustenabilă în mediul digital.",
    },
    values_title: "Valorile Noastre",
    values: &[
        TitledText {
            title: "Orientare către Rezultate",
            description: "Fiecare strategie pe care o dezvoltăm este bazată pe obiective clare și măsurabile.",
        },
        TitledText {
            title: "Inovație Continuă",
            description: "Adoptăm cele mai noi tehnologii și tendințe pentru a oferi soluții de ultimă generație.",
        },
        TitledText {
            title: "Pasiune pentru Excelență",
            description: "Ne dedicăm să depășim așteptările clienților în fiecare proiect pe care îl abordăm.",
        },
    ],
    team_title: "Echipa Noastră",
    team_subtitle: "Profesioniști dedicați cu experiență vastă în marketing digital",
    team: &[
        TeamMember {
            name: "Ana Popescu",
            role: "CEO & Co-fondator",
            description: "10+ ani experiență în marketing digital și strategii de brand.",
        },
        TeamMember {
            name: "Mihai Ionescu",
            role: "Director Tehnic",
            description: "Expert în SEO și dezvoltare web cu background în tehnologii AI.",
        },
        TeamMember {
            name: "Elena Radulescu",
            role: "Social Media Manager",
            description: "Specialist în social media marketing și creație de conținut.",
        },
        TeamMember {
            name: "David Chen",
            role: "AI Marketing Specialist",
            description: "Pionier în implementarea soluțiilor AI pentru marketing automation.",
        },
    ],
    stats_title: "Realizările Noastre",
    stats: &[
        Stat { value: 150, suffix: "+", label: "Clienți Mulțumiți", color: None },
        Stat { value: 500, suffix: "+", label: "Proiecte Finalizate", color: None },
        Stat { value: 300, suffix: "%", label: "Creștere Medie ROI", color: None },
        Stat { value: 5, suffix: "+", label: "Ani de Experiență", color: None },
    ],
    cta: CtaCopy {
        title: "Să Lucrăm Împreună",
        subtitle: "Gata să transformi afacerea ta? Contactează-ne și să discutăm despre viitorul brandului tău.",
        button: "Începe Colaborarea",
    },
};

pub static ABOUT_EN: AboutContent = AboutContent {
    title: "About Digitalsense",
    subtitle: "We are a passionate team of digital marketing specialists, dedicated to transforming brand visions into concrete results.",
    mission: TitledText {
        title: "Our Mission",
        description: "To empower businesses to thrive in the digital age through innovative marketing strategies, advanced technology, and a results-focused approach.",
    },
    vision: TitledText {
        title: "Our Vision",
        description: "To become the trusted partner for brands that want to transform their online presence and achieve sustainable growth in the digital landscape.",
    },
    values_title: "Our Values",
    values: &[
        TitledText {
            title: "Results-Oriented",
            description: "Every strategy we develop is based on clear and measurable objectives.",
        },
        TitledText {
            title: "Continuous Innovation",
            description: "We adopt the latest technologies and trends to provide cutting-edge solutions.",
        },
        TitledText {
            title: "Passion for Excellence",
            description: "We are dedicated to exceeding client expectations in every project we undertake.",
        },
    ],
    team_title: "Our Team",
    team_subtitle: "Dedicated professionals with vast experience in digital marketing",
    team: &[
        TeamMember {
            name: "Ana Popescu",
            role: "CEO & Co-founder",
            description: "10+ years of experience in digital marketing and brand strategies.",
        },
        TeamMember {
            name: "Mihai Ionescu",
            role: "Technical Director",
            description: "SEO expert and web development with AI technology background.",
        },
        TeamMember {
            name: "Elena Radulescu",
            role: "Social Media Manager",
            description: "Specialist in social media marketing and content creation.",
        },
        TeamMember {
            name: "David Chen",
            role: "AI Marketing Specialist",
            description: "Pioneer in implementing AI solutions for marketing automation.",
        },
    ],
    stats_title: "Our Achievements",
    stats: &[
        Stat { value: 150, suffix: "+", label: "Happy Clients", color: None },
        Stat { value: 500, suffix: "+", label: "Completed Projects", color: None },
        Stat { value: 300, suffix: "%", label: "Average ROI Growth", color: None },
        Stat { value: 5, suffix: "+", label: "Years of Experience", color: None },
    ],
    cta: CtaCopy {
        title: "Let's Work Together",
        subtitle: "Ready to transform your business? Contact us and let's discuss the future of your brand.",
        button: "Start Collaboration",
    },
};
