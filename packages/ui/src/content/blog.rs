#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub coming_soon: &'static str,
    pub description: &'static str,
    pub what_to_expect: &'static str,
    pub topics: &'static [&'static str],
    pub notify: &'static str,
    pub notify_description: &'static str,
    pub subscribe: &'static str,
}

pub static BLOG_RO: BlogContent = BlogContent {
    title: "Blog",
    subtitle: "Înțelepciune și perspective despre marketing digital",
    coming_soon: "În Curând...",
    description: "Ne pregătim să împărtășim cu tine cele mai noi tendințe, strategii și perspective din lumea marketingului digital. Blogul nostru va fi o resursă valoroasă pentru profesioniști și antreprenori.",
    what_to_expect: "Ce Să Te Aștepți:",
    topics: &[
        "Strategii avansate de Social Media Marketing",
        "Ghiduri complete pentru optimizarea SEO",
        "Implementarea AI în campaniile de marketing",
        "Case studies și studii de caz reale",
        "Tendințe și predicții pentru viitor",
        "Sfaturi practice pentru antreprenori",
    ],
    notify: "Fii primul care află când lansăm",
    notify_description: "Abonează-te la newsletter-ul nostru pentru a fi notificat când publicăm primul articol.",
    subscribe: "Abonează-te",
};

pub static BLOG_EN: BlogContent = BlogContent {
    title: "Blog",
    subtitle: "Insights and perspectives on digital marketing",
    coming_soon: "Coming Soon...",
    description: "We are preparing to share with you the latest trends, strategies, and insights from the world of digital marketing. Our blog will be a valuable resource for professionals and entrepreneurs.",
    what_to_expect: "What to Expect:",
    topics: &[
        "Advanced Social Media Marketing strategies",
        "Complete guides for SEO optimization",
        "Implementing AI in marketing campaigns",
        "Real case studies and success stories",
        "Trends and predictions for the future",
        "Practical tips for entrepreneurs",
    ],
    notify: "Be the first to know when we launch",
    notify_description: "Subscribe to our newsletter to be notified when we publish our first article.",
    subscribe: "Subscribe",
};
