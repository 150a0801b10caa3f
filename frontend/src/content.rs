//! Copy for every section of the page.

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Section anchors in page order.
#[cfg(test)]
pub const SECTION_IDS: [&str; 7] = [
    "proof",
    "framework",
    "services",
    "case-studies",
    "about",
    "insights",
    "contact",
];

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "#proof", label: "Results" },
    NavLink { href: "#framework", label: "Method" },
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#case-studies", label: "Case Studies" },
];

pub const FOOTER_LINKS: [NavLink; 5] = [
    NavLink { href: "#proof", label: "Results" },
    NavLink { href: "#framework", label: "Method" },
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#case-studies", label: "Case Studies" },
    NavLink { href: "#contact", label: "Contact" },
];

/// Icon glyph followed by a short line of text.
pub struct IconLine {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const TRUST_SIGNALS: [IconLine; 4] = [
    IconLine { icon: "↗", text: "300%+ Organic Traffic Growth for Clients" },
    IconLine { icon: "◎", text: "Millions of Organic Views Generated" },
    IconLine { icon: "☰", text: "Trusted by HostGator, Hindustan Times, EaseMyTrip & More" },
    IconLine { icon: "★", text: "Crowned 'God of SEO' by Industry Peers" },
];

pub struct ProofMetric {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
    /// Bar heights in percent for the mini graph.
    pub graph: [u8; 6],
}

pub const PROOF_METRICS: [ProofMetric; 4] = [
    ProofMetric {
        icon: "↗",
        value: "300%+",
        label: "Organic Traffic Increase",
        detail: "Consistent growth across clients",
        graph: [15, 25, 35, 50, 70, 100],
    },
    ProofMetric {
        icon: "◎",
        value: "Top 10",
        label: "Keyword Positions",
        detail: "For competitive terms",
        graph: [80, 60, 45, 30, 15, 5],
    },
    ProofMetric {
        icon: "☺",
        value: "50+",
        label: "Professionals Trained",
        detail: "Now working in top companies",
        graph: [20, 35, 45, 60, 75, 90],
    },
    ProofMetric {
        icon: "★",
        value: "2+ Years",
        label: "At PingMedia",
        detail: "Transforming digital landscapes",
        graph: [92, 92, 92, 92, 92, 92],
    },
];

pub const DATA_DRIVEN_POINTS: [IconLine; 3] = [
    IconLine { icon: "⚡", text: "Expert in Google Analytics, Search Console, SEMrush & Ahrefs" },
    IconLine { icon: "▥", text: "Constant monitoring of trends and campaign adjustments" },
    IconLine { icon: "◎", text: "Effective, sustainable, and profitable SEO approach" },
];

pub const TRUSTED_BRANDS: [&str; 5] = [
    "HostGator.in",
    "LiveHindustan.com",
    "HindustanTimes.com",
    "EaseMyTrip.com",
    "ValentinoIndia.com",
];

pub struct FrameworkStep {
    pub letter: char,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub points: [&'static str; 3],
}

pub const FRAMEWORK_STEPS: [FrameworkStep; 4] = [
    FrameworkStep {
        letter: 'C',
        icon: "▤",
        title: "Contextualized Content",
        description: "Moves from keyword targeting to mastery of user intention with psychological triggers. Delivers audience-centric content for AI-driven segmented audiences.",
        points: [
            "Follows Google E-E-A-T principles",
            "Integrates quizzes, polls, videos for engagement",
            "User intention > keyword stuffing",
        ],
    },
    FrameworkStep {
        letter: 'O',
        icon: "◍",
        title: "Omnichannel Optimization",
        description: "Broaden SEO beyond Google to YouTube, LinkedIn, Quora, and Reddit. Focuses on voice search and AI readability for content accessibility.",
        points: [
            "Zero-click SEO for featured snippets",
            "Social signals boost search ranking",
            "Multi-platform visibility strategy",
        ],
    },
    FrameworkStep {
        letter: 'C',
        icon: "◎",
        title: "Conversion Focused SEO",
        description: "Concentrates on traffic that is actionable, not just figures. Integrates lead magnets and participatory elements to optimize engagement.",
        points: [
            "A/B testing in SEO processes",
            "Landing pages that convert",
            "Behavioral triggers for action",
        ],
    },
    FrameworkStep {
        letter: 'O',
        icon: "✦",
        title: "Ongoing AI-Led Adaptation",
        description: "Regular audits to refresh pages with high opportunities. Uses predictive analytics to foresee Google algorithm changes.",
        points: [
            "Real-time optimization",
            "Stay ahead of algorithm updates",
            "Test unfamiliar SEO strategies",
        ],
    },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub why_different: &'static str,
    pub outcomes: [&'static str; 3],
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: "⌖",
        title: "Rank-Ready SEO for Local & National Brands",
        description: "Complete SEO strategy and execution that gets your brand visible where it matters, whether you're targeting a city or the entire country.",
        why_different: "Most agencies focus on vanity metrics. I focus on keywords that actually drive revenue.",
        outcomes: [
            "Page 1 rankings for buyer-intent keywords",
            "Local pack dominance for service areas",
            "Sustainable organic traffic growth",
        ],
    },
    Service {
        icon: "⌕",
        title: "High-ROI Content & Keyword Strategy",
        description: "Strategic content planning based on search intent analysis, competitive gaps, and conversion potential, not just traffic volume.",
        why_different: "Your content will be built for conversions, not just impressions.",
        outcomes: [
            "Content that ranks AND converts",
            "Topic cluster strategy for authority",
            "Editorial calendar aligned with buyer journey",
        ],
    },
    Service {
        icon: "▥",
        title: "SEO Audits That Actually Increase Revenue",
        description: "Deep technical and strategic audits that identify real opportunities, not a generic checklist with 100 low-priority items.",
        why_different: "Every recommendation comes with projected impact and priority level.",
        outcomes: [
            "Prioritized action plan with ROI estimates",
            "Technical issues that affect rankings",
            "Quick wins identified for immediate results",
        ],
    },
    Service {
        icon: "◎",
        title: "Google Ads + SEO Combined Growth",
        description: "Integrated paid and organic strategy that maximizes your total search visibility while reducing customer acquisition costs over time.",
        why_different: "PPC data informs SEO, and SEO reduces PPC dependency. They work together.",
        outcomes: [
            "Unified search strategy across paid & organic",
            "Lower CAC as organic compounds",
            "Full funnel visibility optimization",
        ],
    },
];

pub struct Brand {
    pub name: &'static str,
    pub industry: &'static str,
}

pub const BRANDS: [Brand; 9] = [
    Brand { name: "HostGator.in", industry: "Hosting" },
    Brand { name: "LiveHindustan.com", industry: "News" },
    Brand { name: "HindustanTimes.com", industry: "News" },
    Brand { name: "EaseMyTrip.com", industry: "Travel" },
    Brand { name: "FabbathInteriors.com", industry: "Interiors" },
    Brand { name: "ValentinoIndia.com", industry: "Fashion" },
    Brand { name: "HolaIndia.com", industry: "E-commerce" },
    Brand { name: "CabexIndia.com", industry: "Logistics" },
    Brand { name: "OKEngineers.com", industry: "Education" },
];

pub struct Achievement {
    pub icon: &'static str,
    pub metric: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        icon: "↗",
        metric: "Organic Traffic Growth",
        value: "300%+",
        description: "Consistent organic traffic increase through strategic SEO implementation",
    },
    Achievement {
        icon: "☺",
        metric: "Social Media Impressions",
        value: "Millions",
        description: "Views on PingMedia Instagram showcasing social media expertise",
    },
    Achievement {
        icon: "★",
        metric: "Competitive Keywords",
        value: "Top Rankings",
        description: "Successfully ranking high-competition keywords across industries",
    },
    Achievement {
        icon: "◎",
        metric: "SEO Professionals Mentored",
        value: "50+",
        description: "Training aspiring SEO professionals who now work in top companies",
    },
];

/// Title plus a sentence or two of body copy.
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

pub const LORD_OF_SEO_REASONS: [Card; 4] = [
    Card {
        title: "Innovative Strategies",
        body: "COCO Strategy redefined SEO with user experience and AI-driven insights",
    },
    Card {
        title: "Proven Track Record",
        body: "300% organic growth, competitive keywords ranked, millions of impressions",
    },
    Card {
        title: "Mentorship & Leadership",
        body: "Training future SEO experts through workshops and coaching",
    },
    Card {
        title: "Ongoing Learning",
        body: "Constantly tracking Google updates and AI technologies",
    },
];

pub struct Principle {
    pub icon: &'static str,
    pub card: Card,
}

pub const PRINCIPLES: [Principle; 3] = [
    Principle {
        icon: "◎",
        card: Card {
            title: "SEO is an asset, not an expense",
            body: "Organic traffic compounds. Every dollar invested in SEO builds equity that pays dividends for years.",
        },
    },
    Principle {
        icon: "↗",
        card: Card {
            title: "Rankings mean nothing without revenue",
            body: "I don't celebrate position gains. I celebrate revenue growth and business outcomes.",
        },
    },
    Principle {
        icon: "✦",
        card: Card {
            title: "COCO Strategy: Content + Conversion",
            body: "Content Optimization & Conversion Optimization working together for maximum impact.",
        },
    },
];

pub const ABOUT_HIGHLIGHTS: [IconLine; 2] = [
    IconLine { icon: "🎓", text: "Mentored by Sparsh Jain & Ayushi Goyal at PingMedia" },
    IconLine { icon: "☺", text: "Guest lecturer training upcoming talent" },
];

pub struct Insight {
    pub icon: &'static str,
    pub card: Card,
}

pub const INSIGHTS: [Insight; 5] = [
    Insight {
        icon: "✦",
        card: Card {
            title: "AI-driven SEO is the Future",
            body: "Google, Bing, and modern search engines increasingly rely on machine learning and NLP. AI-aligned optimization is no longer optional.",
        },
    },
    Insight {
        icon: "◉",
        card: Card {
            title: "Zero-Click Searches Will Reign",
            body: "Featured snippets, PAA boxes, and knowledge graphs are reducing clicks. Visibility now matters more than traffic.",
        },
    },
    Insight {
        icon: "⌕",
        card: Card {
            title: "Search Intent > Keywords",
            body: "Google doesn't rank pages, it ranks answers. Understand intent, psychology, and context to win SEO.",
        },
    },
    Insight {
        icon: "✧",
        card: Card {
            title: "E-E-A-T Is Non-Negotiable",
            body: "Experience, Expertise, Authority, and Trust define rankings. Generic content no longer survives.",
        },
    },
    Insight {
        icon: "◍",
        card: Card {
            title: "Video SEO Is Exploding",
            body: "YouTube, Shorts, TikTok, and Reels are becoming search engines. Video-first SEO is the next frontier.",
        },
    },
];

pub const LESSONS: [Card; 4] = [
    Card {
        title: "Flexibility Is the Ultimate Skill",
        body: "Algorithms evolve constantly. Adaptability ensures longevity in SEO.",
    },
    Card {
        title: "Decisions Must Be Data-Driven",
        body: "Analytics, real-time monitoring, and AI insights outperform assumptions.",
    },
    Card {
        title: "Content Needs Engagement",
        body: "Content attracts. Engagement converts. Storytelling sustains growth.",
    },
    Card {
        title: "SEO Is Bigger Than Google",
        body: "True SEO success comes from omnichannel visibility and brand trust.",
    },
];

pub const CONTACT_FEATURES: [IconLine; 3] = [
    IconLine { icon: "⚡", text: "Response within 24 hours" },
    IconLine { icon: "✉", text: "Free initial consultation" },
    IconLine { icon: "✓", text: "No spam, just strategy" },
];

pub const SUBMITTED_TITLE: &str = "Request Submitted!";
pub const SUBMITTED_MESSAGE: &str = "I'll get back to you within 24 hours with a custom growth plan.";

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors_exist(links: &[NavLink]) {
        for link in links {
            let id = link.href.trim_start_matches('#');
            assert!(SECTION_IDS.contains(&id), "{} has no section", link.href);
        }
    }

    #[test]
    fn test_links_point_at_sections() {
        anchors_exist(&NAV_LINKS);
        anchors_exist(&FOOTER_LINKS);
    }

    #[test]
    fn test_graphs_are_percentages() {
        for metric in &PROOF_METRICS {
            assert!(metric.graph.iter().all(|h| *h <= 100), "{}", metric.label);
        }
    }

    #[test]
    fn test_framework_spells_coco() {
        let letters: String = FRAMEWORK_STEPS.iter().map(|step| step.letter).collect();
        assert_eq!(letters, "COCO");
    }

    #[test]
    fn test_submitted_toast_promises_reply_window() {
        assert!(CONTACT_FEATURES[0].text.contains("24 hours"));
        assert_eq!(
            SUBMITTED_MESSAGE,
            "I'll get back to you within 24 hours with a custom growth plan."
        );
    }
}
