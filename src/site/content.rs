//! Static copy and the small pieces of state that index into it.

pub const BRAND: &str = "AMAZEBALLS";
pub const CONTACT_EMAIL: &str = "hello@amazeballs.com";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavItem {
    pub label: &'static str,
    /// Section id without the leading `#`.
    pub section: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", section: "home" },
    NavItem { label: "About", section: "about" },
    NavItem { label: "Services", section: "services" },
    NavItem { label: "Portfolio", section: "portfolio" },
    NavItem { label: "Contact", section: "contact" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [ExternalLink; 3] = [
    ExternalLink {
        label: "Instagram",
        href: "https://www.instagram.com/amaz.eballsservices?igsh=Yjd6ZzdyNWRhMHEz",
    },
    ExternalLink {
        label: "Facebook",
        href: "https://www.facebook.com/share/17c55Yh3yQ/?mibextid=wwXIfr",
    },
    ExternalLink {
        label: "X",
        href: "https://x.com/amazeballs4561?s=11",
    },
];

pub const FOOTER_COMPANY_LINKS: [ExternalLink; 4] = [
    ExternalLink { label: "About Us", href: "#about" },
    ExternalLink { label: "Services", href: "#services" },
    ExternalLink { label: "Portfolio", href: "#portfolio" },
    ExternalLink { label: "Careers", href: "#" },
];

pub const FOOTER_SUPPORT_LINKS: [ExternalLink; 4] = [
    ExternalLink { label: "Contact", href: "#contact" },
    ExternalLink { label: "FAQ", href: "#" },
    ExternalLink { label: "Privacy Policy", href: "#" },
    ExternalLink { label: "Terms of Service", href: "#" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: [Stat; 4] = [
    Stat { value: "150+", label: "Projects Completed" },
    Stat { value: "98%", label: "Client Satisfaction" },
    Stat { value: "50+", label: "Team Members" },
    Stat { value: "25+", label: "Awards Won" },
];

pub const PRESENCE_STATS: [Stat; 4] = [
    Stat { value: "50+", label: "Countries Served" },
    Stat { value: "200+", label: "Global Clients" },
    Stat { value: "24/7", label: "Support Available" },
    Stat { value: "99%", label: "Uptime Guaranteed" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Service {
    pub title: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub const SERVICES: [Service; 9] = [
    Service {
        title: "Ad Campaigns",
        slug: "ad-campaigns",
        description: "Strategic advertising campaigns that capture attention and drive results. We create compelling ads that resonate with your target audience across all platforms.",
        features: ["Google Ads", "Facebook Ads", "Display Advertising", "Retargeting"],
    },
    Service {
        title: "Strategic Planning",
        slug: "strategic-planning",
        description: "Comprehensive business strategies tailored to your goals. We analyze market trends and competitors to position your brand for maximum growth.",
        features: ["Market Analysis", "Competitor Research", "Growth Strategy", "ROI Planning"],
    },
    Service {
        title: "TV, Radio & Magazine Ads",
        slug: "traditional-media-ads",
        description: "Powerful traditional media advertising that reaches mass audiences. We create memorable commercials and print ads that leave lasting impressions.",
        features: ["TV Commercials", "Radio Spots", "Magazine Ads", "Billboard Design"],
    },
    Service {
        title: "Social Media Management",
        slug: "social-media-management",
        description: "Complete social media solutions to build your brand presence. We manage, create, and grow your social channels for maximum engagement.",
        features: ["Content Calendar", "Community Management", "Analytics", "Influencer Marketing"],
    },
    Service {
        title: "Content Creation",
        slug: "content-creation",
        description: "Engaging content that tells your brand story. From copywriting to video production, we create content that connects and converts.",
        features: ["Copywriting", "Video Production", "Photography", "Graphic Design"],
    },
    Service {
        title: "Web Development",
        slug: "web-development",
        description: "Custom websites and web applications built with cutting-edge technology. We deliver fast, responsive, and user-friendly digital experiences.",
        features: ["Custom Websites", "E-commerce", "Web Apps", "CMS Development"],
    },
    Service {
        title: "SEO, SEM & PPC",
        slug: "seo-sem-ppc",
        description: "Data-driven search marketing strategies to increase your visibility. We optimize your presence to rank higher and drive qualified traffic.",
        features: ["SEO Optimization", "Google Ads", "Keyword Research", "Link Building"],
    },
    Service {
        title: "Printing & Design Solutions",
        slug: "printing-design",
        description: "Professional printing and design services for all your marketing materials. From business cards to banners, we deliver quality print solutions.",
        features: ["Business Cards", "Brochures", "Banners", "Packaging Design"],
    },
    Service {
        title: "Lead Nurturing",
        slug: "lead-nurturing",
        description: "Convert prospects into loyal customers with strategic lead nurturing. We build automated workflows that guide leads through your sales funnel.",
        features: ["Email Marketing", "CRM Integration", "Marketing Automation", "Sales Funnels"],
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CaseStudy {
    pub title: &'static str,
    pub client: &'static str,
    pub result: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ServiceDetail {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 6],
    pub process: [ProcessStep; 4],
    pub case_studies: [CaseStudy; 2],
}

const fn step(title: &'static str, description: &'static str) -> ProcessStep {
    ProcessStep { title, description }
}

const fn case(title: &'static str, client: &'static str, result: &'static str, image: &'static str) -> CaseStudy {
    CaseStudy {
        title,
        client,
        result,
        image,
    }
}

pub const SERVICE_DETAILS: [ServiceDetail; 6] = [
    ServiceDetail {
        slug: "ui-ux-design",
        title: "UI/UX Design",
        subtitle: "Creating stunning, intuitive interfaces",
        description: "We craft beautiful, user-centered designs that captivate audiences and drive engagement. Our design process combines aesthetics with functionality to create memorable digital experiences.",
        features: [
            "User Research & Personas",
            "Information Architecture",
            "Wireframing & Prototyping",
            "Visual Design Systems",
            "Usability Testing",
            "Accessibility Compliance",
        ],
        process: [
            step("Discovery", "Understanding your goals, users, and market landscape"),
            step("Research", "User interviews, competitor analysis, and data gathering"),
            step("Design", "Creating wireframes, mockups, and interactive prototypes"),
            step("Testing", "Validating designs with real users and iterating"),
        ],
        case_studies: [
            case(
                "HealthTech Dashboard Redesign",
                "MediCare Plus",
                "45% increase in user engagement",
                "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&q=80",
            ),
            case(
                "E-commerce Mobile Experience",
                "ShopFlow",
                "32% higher conversion rate",
                "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&q=80",
            ),
        ],
    },
    ServiceDetail {
        slug: "web-development",
        title: "Web Development",
        subtitle: "Building robust, scalable applications",
        description: "We build powerful web applications using cutting-edge technologies. From simple landing pages to complex enterprise platforms, we deliver excellence in every line of code.",
        features: [
            "React/Next.js Development",
            "Node.js Backend Systems",
            "Database Architecture",
            "API Design & Integration",
            "Performance Optimization",
            "Security Implementation",
        ],
        process: [
            step("Planning", "Technical architecture and sprint planning"),
            step("Development", "Agile development with continuous integration"),
            step("Testing", "Comprehensive QA and automated testing"),
            step("Deployment", "Seamless deployment and monitoring setup"),
        ],
        case_studies: [
            case(
                "SaaS Platform Development",
                "TechStartup Inc",
                "10x scalability achieved",
                "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
            ),
            case(
                "E-learning Platform",
                "EduLearn",
                "100k+ active users",
                "https://images.unsplash.com/photo-1501504905252-473c47e087f8?w=800&q=80",
            ),
        ],
    },
    ServiceDetail {
        slug: "mobile-apps",
        title: "Mobile Apps",
        subtitle: "Native and cross-platform excellence",
        description: "We create mobile applications that deliver seamless experiences across all devices. Whether iOS, Android, or cross-platform, we ensure stunning performance and user delight.",
        features: [
            "iOS Native Development",
            "Android Native Development",
            "React Native Apps",
            "Flutter Development",
            "App Store Optimization",
            "Push Notifications",
        ],
        process: [
            step("Strategy", "Platform selection and feature prioritization"),
            step("Design", "Mobile-first UI/UX design and prototyping"),
            step("Build", "Native or cross-platform development"),
            step("Launch", "App store submission and marketing"),
        ],
        case_studies: [
            case(
                "Fitness Tracking App",
                "FitLife",
                "500k+ downloads",
                "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&q=80",
            ),
            case(
                "Banking Mobile App",
                "FinBank",
                "4.8 star rating",
                "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=800&q=80",
            ),
        ],
    },
    ServiceDetail {
        slug: "digital-strategy",
        title: "Digital Strategy",
        subtitle: "Data-driven growth solutions",
        description: "We develop comprehensive digital strategies that align with your business goals and drive measurable growth across all channels.",
        features: [
            "SEO Optimization",
            "Content Strategy",
            "Analytics Setup",
            "Conversion Optimization",
            "Social Media Strategy",
            "Marketing Automation",
        ],
        process: [
            step("Audit", "Comprehensive analysis of current digital presence"),
            step("Strategy", "Developing data-driven growth roadmap"),
            step("Execute", "Implementing campaigns and optimizations"),
            step("Measure", "Tracking KPIs and continuous improvement"),
        ],
        case_studies: [
            case(
                "SEO Transformation",
                "RetailMax",
                "300% organic traffic increase",
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
            ),
            case(
                "Lead Generation Campaign",
                "B2B Solutions",
                "150% more qualified leads",
                "https://images.unsplash.com/photo-1553877522-43269d4ea984?w=800&q=80",
            ),
        ],
    },
    ServiceDetail {
        slug: "brand-identity",
        title: "Brand Identity",
        subtitle: "Crafting memorable brands",
        description: "We create distinctive brand identities that resonate with your audience and set you apart from the competition. From logos to complete brand systems.",
        features: [
            "Logo Design",
            "Brand Guidelines",
            "Visual Identity System",
            "Brand Strategy",
            "Packaging Design",
            "Brand Messaging",
        ],
        process: [
            step("Discovery", "Understanding brand values and positioning"),
            step("Concept", "Developing creative concepts and directions"),
            step("Design", "Creating logo and visual identity system"),
            step("Deliver", "Complete brand guidelines and assets"),
        ],
        case_studies: [
            case(
                "Luxury Fashion Rebrand",
                "Luxe Couture",
                "200% brand recognition increase",
                "https://images.unsplash.com/photo-1634942537034-2531766767d1?w=800&q=80",
            ),
            case(
                "Tech Startup Branding",
                "InnovateTech",
                "Successful Series A funding",
                "https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=800&q=80",
            ),
        ],
    },
    ServiceDetail {
        slug: "maintenance-support",
        title: "Maintenance & Support",
        subtitle: "24/7 technical excellence",
        description: "We keep your digital products running smoothly with ongoing maintenance, security updates, and round-the-clock technical support.",
        features: [
            "24/7 Technical Support",
            "Security Updates",
            "Performance Monitoring",
            "Bug Fixes & Patches",
            "Feature Enhancements",
            "Backup & Recovery",
        ],
        process: [
            step("Onboard", "System audit and documentation"),
            step("Monitor", "Proactive monitoring and alerting"),
            step("Maintain", "Regular updates and optimizations"),
            step("Support", "24/7 response and issue resolution"),
        ],
        case_studies: [
            case(
                "Enterprise Support Contract",
                "Global Corp",
                "99.99% uptime achieved",
                "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800&q=80",
            ),
            case(
                "Security Overhaul",
                "FinanceHub",
                "Zero security incidents",
                "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?w=800&q=80",
            ),
        ],
    },
];

pub fn service_detail(slug: &str) -> Option<&'static ServiceDetail> {
    SERVICE_DETAILS.iter().find(|detail| detail.slug == slug)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectCategory {
    WebDesign,
    MobileApps,
    Branding,
    UiUx,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::WebDesign => "Web Design",
            Self::MobileApps => "Mobile Apps",
            Self::Branding => "Branding",
            Self::UiUx => "UI/UX",
        }
    }
}

/// Portfolio filter; `None` shows everything.
pub type CategoryFilter = Option<ProjectCategory>;

pub const CATEGORY_FILTERS: [CategoryFilter; 5] = [
    None,
    Some(ProjectCategory::WebDesign),
    Some(ProjectCategory::MobileApps),
    Some(ProjectCategory::Branding),
    Some(ProjectCategory::UiUx),
];

pub fn filter_label(filter: CategoryFilter) -> &'static str {
    filter.map_or("All", ProjectCategory::label)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub image: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "TechFlow Dashboard",
        category: ProjectCategory::WebDesign,
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        description: "A comprehensive analytics dashboard for tech startups with real-time data visualization.",
        technologies: &["React", "D3.js", "Node.js", "PostgreSQL"],
    },
    Project {
        id: 2,
        title: "FitLife Mobile App",
        category: ProjectCategory::MobileApps,
        image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&q=80",
        description: "A fitness tracking app with personalized workout plans and nutrition guidance.",
        technologies: &["React Native", "Firebase", "Redux", "HealthKit"],
    },
    Project {
        id: 3,
        title: "Luxe Brand Identity",
        category: ProjectCategory::Branding,
        image: "https://images.unsplash.com/photo-1634942537034-2531766767d1?w=800&q=80",
        description: "Complete brand identity design for a luxury fashion retailer.",
        technologies: &["Illustrator", "Photoshop", "Figma"],
    },
    Project {
        id: 4,
        title: "EcoShop E-commerce",
        category: ProjectCategory::WebDesign,
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&q=80",
        description: "Sustainable marketplace with carbon footprint tracking for eco-conscious shoppers.",
        technologies: &["Next.js", "Stripe", "Tailwind", "Prisma"],
    },
    Project {
        id: 5,
        title: "HealthCare UX Redesign",
        category: ProjectCategory::UiUx,
        image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&q=80",
        description: "Complete UX overhaul for a healthcare management platform.",
        technologies: &["Figma", "Protopie", "User Research"],
    },
    Project {
        id: 6,
        title: "Fintech Banking App",
        category: ProjectCategory::MobileApps,
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=800&q=80",
        description: "Modern mobile banking experience with AI-powered insights.",
        technologies: &["Flutter", "Python", "TensorFlow", "AWS"],
    },
];

pub fn filter_projects(filter: CategoryFilter) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| filter.is_none() || filter == Some(project.category))
        .collect()
}

pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

pub const CAROUSEL_STRIDE_PX: f64 = 420.0;

/// Index of the services carousel; every move is clamped to the deck.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn previous(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        self.go_to(self.index + 1)
    }

    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.len.saturating_sub(1)),
            ..self
        }
    }

    pub fn scroll_left_px(&self) -> f64 {
        self.index as f64 * CAROUSEL_STRIDE_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_category() {
        assert_eq!(filter_projects(None).len(), 6);
        let mobile: Vec<_> = filter_projects(Some(ProjectCategory::MobileApps))
            .iter()
            .map(|project| project.id)
            .collect();
        assert_eq!(mobile, vec![2, 6]);
        assert_eq!(filter_projects(Some(ProjectCategory::Branding)).len(), 1);
        assert_eq!(filter_label(None), "All");
        assert_eq!(filter_label(Some(ProjectCategory::UiUx)), "UI/UX");
    }

    #[test]
    fn carousel_clamps_at_both_ends() {
        let carousel = Carousel::new(SERVICES.len());
        assert_eq!(carousel.previous().index(), 0);

        let mut end = carousel;
        for _ in 0..20 {
            end = end.next();
        }
        assert_eq!(end.index(), 8);
        assert_eq!(end.scroll_left_px(), 8.0 * 420.0);
        assert_eq!(carousel.go_to(3).index(), 3);
        assert_eq!(Carousel::new(0).next().index(), 0);
    }

    #[test]
    fn detail_lookup_is_by_slug() {
        assert_eq!(service_detail("web-development").map(|d| d.title), Some("Web Development"));
        assert!(service_detail("ad-campaigns").is_none());
        assert!(service_detail("").is_none());
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = SERVICES.iter().map(|service| service.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SERVICES.len());
    }
}
