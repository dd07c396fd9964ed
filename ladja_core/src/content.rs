//! Static copy rendered by the landing page.
//!
//! Everything here is literal data; nothing is fetched at runtime.

use crate::section::SectionId;

/// Icons used by the page. The landing crate owns the SVG geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Port and maritime
    Anchor,
    /// Logistics
    Truck,
    /// Water systems
    Droplets,
    /// Operating systems / AI
    Cpu,
    /// Mobile menu toggle
    ChevronDown,
    /// Infrastructure / buildings
    Building2,
    /// Outbound link marker
    ArrowUpRight,
    /// Email contact
    Mail,
    /// Phone contact
    Phone,
    /// Office address
    MapPin,
    /// LinkedIn profile
    Linkedin,
    /// X / Twitter profile
    Twitter,
}

/// Hero banner copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    /// Headline
    pub title: &'static str,
    /// Line under the headline
    pub subtitle: &'static str,
    /// Primary and secondary call-to-action controls
    pub actions: [CallToAction; 2],
}

/// A button that scrolls to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    /// Button text
    pub label: &'static str,
    /// Section the button scrolls to
    pub target: SectionId,
}

/// One division card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    /// Card icon
    pub icon: IconKind,
    /// Division name
    pub title: &'static str,
    /// One-line pitch
    pub description: &'static str,
}

/// Descriptive card shown under the animated stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactCard {
    /// Card icon
    pub icon: IconKind,
    /// Card heading
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
}

/// One line of contact details in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLine {
    /// Leading icon
    pub icon: IconKind,
    /// Displayed text
    pub text: &'static str,
    /// Optional link (`mailto:`, `tel:`)
    pub href: Option<&'static str>,
}

/// Social profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// Accessible name
    pub label: &'static str,
    /// Profile URL
    pub href: &'static str,
    /// Icon
    pub icon: IconKind,
}

/// Company name used in alt texts and the footer.
pub const COMPANY: &str = "Ladja";

/// Hero banner.
pub const HERO: HeroCopy = HeroCopy {
    title: "Africa Moves with Ladja",
    subtitle: "Rebuilding Africa's Infrastructure. From Rivers to Rails.",
    actions: [
        CallToAction {
            label: "Explore Our Solutions",
            target: SectionId::Divisions,
        },
        CallToAction {
            label: "Invest With Us",
            target: SectionId::Contact,
        },
    ],
};

/// About / vision heading.
pub const ABOUT_HEADING: &str = "Our Vision";

/// About / vision prose, one entry per paragraph.
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Ladja builds the connective tissue of a continent: ports, corridors, water networks \
     and the software that runs them.",
    "We partner with governments, operators and investors to deliver infrastructure that \
     moves goods, people and opportunity across borders.",
];

/// The four division cards, in display order.
pub const DIVISIONS: [Division; 4] = [
    Division {
        icon: IconKind::Anchor,
        title: "ZB Series",
        description: "Advanced port and maritime infrastructure solutions for continental trade",
    },
    Division {
        icon: IconKind::Truck,
        title: "AJ Series",
        description: "Intelligent logistics and transportation systems for seamless connectivity",
    },
    Division {
        icon: IconKind::Droplets,
        title: "Water Systems",
        description: "Sustainable water management and distribution networks for communities",
    },
    Division {
        icon: IconKind::Cpu,
        title: "EyenwanOS",
        description: "AI-powered operational systems for smart infrastructure management",
    },
];

/// Cards under the animated stats.
pub const IMPACT_CARDS: [ImpactCard; 3] = [
    ImpactCard {
        icon: IconKind::Building2,
        title: "Continental Corridors",
        description: "Linking inland economies to deep-water ports through integrated rail and road",
    },
    ImpactCard {
        icon: IconKind::Droplets,
        title: "Resilient Communities",
        description: "Clean water and reliable utilities for fast-growing cities and rural regions",
    },
    ImpactCard {
        icon: IconKind::Cpu,
        title: "Smart Operations",
        description: "Real-time visibility across every asset, from berth to last mile",
    },
];

/// Number of placeholder partner cards.
pub const PARTNER_COUNT: usize = 8;

/// Partner placeholder labels: `P1` to `P8`.
pub fn partners() -> Vec<String> {
    (1..=PARTNER_COUNT).map(|i| format!("P{i}")).collect()
}

/// Call-to-action band copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaBand {
    /// Band heading
    pub heading: &'static str,
    /// Supporting line
    pub body: &'static str,
    /// Button
    pub action: CallToAction,
}

/// Call-to-action band between partners and the footer.
pub const CTA_BAND: CtaBand = CtaBand {
    heading: "Build the Future with Us",
    body: "Join the investors and operators shaping Africa's next generation of infrastructure.",
    action: CallToAction {
        label: "Invest With Us",
        target: SectionId::Contact,
    },
};

/// Footer contact details.
pub const CONTACT_LINES: [ContactLine; 3] = [
    ContactLine {
        icon: IconKind::MapPin,
        text: "Lagos, Nigeria",
        href: None,
    },
    ContactLine {
        icon: IconKind::Mail,
        text: "invest@ladja.com",
        href: Some("mailto:invest@ladja.com"),
    },
    ContactLine {
        icon: IconKind::Phone,
        text: "+234 800 000 0000",
        href: Some("tel:+2348000000000"),
    },
];

/// Footer social links.
pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/company/ladja",
        icon: IconKind::Linkedin,
    },
    SocialLink {
        label: "X",
        href: "https://x.com/ladja",
        icon: IconKind::Twitter,
    },
];
