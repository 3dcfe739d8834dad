//! Static copy for the Translucid Languages site

/// Company name shown in the header
pub const BRAND: &str = "Translucid";

/// Page sections that navigation links can scroll to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    ClientSolutions,
    About,
    Careers,
}

/// A navigation link in the header and in the drawer
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub name: &'static str,
    pub section: Section,
}

pub const NAVIGATION: &[NavItem] = &[
    NavItem {
        name: "Client Solutions",
        section: Section::ClientSolutions,
    },
    NavItem {
        name: "About us",
        section: Section::About,
    },
    NavItem {
        name: "Career Opportunities",
        section: Section::Careers,
    },
];

/// Look up the navigation label for a section
pub fn nav_label(section: Section) -> &'static str {
    NAVIGATION
        .iter()
        .find(|item| item.section == section)
        .map(|item| item.name)
        .unwrap_or(BRAND)
}

pub const HERO_TITLE: &str = "Empowering You Through Language Access";

pub const HERO_LEAD: &str = "We specialize in Haitian Creole translation, interpretation, \
transcription and localization, offering a seamless bridge between cultures and languages \
like never before.";

pub const HERO_ILLUSTRATION: &str = "Women talking";

pub const CLIENT_SOLUTIONS_TITLE: &str = "Client Solutions";

pub const CLIENT_SOLUTIONS_INTRO: &str = "At Translucid Languages, our client-centric approach \
involves understanding your distinct requirements, objectives, and brand identity to provide \
tailored solutions aligned with your vision. Our commitment to meticulous care and \
confidentiality ensures your projects are in trusted hands.";

/// A service offered by the company
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
    /// Glyph standing in for the feature icon
    pub icon: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        name: "Translation",
        description: "We provide professional translation services for documents, websites, \
marketing materials, legal documents, and more. Our team of experienced translators are fluent \
in Haitian Creole and English and can help you communicate your message accurately and \
effectively.",
        icon: "✎",
    },
    Feature {
        name: "Interpretation",
        description: "We offer both onsite and remote interpretation services for meetings, \
conferences, and events. Our team of skilled interpreters can provide simultaneous or \
consecutive interpretation to ensure effective communication between speakers of the Haitian \
Creole and English languages.",
        icon: "☺",
    },
    Feature {
        name: "Localization",
        description: "We help businesses adapt their products, services, and marketing \
materials for specific target markets by providing cultural and linguistic adaptation \
services. This includes translating and adapting content, images, and design elements to \
ensure they resonate with the target audience.",
        icon: "◍",
    },
    Feature {
        name: "Transcription",
        description: "We offer transcription services for audio and video recordings in \
Haitian Creole. Our team of expert transcribers can accurately transcribe your content, \
including translating it into Haitian Creole if required.",
        icon: "♪",
    },
];

pub const ABOUT_TITLE: &str = "About Us";

/// A named statement in the about-us block
#[derive(Debug, Clone, Copy)]
pub struct AboutItem {
    pub name: &'static str,
    pub description: &'static str,
}

pub const ABOUT_US: &[AboutItem] = &[
    AboutItem {
        name: "Vision",
        description: "Empowering You and the Haitian Creole speakers with seamless language \
access, fostering effective communication without linguistic barriers.",
    },
    AboutItem {
        name: "Mission",
        description: "Providing tailored Haitian Creole language solutions for individuals, \
businesses, and organizations across diverse sectors, including Healthcare, Legal Justice, and \
Education.",
    },
    AboutItem {
        name: "Purpose",
        description: "Bridging language gaps within the Haitian Creole community and empowering \
language access for clients by unleashing the power of communication.",
    },
];

pub const HIRING_TITLE: &str = "We're Hiring!";

pub const HIRING_BLURB: &str = "Join our team! We're actively seeking talented translators and \
interpreters to shape language excellence with us.";

pub const CONTACT_TITLE: &str = "Contact our team";

pub const FOOTER: &str = "© 2023 Translucid, Inc. All rights reserved.";

pub const COUNTRIES: &[&str] = &["US", "CA", "EU"];

pub const INDUSTRIES: &[&str] = &[
    "Healthcare",
    "Legal",
    "Insurance",
    "Financial Services",
    "Government",
    "Education",
    "Personal",
    "Other",
];

pub const RESUME_FORMATS: &str = "PDF, DOC, DOCX, TXT, RTF";
