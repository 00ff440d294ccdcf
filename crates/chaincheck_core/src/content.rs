//! Static page copy. Everything here is decorative; none of the claims are
//! backed by behavior.

pub const BRAND_NAME: &str = "ChainCheck.AI";
pub const NAV_LINKS: [&str; 2] = ["Features", "API"];
pub const CONNECT_WALLET: &str = "Connect Wallet";

pub const HERO_BADGE: &str = "Powered by AI & Blockchain";
pub const HERO_HEADLINE: [&str; 2] = ["Detect Scams &", "Fake News with AI"];
pub const HERO_TAGLINE: &str = "ChainCheck.AI uses advanced LLMs on decentralized infrastructure \
to analyze content, detect scams, and protect the Web3 community from misinformation and fraud.";

pub const ANALYSIS_TITLE: &str = "Analyze Content for Threats";
pub const ANALYSIS_SUBTITLE: &str =
    "Upload files, paste text, or share URLs to detect scams and fake news";
pub const TEXT_PLACEHOLDER: &str =
    "Paste tweet content, social media post, or any text you want to analyze...";
pub const URL_PLACEHOLDER: &str = "https://twitter.com/... or any URL to analyze";
pub const FILE_PLACEHOLDER: &str = "Drop files here or click to upload";
pub const FILE_SUPPORT_HINT: &str = "Supports images, PDFs, text files, and documents";
/// Extensions offered by the picker filter. Advisory: "All files" is always offered too.
pub const FILE_ACCEPT_HINT: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "pdf", "txt", "docx",
];

pub const ANALYZE_LABEL: &str = "Analyze Content";
pub const ANALYZING_LABEL: &str = "Analyzing with AI...";
pub const SCANNING_BANNER: &str = "Scanning for threats and misinformation...";

pub const FEATURES_HEADING: &str = "Advanced AI Protection";
pub const FEATURES_SUBHEADING: &str =
    "Powered by cutting-edge technology to keep you safe in the Web3 ecosystem";

pub const CTA_HEADING: &str = "Ready to Secure Your Web3 Experience?";
pub const CTA_BODY: &str =
    "Join thousands of users protecting themselves from scams and misinformation";
pub const CTA_PRIMARY: &str = "Start Free Analysis";
pub const CTA_SECONDARY: &str = "View Documentation";

pub const FOOTER_NOTE: &str = "© 2024 ChainCheck.AI. Powered by decentralized AI.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        icon: "🧠",
        title: "AI-Powered Detection",
        description: "Uses Amazon Bedrock Claude/Titan models for advanced threat analysis",
    },
    FeatureCard {
        icon: "🛡",
        title: "Scam Protection",
        description: "Identifies cryptocurrency scams, fake news, and fraudulent content",
    },
    FeatureCard {
        icon: "🌐",
        title: "Decentralized Infrastructure",
        description: "Hosted on Akash Network for censorship-resistant analysis",
    },
    FeatureCard {
        icon: "⚡",
        title: "Real-time Analysis",
        description: "Get instant results with our lightning-fast detection engine",
    },
];

/// Pill colour; the platform layer maps it to a concrete colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Orange,
    Red,
    Blue,
    Purple,
    Cyan,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechBadge {
    pub name: &'static str,
    pub color: BadgeColor,
}

pub const TECH_STACK: [TechBadge; 6] = [
    TechBadge {
        name: "Amazon Bedrock",
        color: BadgeColor::Orange,
    },
    TechBadge {
        name: "Akash Network",
        color: BadgeColor::Red,
    },
    TechBadge {
        name: "CDP Wallet",
        color: BadgeColor::Blue,
    },
    TechBadge {
        name: "Claude AI",
        color: BadgeColor::Purple,
    },
    TechBadge {
        name: "React",
        color: BadgeColor::Cyan,
    },
    TechBadge {
        name: "Web3",
        color: BadgeColor::Green,
    },
];
