//! Page content: the five scroll sections, header navigation and brand copy.
//!
//! The section order is the vertical order of the page and the order of
//! anchor navigation. Nothing here is mutated at runtime.

/// Image shown in place of any section image that fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/CCCCCC/333333?text=Image+Not+Found";

/// Markup variant used to render a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    /// Full-height centered opener with the page's only `<h1>`.
    Hero,
    /// Copy on the left, image on the right.
    TextFirst,
    /// Image on the left, copy on the right (stacked copy-first on mobile).
    ImageFirst,
    /// Centered closing section with the download button.
    CallToAction,
}

/// One scroll section of the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSection {
    /// Anchor target, unique across the page.
    pub id: &'static str,
    /// Heading text.
    pub title: &'static str,
    /// Body paragraph.
    pub body: &'static str,
    /// Image URL.
    pub image: &'static str,
    /// Accessible description of the image.
    pub alt: &'static str,
    /// Markup variant.
    pub layout: SectionLayout,
}

/// The page sections, in document order.
pub static SECTIONS: [ContentSection; 5] = [
    ContentSection {
        id: "frustration",
        title: "Tired of fumbling for cash or cards?",
        body: "Slow transactions. Bulky wallets. The hassle of change. There's a simpler way to pay.",
        image: "https://placehold.co/600x400/FEE2E2/EF4444?text=Frustrated+User",
        alt: "Person at checkout looking frustrated while searching for cash or cards.",
        layout: SectionLayout::Hero,
    },
    ContentSection {
        id: "solution",
        title: "Hello, Easy Pay!",
        body: "Introducing GTB Bank Mobile Pay – your wallet, now on your phone. Fast, secure, and always at your fingertips.",
        image: "https://placehold.co/600x400/DBEAFE/3B82F6?text=Smartphone+with+App",
        alt: "Sleek smartphone displaying a bank app logo on its screen.",
        layout: SectionLayout::TextFirst,
    },
    ContentSection {
        id: "convenience",
        title: "Tap, Pay, Go!",
        body: "Imagine breezing through checkouts. No more waiting. Just a quick tap from your smartphone to complete your purchases. Payments made simple.",
        image: "https://placehold.co/600x400/D1FAE5/10B981?text=Tap+to+Pay",
        alt: "A hand holding a smartphone near a payment terminal, indicating a successful mobile payment.",
        layout: SectionLayout::ImageFirst,
    },
    ContentSection {
        id: "security",
        title: "Your Money, Safer Than Ever.",
        body: "With GTB Bank Mobile Pay, every transaction is protected by advanced security features and encryption. Pay confidently, anywhere you see the mobile pay symbol.",
        image: "https://placehold.co/600x400/E0E7FF/6366F1?text=Secure+Payment",
        alt: "A shield or lock icon overlaid on a phone screen, symbolizing security.",
        layout: SectionLayout::TextFirst,
    },
    ContentSection {
        id: "get-started",
        title: "Ready for Smarter Payments?",
        body: "Download the GTB Bank app today or visit GTB Bank's Website/Branch to set up your mobile pay and transform how you spend. Experience the future of banking!",
        image: "https://placehold.co/600x400/FFFBEB/F59E0B?text=Download+App",
        alt: "A clear image of a bank's mobile app icon or a smartphone showing the app's setup screen.",
        layout: SectionLayout::CallToAction,
    },
];

/// A header navigation entry pointing at a section anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Visible label.
    pub label: &'static str,
    /// Section id (without `#`).
    pub target: &'static str,
}

impl NavLink {
    /// `href` value for the link.
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Header navigation, left to right.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink { label: "Home", target: "frustration" },
    NavLink { label: "Get Started", target: "get-started" },
];

/// Brand name shown in the header and footer.
pub const BANK_NAME: &str = "GTB Bank";
/// Footer address line.
pub const POSTAL_ADDRESS: &str = "123 Bank Street, City, Country";
/// Footer contact address.
pub const CONTACT_EMAIL: &str = "info@yourbank.com";
/// Label of the call-to-action button.
pub const CTA_LABEL: &str = "Download the App Now!";
/// Target of the call-to-action button. No store link exists yet.
pub const CTA_HREF: &str = "#";
