//! SEO configuration and the ordered plan of `<head>` elements built from it.

use crate::error::SeoError;
use crate::structured_data::StructuredData;

/// Static SEO values for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    /// Canonical page URL. Also used for `og:url` and structured data.
    pub url: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub og_image: &'static str,
    pub og_type: &'static str,
    pub twitter_card: &'static str,
    pub twitter_site: &'static str,
    pub twitter_creator: &'static str,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
    pub twitter_image: &'static str,
    pub organization_name: &'static str,
    pub organization_logo: &'static str,
    /// Social profile URLs of the organization.
    pub same_as: &'static [&'static str],
}

/// SEO values of the Mobile Pay landing page.
pub static SEO: SeoConfig = SeoConfig {
    title: "GTB Bank Mobile Pay - Fast, Secure, Easy Payments",
    description: "Experience the future of banking with GTB Bank Mobile Pay. Tap, pay, and go with secure and convenient smartphone payments.",
    keywords: "mobile pay, bank, digital wallet, secure payments, easy pay, smartphone banking, GTB Bank",
    url: "https://www.yourbank.com/mobile-pay-ad",
    og_title: "GTB Bank Mobile Pay",
    og_description: "Tap, pay, and go with GTB Bank Mobile Pay – your secure digital wallet.",
    og_image: "https://placehold.co/1200x630/DBEAFE/3B82F6?text=GTB+Bank+Mobile+Pay+Ad",
    og_type: "website",
    twitter_card: "summary_large_image",
    twitter_site: "@GTBBankTwitter",
    twitter_creator: "@GTBBankTwitter",
    twitter_title: "GTB Bank Mobile Pay",
    twitter_description: "Experience fast, secure, and easy payments with GTB Bank Mobile Pay.",
    twitter_image: "https://placehold.co/1200x675/DBEAFE/3B82F6?text=GTB+Bank+Mobile+Pay+Ad",
    organization_name: "GTB Bank",
    organization_logo: "https://placehold.co/200x200/FFFFFF/000000?text=GTB+Bank+Logo",
    same_as: &[
        "https://www.facebook.com/yourbank",
        "https://twitter.com/yourbank",
        "https://www.linkedin.com/company/yourbank",
    ],
};

/// Which attribute carries the key of a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// `name="..."` (description, keywords, Twitter Card).
    Name,
    /// `property="..."` (Open Graph).
    Property,
}

impl MetaKey {
    pub fn attribute(self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        }
    }
}

/// One `<meta>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaTag<'a> {
    pub key: MetaKey,
    pub name: &'static str,
    pub content: &'a str,
}

impl<'a> MetaTag<'a> {
    const fn with_name(name: &'static str, content: &'a str) -> Self {
        Self { key: MetaKey::Name, name, content }
    }

    const fn with_property(name: &'static str, content: &'a str) -> Self {
        Self { key: MetaKey::Property, name, content }
    }
}

/// Number of `<meta>` elements written per mount.
pub const META_TAG_COUNT: usize = 13;

impl SeoConfig {
    /// The fixed meta tag enumeration, in insertion order.
    pub fn meta_tags(&self) -> [MetaTag<'_>; META_TAG_COUNT] {
        [
            MetaTag::with_name("description", self.description),
            MetaTag::with_name("keywords", self.keywords),
            MetaTag::with_property("og:title", self.og_title),
            MetaTag::with_property("og:description", self.og_description),
            MetaTag::with_property("og:image", self.og_image),
            MetaTag::with_property("og:url", self.url),
            MetaTag::with_property("og:type", self.og_type),
            MetaTag::with_name("twitter:card", self.twitter_card),
            MetaTag::with_name("twitter:site", self.twitter_site),
            MetaTag::with_name("twitter:creator", self.twitter_creator),
            MetaTag::with_name("twitter:title", self.twitter_title),
            MetaTag::with_name("twitter:description", self.twitter_description),
            MetaTag::with_name("twitter:image", self.twitter_image),
        ]
    }
}

/// A head element to be created by a [`crate::head::HeadHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadElement<'a> {
    Title(&'a str),
    Meta(MetaTag<'a>),
    Link { rel: &'static str, href: &'a str },
    Script { kind: &'static str, text: String },
}

impl HeadElement<'_> {
    pub fn tag(&self) -> &'static str {
        match self {
            HeadElement::Title(_) => "title",
            HeadElement::Meta(_) => "meta",
            HeadElement::Link { .. } => "link",
            HeadElement::Script { .. } => "script",
        }
    }

    /// Attributes in the order they are set.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        match self {
            HeadElement::Title(_) => Vec::new(),
            HeadElement::Meta(meta) => {
                vec![(meta.key.attribute(), meta.name), ("content", meta.content)]
            }
            HeadElement::Link { rel, href } => vec![("rel", *rel), ("href", *href)],
            HeadElement::Script { kind, .. } => vec![("type", *kind)],
        }
    }

    /// Text content, for elements that carry one.
    pub fn text(&self) -> Option<&str> {
        match self {
            HeadElement::Title(text) => Some(*text),
            HeadElement::Script { text, .. } => Some(text.as_str()),
            HeadElement::Meta(_) | HeadElement::Link { .. } => None,
        }
    }
}

/// Build the ordered head plan for `config`: title, meta tags, canonical
/// link, JSON-LD script.
pub fn head_plan(config: &SeoConfig) -> Result<Vec<HeadElement<'_>>, SeoError> {
    let mut plan = Vec::with_capacity(META_TAG_COUNT + 3);
    plan.push(HeadElement::Title(config.title));
    plan.extend(config.meta_tags().into_iter().map(HeadElement::Meta));
    plan.push(HeadElement::Link { rel: "canonical", href: config.url });
    plan.push(HeadElement::Script {
        kind: "application/ld+json",
        text: StructuredData::from_config(config).to_json()?,
    });
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn meta_tags_follow_fixed_order() {
        let keys: Vec<_> = SEO.meta_tags().iter().map(|m| m.name).collect();
        assert_eq!(
            keys,
            vec![
                "description",
                "keywords",
                "og:title",
                "og:description",
                "og:image",
                "og:url",
                "og:type",
                "twitter:card",
                "twitter:site",
                "twitter:creator",
                "twitter:title",
                "twitter:description",
                "twitter:image",
            ]
        );
    }

    #[test]
    fn open_graph_uses_property_attribute() {
        for meta in SEO.meta_tags() {
            let expected = if meta.name.starts_with("og:") {
                MetaKey::Property
            } else {
                MetaKey::Name
            };
            assert_eq!(meta.key, expected, "{}", meta.name);
        }
    }

    #[test]
    fn og_url_is_canonical_url() {
        let og_url = SEO.meta_tags().into_iter().find(|m| m.name == "og:url");
        assert_eq!(og_url.map(|m| m.content), Some(SEO.url));
    }

    #[test]
    fn plan_is_title_metas_canonical_script() {
        let plan = head_plan(&SEO).unwrap();
        let tags: Vec<_> = plan.iter().map(HeadElement::tag).collect();

        assert_eq!(plan.len(), 1 + META_TAG_COUNT + 2);
        assert_eq!(tags[0], "title");
        assert!(tags[1..=META_TAG_COUNT].iter().all(|t| *t == "meta"));
        assert_eq!(tags[META_TAG_COUNT + 1], "link");
        assert_eq!(tags[META_TAG_COUNT + 2], "script");

        assert_eq!(plan[0].text(), Some(SEO.title));
        assert_eq!(
            plan[META_TAG_COUNT + 1].attributes(),
            vec![("rel", "canonical"), ("href", SEO.url)]
        );
        assert_eq!(
            plan[META_TAG_COUNT + 2].attributes(),
            vec![("type", "application/ld+json")]
        );
    }

    #[test]
    fn meta_attributes_are_key_then_content() {
        let plan = head_plan(&SEO).unwrap();
        assert_eq!(
            plan[1].attributes(),
            vec![("name", "description"), ("content", SEO.description)]
        );
        assert_eq!(
            plan[3].attributes(),
            vec![("property", "og:title"), ("content", SEO.og_title)]
        );
        assert_eq!(plan[1].text(), None);
    }
}
