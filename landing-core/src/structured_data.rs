//! JSON-LD structured data: an `Organization` and the `WebPage` it publishes,
//! wrapped in a schema.org `@graph` envelope.
//!
//! Field order of the serialized document is fixed by the struct declarations
//! below and consumers rely on it.

use serde::Serialize;

use crate::error::SeoError;
use crate::seo::SeoConfig;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Suffix appended to the page URL to form the publisher reference.
pub const ORGANIZATION_ID_SUFFIX: &str = "#organization";

/// Top-level JSON-LD document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredData<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@graph")]
    pub graph: (Organization<'a>, WebPage<'a>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub url: &'a str,
    pub logo: &'a str,
    #[serde(rename = "sameAs")]
    pub same_as: &'a [&'a str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub publisher: NodeReference,
}

/// `{ "@id": ... }` pointer to another graph node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeReference {
    #[serde(rename = "@id")]
    pub id: String,
}

impl<'a> StructuredData<'a> {
    pub fn from_config(config: &'a SeoConfig) -> Self {
        let organization = Organization {
            kind: "Organization",
            name: config.organization_name,
            url: config.url,
            logo: config.organization_logo,
            same_as: config.same_as,
        };
        // The publisher id is the page URL plus a fixed suffix; the
        // Organization node itself carries no @id.
        let page = WebPage {
            kind: "WebPage",
            name: config.title,
            description: config.description,
            url: config.url,
            publisher: NodeReference {
                id: format!("{}{}", config.url, ORGANIZATION_ID_SUFFIX),
            },
        };
        Self {
            context: SCHEMA_CONTEXT,
            graph: (organization, page),
        }
    }

    /// Compact JSON text for the `<script type="application/ld+json">` body.
    pub fn to_json(&self) -> Result<String, SeoError> {
        Ok(serde_json::to_string(self)?)
    }
}
