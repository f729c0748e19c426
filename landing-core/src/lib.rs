//! # mobile-pay-core
//!
//! Everything the GTB Bank Mobile Pay landing page knows that does not need a
//! browser: the five content sections, the SEO configuration, the ordered
//! plan of `<head>` elements derived from it, and the synchronizer that puts
//! those elements into a document head and takes them out again.
//!
//! The browser crate (`mobile-pay-landing`) supplies a DOM-backed
//! [`head::HeadHost`] and renders [`content::SECTIONS`] with Leptos.
//!
//! ## Head lifecycle
//!
//! ```rust
//! use mobile_pay_core::{head, seo};
//!
//! # fn demo<H: head::HeadHost>(host: H) -> Result<(), Box<dyn std::error::Error>> {
//! let plan = seo::head_plan(&seo::SEO)?;
//! let mounted = head::mount(host, &plan)?;
//! // ... page is displayed ...
//! mounted.unmount();
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`content`] - section records, navigation links, brand constants
//! - [`anchors`] - URL fragment to section resolution
//! - [`seo`] - SEO configuration and the head element plan
//! - [`structured_data`] - JSON-LD document for search engines
//! - [`head`] - mount/unmount of head elements through a host
//! - [`fallback`] - one-shot image fallback guard
//! - [`error`] - error types

pub mod anchors;
pub mod content;
pub mod error;
pub mod fallback;
pub mod head;
pub mod seo;
pub mod structured_data;

pub use error::{HeadError, SeoError};
