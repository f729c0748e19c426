//! Document head binding: a `web-sys` [`HeadHost`] and the component that
//! keeps the SEO elements in `<head>` for as long as the page is mounted.

use anyhow::Result;
use leptos::prelude::*;
use mobile_pay_core::HeadError;
use mobile_pay_core::head::{self, HeadHost, MountedHead};
use mobile_pay_core::seo::{HeadElement, SeoConfig, head_plan};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlHeadElement};

/// `document.head` of the current window.
pub struct DomHead {
    document: Document,
    head: HtmlHeadElement,
}

impl DomHead {
    pub fn from_window() -> Result<Self, HeadError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(HeadError::MissingHead)?;
        let head = document.head().ok_or(HeadError::MissingHead)?;
        Ok(Self { document, head })
    }
}

fn host_error(tag: &'static str, err: JsValue) -> HeadError {
    HeadError::Host {
        tag,
        message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

impl HeadHost for DomHead {
    type Node = Element;

    fn create(&self, element: &HeadElement<'_>) -> Result<Element, HeadError> {
        let tag = element.tag();
        let node = self
            .document
            .create_element(tag)
            .map_err(|err| host_error(tag, err))?;
        for (name, value) in element.attributes() {
            node.set_attribute(name, value)
                .map_err(|err| host_error(tag, err))?;
        }
        if let Some(text) = element.text() {
            node.set_text_content(Some(text));
        }
        Ok(node)
    }

    fn append(&self, node: &Element) -> Result<(), HeadError> {
        self.head
            .append_child(node)
            .map(|_| ())
            .map_err(|err| host_error("head", err))
    }

    fn detach(&self, node: &Element) -> bool {
        match node.parent_node() {
            Some(parent) => parent.remove_child(node).is_ok(),
            None => false,
        }
    }
}

fn mount_seo(config: &SeoConfig) -> Result<MountedHead<DomHead>> {
    let plan = head_plan(config)?;
    let host = DomHead::from_window()?;
    Ok(head::mount(host, &plan)?)
}

/// Writes the SEO head elements when created and removes them when its owner
/// is cleaned up. Renders nothing.
#[component]
pub fn SeoHead(config: &'static SeoConfig) -> impl IntoView {
    match mount_seo(config) {
        Ok(mounted) => {
            // Element handles are not Send; keep them in local storage owned
            // by this component. Disposing drops the handle, which unmounts.
            let handle = StoredValue::new_local(mounted);
            on_cleanup(move || handle.dispose());
        }
        Err(err) => tracing::warn!("SEO head elements not mounted: {err:#}"),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use mobile_pay_core::seo::SEO;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn head_children() -> u32 {
        document().head().unwrap().child_element_count()
    }

    fn plan_len() -> u32 {
        head_plan(&SEO).unwrap().len() as u32
    }

    #[wasm_bindgen_test]
    fn dom_head_mount_and_unmount_round_trip() {
        let before = head_children();
        let plan = head_plan(&SEO).unwrap();

        let mounted = head::mount(DomHead::from_window().unwrap(), &plan).unwrap();
        assert_eq!(head_children(), before + plan_len());
        let canonical = document()
            .query_selector(r#"link[rel="canonical"]"#)
            .unwrap()
            .expect("canonical link");
        assert_eq!(canonical.get_attribute("href").as_deref(), Some(SEO.url));
        let json_ld = document()
            .query_selector(r#"script[type="application/ld+json"]"#)
            .unwrap()
            .expect("structured data script");
        assert!(json_ld.text_content().unwrap().contains("#organization"));

        // Something else removes the title first; unmount skips it.
        mounted.nodes()[0].remove();
        assert_eq!(mounted.unmount(), plan.len() - 1);
        assert_eq!(head_children(), before);
    }

    #[wasm_bindgen_test]
    fn seo_head_is_removed_when_owner_cleans_up() {
        let before = head_children();
        let owner = Owner::new();
        owner.with(|| {
            let config: &'static SeoConfig = &SEO;
            let _view = view! { <SeoHead config=config /> };
        });
        assert_eq!(head_children(), before + plan_len());
        let description = document()
            .query_selector(r#"meta[name="description"]"#)
            .unwrap()
            .expect("description meta");
        assert_eq!(description.get_attribute("content").as_deref(), Some(SEO.description));

        owner.cleanup();
        assert_eq!(head_children(), before);
        assert!(
            document()
                .query_selector(r#"meta[name="description"]"#)
                .unwrap()
                .is_none()
        );
    }
}
