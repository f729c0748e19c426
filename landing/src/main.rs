// GTB Bank Mobile Pay landing page — Leptos 0.8 CSR

mod head;
mod logging;
mod pages;
mod sections;
mod styles;

use head::SeoHead;
use leptos::prelude::*;
use mobile_pay_core::anchors::resolve_fragment;
use mobile_pay_core::seo::{SEO, SeoConfig};
use pages::LandingPage;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
    scroll_to_hash();
}

#[component]
fn App() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    let config: &'static SeoConfig = &SEO;
    view! {
        <SeoHead config=config />
        <LandingPage year=year />
    }
}

/// The browser's own fragment navigation runs before the sections exist, so
/// repeat it once the page is mounted.
fn scroll_to_hash() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let hash = document
        .location()
        .and_then(|location| location.hash().ok())
        .unwrap_or_default();
    let Some((index, section)) = resolve_fragment(&hash) else {
        return;
    };
    if let Some(target) = document.get_element_by_id(section.id) {
        tracing::debug!(index, id = section.id, "scrolling to initial fragment");
        target.scroll_into_view();
    }
}
