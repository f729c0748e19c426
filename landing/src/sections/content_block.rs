//! One scroll section of the page, rendered from a [`ContentSection`].

use leptos::prelude::*;
use mobile_pay_core::content::{
    CTA_HREF, CTA_LABEL, ContentSection, PLACEHOLDER_IMAGE, SECTIONS, SectionLayout,
};
use mobile_pay_core::fallback::ImageFallback;

/// All sections, in document order.
#[component]
pub fn Sections() -> impl IntoView {
    SECTIONS
        .iter()
        .map(|section| view! { <ContentBlock section=section /> })
        .collect::<Vec<_>>()
}

#[component]
pub fn ContentBlock(section: &'static ContentSection) -> impl IntoView {
    match section.layout {
        SectionLayout::Hero => view! {
            <section
                id=section.id
                class="py-16 md:py-24 bg-gradient-to-br from-blue-50 to-indigo-100 text-center flex items-center justify-center min-h-[calc(100vh-80px)]"
            >
                <div class="container mx-auto px-4 max-w-4xl">
                    <h1 class="text-5xl md:text-6xl font-extrabold text-gray-900 mb-6 leading-tight animate-fade-in-down">
                        {section.title}
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-700 mb-10 leading-relaxed animate-fade-in-up">
                        {section.body}
                    </p>
                    <div class="flex justify-center animate-zoom-in">
                        <SectionImage
                            section=section
                            class="rounded-xl shadow-xl max-w-full h-auto border-4 border-white transform transition-transform duration-500 hover:scale-105"
                        />
                    </div>
                </div>
            </section>
        }
        .into_any(),
        SectionLayout::TextFirst => view! {
            <section id=section.id class=band_class(section)>
                <div class="container mx-auto px-4 max-w-4xl flex flex-col md:flex-row items-center gap-8">
                    <SectionCopy section=section />
                    <div class="md:w-1/2 flex justify-center">
                        <SectionImage section=section />
                    </div>
                </div>
            </section>
        }
        .into_any(),
        SectionLayout::ImageFirst => view! {
            <section id=section.id class=band_class(section)>
                <div class="container mx-auto px-4 max-w-4xl flex flex-col-reverse md:flex-row items-center gap-8">
                    <div class="md:w-1/2 flex justify-center">
                        <SectionImage section=section />
                    </div>
                    <SectionCopy section=section />
                </div>
            </section>
        }
        .into_any(),
        SectionLayout::CallToAction => view! {
            <section
                id=section.id
                class="py-16 md:py-24 bg-gradient-to-br bg-blue-700 from-blue-600 to-indigo-700 text-white text-center"
            >
                <div class="container mx-auto px-4 max-w-4xl">
                    <h2 class="text-5xl md:text-6xl font-extrabold mb-6 leading-tight">
                        {section.title}
                    </h2>
                    <p class="text-xl md:text-2xl mb-10 leading-relaxed">
                        {section.body}
                    </p>
                    <div class="flex justify-center mb-10">
                        <SectionImage section=section />
                    </div>
                    <a
                        href=CTA_HREF
                        class="inline-block bg-white text-blue-700 font-bold py-4 px-10 rounded-full text-lg shadow-lg hover:shadow-xl transform hover:-translate-y-1 transition-all duration-300 ease-in-out"
                    >
                        {CTA_LABEL}
                    </a>
                </div>
            </section>
        }
        .into_any(),
    }
}

/// Alternating white / gray bands for the two-column sections.
fn band_class(section: &ContentSection) -> &'static str {
    let position = SECTIONS.iter().position(|s| s.id == section.id).unwrap_or(0);
    if position % 2 == 1 {
        "py-16 md:py-20 bg-white"
    } else {
        "py-16 md:py-20 bg-gray-50"
    }
}

#[component]
fn SectionCopy(section: &'static ContentSection) -> impl IntoView {
    view! {
        <div class="md:w-1/2 text-center md:text-left">
            <h2 class="text-4xl font-bold text-gray-800 mb-4 leading-tight">
                {section.title}
            </h2>
            <p class="text-lg text-gray-600 leading-relaxed">
                {section.body}
            </p>
        </div>
    }
}

/// Section image that swaps to the placeholder on its first load failure and
/// ignores every failure after that.
#[component]
fn SectionImage(
    section: &'static ContentSection,
    #[prop(default = "rounded-xl shadow-lg max-w-full h-auto transform transition-transform duration-500 hover:scale-105")]
    class: &'static str,
) -> impl IntoView {
    let mut fallback = ImageFallback::new(PLACEHOLDER_IMAGE);
    view! {
        <img
            src=section.image
            alt=section.alt
            class=class
            on:error=move |ev| {
                if let Some(placeholder) = fallback.take() {
                    tracing::debug!(section = section.id, "section image failed to load");
                    event_target::<web_sys::HtmlImageElement>(&ev).set_src(placeholder);
                }
            }
        />
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, HtmlElement, HtmlImageElement};

    wasm_bindgen_test_configure!(run_in_browser);

    const BROKEN: &str = "https://invalid.test/broken.png";

    fn fire_error(img: &HtmlImageElement) {
        let event = Event::new("error").unwrap();
        img.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn failed_image_swaps_to_placeholder_only_once() {
        let document = web_sys::window().unwrap().document().unwrap();
        let parent: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&parent).unwrap();

        let section: &'static ContentSection = &SECTIONS[1];
        let _mounted = mount_to(parent.clone(), move || view! { <SectionImage section=section /> });
        let img: HtmlImageElement = parent
            .query_selector("img")
            .unwrap()
            .expect("section image mounted")
            .unchecked_into();
        assert_eq!(img.get_attribute("src").as_deref(), Some(section.image));
        assert_eq!(img.get_attribute("alt").as_deref(), Some(section.alt));

        fire_error(&img);
        assert_eq!(img.get_attribute("src").as_deref(), Some(PLACEHOLDER_IMAGE));

        // A second failure is left alone, whatever the source is by then.
        img.set_src(BROKEN);
        fire_error(&img);
        assert_eq!(img.get_attribute("src").as_deref(), Some(BROKEN));

        parent.remove();
    }
}
