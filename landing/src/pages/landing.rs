// Landing page - fixed header, the five scroll sections, footer
use crate::sections::{Footer, Header, Sections};
use crate::styles::BASE_CSS;
use leptos::prelude::*;

#[component]
pub fn LandingPage(year: u32) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 font-inter text-gray-800">
            <style>{BASE_CSS}</style>
            <Header />
            // Top padding clears the fixed header
            <main class="pt-20">
                <Sections />
            </main>
            <Footer year=year />
        </div>
    }
}
