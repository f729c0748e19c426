use leptos::prelude::*;
use mobile_pay_core::content::{BANK_NAME, CONTACT_EMAIL, POSTAL_ADDRESS};

/// Page footer. `year` is the copyright year, supplied by the caller so the
/// markup stays a pure function of its inputs.
#[component]
pub fn Footer(year: u32) -> impl IntoView {
    let copyright = format!("© {year} {BANK_NAME}. All rights reserved.");
    let mailto = format!("mailto:{CONTACT_EMAIL}");
    view! {
        <footer class="bg-gray-900 text-gray-400 py-10 text-center">
            <div class="container mx-auto px-4">
                <p class="mb-2">{copyright}</p>
                <p>{POSTAL_ADDRESS}</p>
                <p>
                    "Contact: "
                    <a href=mailto class="hover:underline">{CONTACT_EMAIL}</a>
                </p>
            </div>
        </footer>
    }
}
