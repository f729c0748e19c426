use leptos::prelude::*;
use mobile_pay_core::content::{BANK_NAME, NAV_LINKS};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-md py-4 px-6 md:px-12 flex justify-between items-center fixed w-full top-0 z-20 rounded-b-xl">
            <div class="flex items-center space-x-2">
                <BankLogo />
                <span class="text-2xl font-bold text-gray-800">{BANK_NAME}</span>
            </div>
            <nav>
                <ul class="flex space-x-6">
                    {NAV_LINKS.iter().map(|link| {
                        view! {
                            <li>
                                <a
                                    href=link.href()
                                    class="text-gray-600 hover:text-blue-600 font-medium transition-colors duration-200"
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
            </nav>
        </header>
    }
}

// Placeholder mark until the brand team ships an SVG asset
#[component]
fn BankLogo() -> impl IntoView {
    view! {
        <svg class="w-8 h-8 text-blue-600" fill="currentColor" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg">
            <path
                fill-rule="evenodd"
                d="M10 18a8 8 0 100-16 8 8 0 000 16zm1-11a1 1 0 10-2 0v2H7a1 1 0 100 2h2v2a1 1 0 102 0v-2h2a1 1 0 100-2h-2V7z"
                clip-rule="evenodd"
            ></path>
        </svg>
    }
}
