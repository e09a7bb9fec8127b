use leptos::prelude::*;

use crate::page::Section;
use crate::profile::PROFILE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 bg-gray-100 border-b border-gray-300 shadow-sm">
            <nav class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                <a href=Section::Home.anchor() class="font-extrabold text-blue-600 text-xl">
                    {PROFILE.brand}
                </a>
                <div class="hidden md:flex gap-6 text-sm">
                    {Section::NAV
                        .iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.anchor()
                                    class="text-gray-700 hover:text-blue-600 transition"
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}
