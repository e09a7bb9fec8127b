use leptos::prelude::*;

use super::components::Card;
use crate::page::{mailto_href, tel_href, Section};
use crate::profile::{is_configured, PROFILE};
use crate::rotation::RoleRotation;

#[component]
pub fn Hero(rotation: RwSignal<RoleRotation>) -> impl IntoView {
    let resume = PROFILE.links.resume;
    view! {
        <section
            id=Section::Home.id()
            class="max-w-6xl mx-auto px-6 pt-16 pb-12 flex flex-col md:flex-row items-center gap-8"
        >
            <div class="slide-in-left">
                <p class="text-sm text-gray-500 font-semibold">{PROFILE.location}</p>
                <h1 class="text-5xl md:text-6xl font-extrabold">{PROFILE.name}</h1>
                <p class="text-xl text-blue-600 mt-2" aria-live="polite">
                    {move || rotation.get().current()}
                </p>
                <p class="text-gray-700 max-w-2xl mt-4">{PROFILE.summary}</p>
                <div class="flex flex-wrap gap-3 mt-4">
                    <a
                        href=mailto_href(PROFILE.email)
                        class="px-6 py-3 rounded-xl bg-blue-500 text-white hover:bg-blue-600 transition"
                    >
                        "Contact"
                    </a>
                    <a
                        href=tel_href(PROFILE.phone)
                        class="px-6 py-3 rounded-xl border border-blue-500 text-blue-500 hover:bg-blue-50 transition"
                    >
                        "Call Me"
                    </a>
                    {is_configured(resume)
                        .then(|| {
                            view! {
                                <a
                                    href=resume
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-6 py-3 rounded-xl border border-gray-400 text-gray-700 hover:bg-gray-200 transition"
                                >
                                    "Resume"
                                </a>
                            }
                        })}
                </div>
            </div>
            <div class="slide-in-right">
                <Card class="p-0 overflow-hidden">
                    <img
                        src=PROFILE.portrait.href()
                        alt=format!("Profile portrait of {}", PROFILE.name)
                        class="rounded-full border-4 border-blue-200 shadow-xl w-64 h-64 mx-auto object-cover"
                    />
                </Card>
            </div>
        </section>
    }
}
