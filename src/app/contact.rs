use leptos::prelude::*;

use super::components::PageSection;
use crate::page::{contact_links, copyright_line, Section, BUILD_YEAR};
use crate::profile::PROFILE;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <PageSection section=Section::Contact>
            <p class="text-gray-700">"Feel free to reach out to me through the following channels:"</p>
            <ul class="mt-3 space-y-2 text-blue-600">
                {contact_links(&PROFILE)
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                {format!("{}: ", link.label)}
                                <a href=link.href class="underline">
                                    {link.text}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </PageSection>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 text-center text-sm text-gray-500">
            <p>{copyright_line(BUILD_YEAR, PROFILE.name)}</p>
        </footer>
    }
}
