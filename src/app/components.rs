use leptos::prelude::*;

use crate::page::Section;

#[component]
pub fn PageSection(section: Section, children: Children) -> impl IntoView {
    view! {
        <section id=section.id() class="scroll-mt-24 py-16 fade-in-up">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-2xl md:text-3xl font-bold mb-6 text-gray-800">{section.label()}</h2>
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn Tag(label: &'static str) -> impl IntoView {
    view! {
        <span class="text-xs px-2 py-1 rounded-full border border-blue-300 bg-blue-50 text-blue-700">
            {label}
        </span>
    }
}

#[component]
pub fn TagList(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags.iter().map(|t| view! { <Tag label=*t /> }).collect_view()}
        </div>
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=format!("rounded-2xl p-5 shadow-md bg-white {class}")>{children()}</div> }
}
