use leptos::prelude::*;
use leptos_use::{use_document, use_event_listener};

use super::components::{PageSection, TagList};
use crate::page::Section;
use crate::profile::{Project, PROFILE};
use crate::selection::ProjectSelection;

#[component]
pub fn Projects(selection: RwSignal<ProjectSelection>) -> impl IntoView {
    view! {
        <PageSection section=Section::Projects>
            <div class="grid sm:grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {PROFILE
                    .projects
                    .iter()
                    .map(|project| view! { <ProjectTile project selection /> })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn ProjectTile(project: &'static Project, selection: RwSignal<ProjectSelection>) -> impl IntoView {
    view! {
        <div
            class="group relative cursor-pointer overflow-hidden rounded-2xl shadow-lg fade-in-up"
            aria-haspopup="dialog"
            aria-expanded=move || selection.get().is_selected(project).to_string()
            on:click=move |_| {
                log::debug!("selected project {}", project.title);
                selection.update(|s| s.select(project));
            }
        >
            <img
                src=project.image.href()
                alt=project.title
                class="w-full h-56 object-cover group-hover:scale-105 transition-transform duration-300"
            />
            <div class="absolute inset-0 bg-black/50 opacity-0 group-hover:opacity-80 transition-opacity rounded-2xl flex flex-col justify-center items-center text-center p-4">
                <h3 class="text-white font-bold">{project.title}</h3>
                <p class="text-white text-sm mt-1">{project.description}</p>
            </div>
        </div>
    }
}

/// Detail overlay for the selected project. Renders nothing while the
/// selection is empty.
#[component]
pub fn ProjectModal(selection: RwSignal<ProjectSelection>) -> impl IntoView {
    let close = move || selection.update(ProjectSelection::clear);

    let _ = use_event_listener(use_document(), leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && selection.get_untracked().is_open() {
            close();
        }
    });

    view! {
        {move || {
            selection
                .get()
                .modal()
                .map(|content| {
                    view! {
                        <div
                            class="fixed inset-0 bg-black/70 flex items-center justify-center z-50 fade-in"
                            role="dialog"
                            aria-modal="true"
                            on:click=move |_| close()
                        >
                            <div
                                class="bg-white rounded-2xl shadow-xl max-w-2xl w-full mx-4 p-6 relative scale-in"
                                on:click=|ev| ev.stop_propagation()
                            >
                                <button
                                    on:click=move |_| close()
                                    class="absolute top-4 right-4 text-gray-500 hover:text-gray-800 text-xl"
                                    aria-label="Close"
                                >
                                    "✕"
                                </button>
                                <img
                                    src=content.image_href
                                    alt=content.title
                                    class="w-full h-64 object-cover rounded-lg mb-4"
                                />
                                <h3 class="text-2xl font-bold text-gray-800">{content.title}</h3>
                                <p class="text-gray-600 mt-2">{content.description}</p>
                                <div class="mt-3">
                                    <TagList tags=content.tags />
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
