use leptos::prelude::*;

use super::components::{Card, PageSection, TagList};
use crate::page::Section;
use crate::profile::PROFILE;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <PageSection section=Section::About>
            <p class="text-gray-700 leading-relaxed">{PROFILE.summary}</p>
        </PageSection>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <PageSection section=Section::Skills>
            <div class="grid md:grid-cols-2 gap-6">
                {PROFILE
                    .skills
                    .iter()
                    .map(|group| {
                        view! {
                            <Card>
                                <h3 class="font-semibold text-blue-600 mb-3">{group.category}</h3>
                                <TagList tags=group.skills />
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <PageSection section=Section::Experience>
            <div class="grid md:grid-cols-2 gap-6">
                {PROFILE
                    .experience
                    .iter()
                    .map(|exp| {
                        view! {
                            <Card>
                                <h3 class="text-lg font-semibold text-blue-600">{exp.role}</h3>
                                <p class="text-gray-500 text-sm">
                                    {format!("{} — {}", exp.company, exp.period)}
                                </p>
                                <ul class="list-disc list-inside mt-2 text-gray-700">
                                    {exp.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                                </ul>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <PageSection section=Section::Education>
            {PROFILE
                .education
                .iter()
                .map(|edu| {
                    view! {
                        <Card class="mb-4">
                            <h3 class="font-semibold text-blue-600">{edu.degree}</h3>
                            <p class="text-gray-500">{format!("{} — {}", edu.school, edu.period)}</p>
                        </Card>
                    }
                })
                .collect_view()}
        </PageSection>
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <PageSection section=Section::Achievements>
            <ul class="list-disc list-inside text-gray-700">
                {PROFILE.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
            </ul>
        </PageSection>
    }
}
