//! Project list with free-text search and a track filter.

use super::INPUT_CLASS;
use crate::components::{Alert, AlertKind, ProjectCard};
use crate::features::store::use_store;
use cohort_projects::{filter::ProjectFilter, model::Project, navigation::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_store();
    let (query, set_query) = signal(String::new());
    let (track, set_track) = signal(String::new());

    let tracks = Memo::new(move |_| store.state.with(|state| state.projects().tracks()));
    let visible = Memo::new(move |_| {
        let filter = ProjectFilter::new(&query.get(), Some(track.get().as_str()));
        store.state.with(|state| {
            filter
                .apply(state.projects().iter())
                .into_iter()
                .cloned()
                .collect::<Vec<Project>>()
        })
    });
    let total = Memo::new(move |_| store.state.with(|state| state.projects().len()));

    view! {
        <div class="mb-6 flex flex-wrap items-center justify-between gap-4">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Projects"</h1>
            <A
                href=paths::NEW_PROJECT
                {..}
                class="px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
            >
                "New Project"
            </A>
        </div>
        <div class="mb-6 grid gap-4 md:grid-cols-3">
            <input
                type="search"
                class=format!("{INPUT_CLASS} md:col-span-2")
                placeholder="Search by name or description"
                aria-label="Search projects"
                prop:value=move || query.get()
                on:input=move |event| set_query.set(event_target_value(&event))
            />
            <select
                class=INPUT_CLASS
                aria-label="Filter by track"
                on:change=move |event| set_track.set(event_target_value(&event))
            >
                <option value="">"All tracks"</option>
                <For
                    each=move || tracks.get()
                    key=|track| track.clone()
                    children=move |option| {
                        let selected = {
                            let option = option.clone();
                            move || track.get() == option
                        };
                        view! {
                            <option value=option.clone() selected=selected>
                                {option.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
        <Show
            when=move || !visible.with(Vec::is_empty)
            fallback=move || {
                let message = if total.get() == 0 {
                    "No projects yet. Create the first one!"
                } else {
                    "No projects match your filters."
                };
                view! { <Alert kind=AlertKind::Info message=message /> }
            }
        >
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                <For
                    each=move || visible.get()
                    key=|project| project.id.clone()
                    children=|project| view! { <ProjectCard project=project /> }
                />
            </div>
        </Show>
    }
}
