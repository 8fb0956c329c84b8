//! Public landing page. Signed-in visitors also see the newest projects.

use crate::components::ProjectCard;
use crate::features::store::use_store;
use cohort_projects::navigation::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const RECENT_LIMIT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();
    let is_authenticated = store.is_authenticated;
    let recent = Memo::new(move |_| {
        store.state.with(|state| {
            state
                .projects()
                .recent(RECENT_LIMIT)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <section class="text-center py-12">
            <h1 class="mb-4 text-4xl font-extrabold tracking-tight text-gray-900 dark:text-white">
                "Cohort Projects"
            </h1>
            <p class="mb-8 text-lg text-gray-500 dark:text-gray-400">
                "Share what your team is building and find projects across every cohort and track."
            </p>
            <Show
                when=move || is_authenticated.get()
                fallback=|| {
                    view! {
                        <div class="flex justify-center gap-4">
                            <A
                                href=paths::LOGIN
                                {..}
                                class="px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                            >
                                "Sign In"
                            </A>
                            <A
                                href=paths::REGISTER
                                {..}
                                class="px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100"
                            >
                                "Register"
                            </A>
                        </div>
                    }
                }
            >
                <A
                    href=paths::DASHBOARD
                    {..}
                    class="px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                >
                    "Go to Dashboard"
                </A>
            </Show>
        </section>
        <Show when=move || is_authenticated.get() && !recent.with(Vec::is_empty)>
            <section>
                <h2 class="mb-4 text-xl font-semibold text-gray-900 dark:text-white">
                    "Recent projects"
                </h2>
                <div class="grid gap-4 md:grid-cols-3">
                    <For
                        each=move || recent.get()
                        key=|project| project.id.clone()
                        children=|project| view! { <ProjectCard project=project /> }
                    />
                </div>
            </section>
        </Show>
    }
}
