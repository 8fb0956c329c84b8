use super::{INPUT_CLASS, LABEL_CLASS};
use crate::components::{Alert, AlertKind, Button};
use crate::features::store::use_store;
use cohort_projects::{
    AppError,
    model::{NewProject, TRACKS},
    store::Intent,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NewProjectPage() -> impl IntoView {
    let store = use_store();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (track, set_track) = signal(String::new());
    let (cohort, set_cohort) = signal(String::new());
    let (github_url, set_github_url) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let input = NewProject {
            name: name.get_untracked(),
            description: description.get_untracked(),
            track: track.get_untracked(),
            cohort: cohort.get_untracked(),
            github_url: github_url.get_untracked(),
        };
        match store.dispatch(Intent::CreateProject(input)) {
            Ok(transition) => {
                if let Some(target) = transition.navigate_to {
                    navigate(&target, Default::default());
                }
            }
            Err(err) => set_error.set(Some(err.into())),
        }
    };

    view! {
        <form class="max-w-lg mx-auto" on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-bold text-gray-900 dark:text-white">"New project"</h1>
            <div class="mb-5">
                <label class=LABEL_CLASS for="project-name">
                    "Project name"
                </label>
                <input
                    id="project-name"
                    type="text"
                    class=INPUT_CLASS
                    required
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label class=LABEL_CLASS for="project-description">
                    "Description"
                </label>
                <textarea
                    id="project-description"
                    rows="4"
                    class=INPUT_CLASS
                    on:input=move |event| set_description.set(event_target_value(&event))
                ></textarea>
            </div>
            <div class="mb-5 grid gap-4 md:grid-cols-2">
                <div>
                    <label class=LABEL_CLASS for="project-track">
                        "Track"
                    </label>
                    <select
                        id="project-track"
                        class=INPUT_CLASS
                        required
                        on:change=move |event| set_track.set(event_target_value(&event))
                    >
                        <option value="">"Select a track"</option>
                        {TRACKS
                            .iter()
                            .map(|track| view! { <option value=*track>{*track}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class=LABEL_CLASS for="project-cohort">
                        "Cohort"
                    </label>
                    <input
                        id="project-cohort"
                        type="text"
                        class=INPUT_CLASS
                        placeholder="2026-A"
                        required
                        on:input=move |event| set_cohort.set(event_target_value(&event))
                    />
                </div>
            </div>
            <div class="mb-5">
                <label class=LABEL_CLASS for="project-github">
                    "GitHub repository"
                </label>
                <input
                    id="project-github"
                    type="url"
                    class=INPUT_CLASS
                    placeholder="https://github.com/owner/repo"
                    required
                    on:input=move |event| set_github_url.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit">"Create Project"</Button>
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
        </form>
    }
}
