//! Single project view. Owner and admin actions are resolved from the current
//! snapshot on every render.

use crate::components::{Alert, AlertKind, Button, ButtonVariant};
use crate::features::store::use_store;
use cohort_projects::{
    format::{format_date, member_count_label},
    model::{Member, Project},
    navigation::paths,
    permissions::ProjectPermissions,
    store::Intent,
};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
pub(crate) struct ProjectParams {
    pub(crate) id: Option<String>,
}

/// Looks up the project named by the `:id` route parameter.
pub(crate) fn use_routed_project() -> Memo<Option<Project>> {
    let store = use_store();
    let params = use_params::<ProjectParams>();
    Memo::new(move |_| {
        let id = params.get().ok().and_then(|params| params.id)?;
        store.state.with(|state| state.project(&id).cloned())
    })
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let project = use_routed_project();

    move || match project.get() {
        Some(project) => view! { <ProjectDetail project=project /> }.into_any(),
        None => view! { <ProjectNotFound /> }.into_any(),
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let store = use_store();
    let navigate = use_navigate();
    let (error, set_error) = signal::<Option<String>>(None);

    let project_for_permissions = project.clone();
    let permissions = Memo::new(move |_| {
        store.state.with(|state| {
            ProjectPermissions::resolve(state.current_user(), &project_for_permissions)
        })
    });

    let project_id = project.id.clone();
    let on_delete = Callback::new(move |()| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to delete this project?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        if let Err(err) =
            store.dispatch_and_navigate(Intent::DeleteProject(project_id.clone()), &navigate)
        {
            set_error.set(Some(err.to_string()));
        }
    });

    let members_href = StoredValue::new(paths::project_members(&project.id));
    let headcount = member_count_label(project.member_count());
    let created = format_date(&project.created_at);

    view! {
        <article class="block rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800 space-y-6">
            <header class="flex flex-wrap items-start justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{project.name}</h1>
                    <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                        {format!("{} · {} · created {created}", project.track, project.cohort)}
                    </p>
                </div>
                <Show when=move || permissions.get().can_modify()>
                    <div class="flex gap-2">
                        <Show when=move || permissions.get().can_manage_members()>
                            <A
                                href=members_href.get_value()
                                {..}
                                class="px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                            >
                                "Add Members"
                            </A>
                        </Show>
                        <Show when=move || permissions.get().can_delete()>
                            <Button variant=ButtonVariant::Danger on_click=on_delete>
                                "Delete Project"
                            </Button>
                        </Show>
                    </div>
                </Show>
            </header>
            <p class="text-gray-700 dark:text-gray-300 whitespace-pre-line">{project.description}</p>
            <a
                href=project.github_url.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="inline-block text-sm text-blue-700 hover:underline dark:text-blue-500"
            >
                {project.github_url.clone()}
            </a>
            <section>
                <h2 class="mb-2 text-lg font-semibold text-gray-900 dark:text-white">
                    {format!("Team ({headcount})")}
                </h2>
                <PeopleList title="Owners" people=project.owners />
                <PeopleList title="Members" people=project.members />
            </section>
            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}
        </article>
    }
}

#[component]
fn PeopleList(title: &'static str, people: Vec<Member>) -> impl IntoView {
    view! {
        <div class="mb-4">
            <span class="block text-sm font-medium text-gray-500 dark:text-gray-200">{title}</span>
            {if people.is_empty() {
                view! { <p class="text-sm text-gray-400">"None yet"</p> }.into_any()
            } else {
                view! {
                    <ul class="list-disc pl-5 text-gray-900 dark:text-white">
                        {people
                            .into_iter()
                            .map(|person| view! { <li>{person.name}</li> })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </div>
    }
}

/// Placeholder for an unknown project id. Never an error.
#[component]
pub(crate) fn ProjectNotFound() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Project not found"</h1>
            <Button on_click=Callback::new(move |()| navigate(paths::DASHBOARD, Default::default()))>
                "Return to Dashboard"
            </Button>
        </div>
    }
}
