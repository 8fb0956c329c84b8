use super::project_detail::{ProjectNotFound, use_routed_project};
use super::{INPUT_CLASS, LABEL_CLASS};
use crate::components::{Alert, AlertKind, Button, ButtonVariant};
use crate::features::store::use_store;
use cohort_projects::{
    AppError,
    model::{Member, Project},
    navigation::paths,
    permissions::ProjectPermissions,
    store::Intent,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn AddMembersPage() -> impl IntoView {
    let store = use_store();
    let project = use_routed_project();

    move || match project.get() {
        None => view! { <ProjectNotFound /> }.into_any(),
        Some(project) => {
            let permissions = store
                .state
                .with(|state| ProjectPermissions::resolve(state.current_user(), &project));
            if permissions.can_manage_members() {
                view! { <AddMemberForm project=project /> }.into_any()
            } else {
                let back = paths::project_detail(&project.id);
                view! {
                    <div class="max-w-lg mx-auto space-y-4">
                        <Alert
                            kind=AlertKind::Error
                            message="Only project owners can manage members."
                        />
                        <A href=back {..} class="text-sm text-blue-700 hover:underline dark:text-blue-500">
                            "Back to project"
                        </A>
                    </div>
                }
                    .into_any()
            }
        }
    }
}

#[component]
fn AddMemberForm(project: Project) -> impl IntoView {
    let store = use_store();
    let navigate = use_navigate();
    let (member_id, set_member_id) = signal(String::new());
    let (member_name, set_member_name) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let detail_href = paths::project_detail(&project.id);
    let navigate_back = navigate.clone();
    let on_cancel = Callback::new(move |()| navigate_back(&detail_href, Default::default()));

    let project_id = project.id.clone();
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let outcome = Member::new(&member_id.get_untracked(), &member_name.get_untracked())
            .map_err(AppError::from)
            .and_then(|member| {
                store
                    .dispatch(Intent::AddMember {
                        project_id: project_id.clone(),
                        member,
                    })
                    .map_err(AppError::from)
            });
        match outcome {
            Ok(transition) => {
                if let Some(target) = transition.navigate_to {
                    navigate(&target, Default::default());
                }
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <form class="max-w-lg mx-auto" on:submit=on_submit>
            <h1 class="mb-2 text-2xl font-bold text-gray-900 dark:text-white">"Add members"</h1>
            <p class="mb-6 text-sm text-gray-500 dark:text-gray-400">{project.name}</p>
            <div class="mb-5">
                <label class=LABEL_CLASS for="member-id">
                    "Student ID"
                </label>
                <input
                    id="member-id"
                    type="text"
                    class=INPUT_CLASS
                    required
                    on:input=move |event| set_member_id.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label class=LABEL_CLASS for="member-name">
                    "Name"
                </label>
                <input
                    id="member-name"
                    type="text"
                    class=INPUT_CLASS
                    required
                    on:input=move |event| set_member_name.set(event_target_value(&event))
                />
            </div>
            <div class="flex gap-2">
                <Button button_type="submit">"Add Member"</Button>
                <Button variant=ButtonVariant::Secondary on_click=on_cancel>
                    "Cancel"
                </Button>
            </div>
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
