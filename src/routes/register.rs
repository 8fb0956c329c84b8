use super::{INPUT_CLASS, LABEL_CLASS};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::{auth::client, projects, store::use_store};
use cohort_projects::{
    AppError,
    model::{MIN_PASSWORD_LENGTH, RegisterRequest},
    navigation::paths,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = use_store();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move {
            let user = client::register(&request).await?;
            let projects = projects::client::list_projects_or_empty().await;
            Ok::<_, AppError>((user, projects))
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result.and_then(|(user, projects)| {
                store.sign_in(user, projects).map_err(AppError::from)
            }) {
                Ok(transition) => {
                    if let Some(target) = transition.navigate_to {
                        navigate(&target, Default::default());
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let request = RegisterRequest::new(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        match request {
            Ok(request) => {
                register_action.dispatch(request);
            }
            Err(err) => set_error.set(Some(err.into())),
        }
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-bold text-gray-900 dark:text-white">"Create an account"</h1>
            <div class="mb-5">
                <label class=LABEL_CLASS for="name">
                    "Full name"
                </label>
                <input
                    id="name"
                    type="text"
                    class=INPUT_CLASS
                    autocomplete="name"
                    required
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label class=LABEL_CLASS for="email">
                    "Your email"
                </label>
                <input
                    id="email"
                    type="email"
                    class=INPUT_CLASS
                    autocomplete="email"
                    placeholder="name@school.edu"
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label class=LABEL_CLASS for="password">
                    "Password"
                </label>
                <input
                    id="password"
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="new-password"
                    minlength=MIN_PASSWORD_LENGTH.to_string()
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label class=LABEL_CLASS for="confirm-password">
                    "Confirm password"
                </label>
                <input
                    id="confirm-password"
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="new-password"
                    required
                    on:input=move |event| set_confirm_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=register_action.pending()>
                "Register"
            </Button>
            <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                "Already registered? "
                <A href=paths::LOGIN {..} class="text-blue-700 hover:underline dark:text-blue-500">
                    "Sign in"
                </A>
            </p>
            {move || {
                register_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
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
