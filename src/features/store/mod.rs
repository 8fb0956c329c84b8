//! Application state shared through Leptos context. The provider owns one
//! `RwSignal<AppState>` and hydrates it once on mount from the session and
//! projects endpoints; every view reads snapshots of it and mutates it only
//! through [`StoreContext::dispatch`].

use crate::features::{auth, projects};
use cohort_projects::{
    StoreError,
    model::{Project, User},
    store::{AppState, Intent, Transition},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::NavigateOptions;

#[derive(Clone, Copy)]
/// Store context shared through Leptos.
pub struct StoreContext {
    pub state: RwSignal<AppState>,
    pub is_authenticated: Signal<bool>,
    pub is_loading: Signal<bool>,
    pub current_user: Signal<Option<User>>,
}

impl StoreContext {
    fn new(state: RwSignal<AppState>) -> Self {
        Self {
            state,
            is_authenticated: Signal::derive(move || state.with(AppState::is_authenticated)),
            is_loading: Signal::derive(move || state.with(AppState::is_loading)),
            current_user: Signal::derive(move || state.with(|state| state.current_user().cloned())),
        }
    }

    /// Applies an intent to a copy of the state and commits it only on
    /// success, so a rejected intent never notifies subscribers.
    pub fn dispatch(&self, intent: Intent) -> Result<Transition, StoreError> {
        let (next, transition) = self.state.with_untracked(|state| state.applied(intent))?;
        self.state.set(next);
        Ok(transition)
    }

    /// Like [`Self::dispatch`], but follows the transition before committing.
    /// Guards on the page being left then never see the new state, so a
    /// logout lands on `/` rather than bouncing to `/login`.
    pub fn dispatch_and_navigate(
        &self,
        intent: Intent,
        navigate: impl Fn(&str, NavigateOptions),
    ) -> Result<Transition, StoreError> {
        let (next, transition) = self.state.with_untracked(|state| state.applied(intent))?;
        if let Some(target) = &transition.navigate_to {
            navigate(target, NavigateOptions::default());
        }
        self.state.set(next);
        Ok(transition)
    }

    /// Stores a freshly signed-in user together with their projects and
    /// returns the sign-in navigation.
    pub fn sign_in(&self, user: User, projects: Vec<Project>) -> Result<Transition, StoreError> {
        let transition = self.dispatch(Intent::Login(user))?;
        self.dispatch(Intent::ProjectsLoaded(projects))?;
        Ok(transition)
    }
}

/// Provides the store and hydrates it once on mount. Hydration failures are
/// logged and leave an empty, usable store behind.
#[component]
pub fn StoreProvider(children: Children) -> impl IntoView {
    let store = StoreContext::new(RwSignal::new(AppState::default()));
    provide_context(store);

    spawn_local(async move {
        let user = match auth::client::fetch_session().await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "session hydration failed");
                None
            }
        };
        let projects = if user.is_some() {
            match projects::client::list_projects().await {
                Ok(projects) => projects,
                Err(err) => {
                    tracing::warn!(error = %err, "project hydration failed");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        if let Err(err) = store.dispatch(Intent::Hydrated { user, projects }) {
            tracing::error!(error = %err, "hydration rejected");
        }
    });

    view! { {children()} }
}

/// Returns the store context or a fallback empty store.
pub fn use_store() -> StoreContext {
    use_context::<StoreContext>()
        .unwrap_or_else(|| StoreContext::new(RwSignal::new(AppState::default())))
}
