use crate::features::store::use_store;
use cohort_projects::navigation::{Navigation, navigate};
use leptos::prelude::*;
use leptos_router::{components::Redirect, hooks::use_location};

/// Renders `children` only when the current location passes the route guard.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let store = use_store();
    let location = use_location();
    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        store.state.with(|state| navigate(&path, state.session()))
    });

    // UX-only guard; real access control must live on the API.
    move || match decision.get() {
        Navigation::Render(_) => children().into_any(),
        Navigation::Redirect(target) => view! { <Redirect path=target /> }.into_any(),
    }
}
