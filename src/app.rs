use crate::components::AppShell;
use crate::features::store::StoreProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <StoreProvider>
            <Router>
                <AppShell>
                    <AppRoutes />
                </AppShell>
            </Router>
        </StoreProvider>
    }
}
