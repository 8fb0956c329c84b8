//! Route table. Protected views are wrapped in [`RequireAuth`]; anything the
//! table does not know redirects home.

mod add_members;
mod dashboard;
mod home;
mod login;
mod new_project;
mod project_detail;
mod register;

use add_members::AddMembersPage;
use dashboard::DashboardPage;
use home::HomePage;
use login::LoginPage;
use new_project::NewProjectPage;
use project_detail::ProjectDetailPage;
use register::RegisterPage;

use crate::features::auth::RequireAuth;
use cohort_projects::navigation::paths;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

pub(crate) const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub(crate) const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <Redirect path=paths::HOME /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route
                path=path!("/dashboard")
                view=|| view! { <RequireAuth><DashboardPage /></RequireAuth> }
            />
            <Route
                path=path!("/projects/new")
                view=|| view! { <RequireAuth><NewProjectPage /></RequireAuth> }
            />
            <Route
                path=path!("/projects/:id")
                view=|| view! { <RequireAuth><ProjectDetailPage /></RequireAuth> }
            />
            <Route
                path=path!("/projects/:id/members")
                view=|| view! { <RequireAuth><AddMembersPage /></RequireAuth> }
            />
        </Routes>
    }
}
