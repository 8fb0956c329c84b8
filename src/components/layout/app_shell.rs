//! Shared layout wrapper with the navbar, content container and footer. Routed
//! views are held back behind a full-screen spinner until the store has been
//! hydrated, so guards never decide on a half-loaded session.
//! Navigation remains client-side; the API must enforce access control.

use super::Footer;
use crate::components::Spinner;
use crate::features::{auth::client, store::use_store};
use cohort_projects::navigation::paths;
use cohort_projects::store::Intent;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

const NAV_LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header, main content container and footer.
#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let close_menu = move |_| set_menu_open.set(false);
    let store = use_store();
    let is_authenticated = store.is_authenticated;
    let is_loading = store.is_loading;
    let navigate = use_navigate();

    let sign_out = move |_| {
        set_menu_open.set(false);
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(err) = client::logout().await {
                tracing::warn!(error = %err, "remote logout failed, clearing local session anyway");
            }
            if let Err(err) = store.dispatch_and_navigate(Intent::Logout, navigate) {
                tracing::error!(error = %err, "logout intent rejected");
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=close_menu
                    >
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Cohort Projects"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            <li>
                                <A href=paths::HOME {..} class=NAV_LINK_CLASS on:click=close_menu>
                                    "Home"
                                </A>
                            </li>
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <A
                                                href=paths::LOGIN
                                                {..}
                                                class=NAV_LINK_CLASS
                                                on:click=close_menu
                                            >
                                                "Sign In"
                                            </A>
                                        </li>
                                        <li>
                                            <A
                                                href=paths::REGISTER
                                                {..}
                                                class=NAV_LINK_CLASS
                                                on:click=close_menu
                                            >
                                                "Register"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A href=paths::DASHBOARD {..} class=NAV_LINK_CLASS on:click=close_menu>
                                        "Dashboard"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href=paths::NEW_PROJECT
                                        {..}
                                        class=NAV_LINK_CLASS
                                        on:click=close_menu
                                    >
                                        "New Project"
                                    </A>
                                </li>
                                <li>
                                    <button type="button" class=NAV_LINK_CLASS on:click=sign_out.clone()>
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    <Show
                        when=move || !is_loading.get()
                        fallback=|| {
                            view! {
                                <div class="flex min-h-[50vh] items-center justify-center">
                                    <Spinner large=true />
                                </div>
                            }
                        }
                    >
                        {children()}
                    </Show>
                </div>
            </main>
            <Footer />
        </div>
    }
}
