use crate::app_lib::git_commit_hash;
use cohort_projects::format::short_sha;
use leptos::prelude::*;

/// Version line with the build's short commit hash.
#[component]
pub fn Footer() -> impl IntoView {
    let commit = short_sha(git_commit_hash()).to_string();

    view! {
        <footer class="border-t border-gray-200 dark:border-gray-700">
            <div class="max-w-screen-xl mx-auto p-4 text-xs text-gray-500 dark:text-gray-400">
                {format!("Cohort Projects v{} ({commit})", env!("CARGO_PKG_VERSION"))}
            </div>
        </footer>
    }
}
