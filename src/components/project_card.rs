use cohort_projects::format::{format_date, member_count_label};
use cohort_projects::model::Project;
use cohort_projects::navigation::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const LINK_CLASS: &str = "text-sm font-medium text-blue-700 hover:underline dark:text-blue-500";

/// Summary tile with links to the detail page and the repository.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = paths::project_detail(&project.id);
    let members = member_count_label(project.member_count());
    let created = format_date(&project.created_at);

    view! {
        <div class="flex flex-col rounded-lg border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800">
            <h2 class="mb-2 text-lg font-semibold text-gray-900 dark:text-white">{project.name}</h2>
            <p class="mb-4 text-sm text-gray-600 dark:text-gray-300 line-clamp-3">
                {project.description}
            </p>
            <div class="flex flex-wrap gap-2 text-xs">
                <span class="rounded bg-blue-100 px-2 py-0.5 font-medium text-blue-800 dark:bg-blue-900 dark:text-blue-300">
                    {project.track}
                </span>
                <span class="rounded bg-gray-100 px-2 py-0.5 font-medium text-gray-800 dark:bg-gray-700 dark:text-gray-300">
                    {project.cohort}
                </span>
            </div>
            <div class="mt-4 flex justify-between text-xs text-gray-500 dark:text-gray-400">
                <span>{members}</span>
                <span>{created}</span>
            </div>
            <div class="mt-4 flex gap-4 border-t border-gray-100 pt-4 dark:border-gray-700">
                <A href=href {..} class=LINK_CLASS>
                    "View Details"
                </A>
                <a
                    href=project.github_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class=LINK_CLASS
                >
                    "View Code"
                </a>
            </div>
        </div>
    }
}
