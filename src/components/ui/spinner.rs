use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] large: bool) -> impl IntoView {
    let size = if large { "h-12 w-12" } else { "h-7 w-7" };

    view! {
        <div
            class=format!(
                "inline-block {size} animate-spin rounded-full border-4 border-blue-200 border-t-blue-600",
            )
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
