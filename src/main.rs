#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use cohort_projects::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(err) = app_lib::telemetry::init(&config) {
        web_sys::console::error_1(&err.to_string().into());
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), commit = app_lib::git_commit_hash(), "starting");

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
