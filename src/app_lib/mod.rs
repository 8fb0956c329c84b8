//! Shared frontend utilities for API access, logging and build metadata.
//!
//! Feature clients go through [`api`] so every request carries the session
//! cookie, times out the same way and surfaces sanitized errors. These helpers
//! never see passwords after the request body is encoded; callers must still
//! avoid logging form input.

pub(crate) mod api;
pub(crate) mod telemetry;

pub(crate) use api::{
    get_json_with_credentials, get_optional_json_with_credentials, post_empty_with_credentials,
    post_json_with_credentials_response,
};

/// Commit the bundle was built from, exported by `build.rs`.
pub fn git_commit_hash() -> &'static str {
    match option_env!("COHORT_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}
