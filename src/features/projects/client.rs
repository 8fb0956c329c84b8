use crate::app_lib::get_json_with_credentials;
use cohort_projects::{AppError, model::Project};

/// Lists every project visible to the signed-in user.
pub async fn list_projects() -> Result<Vec<Project>, AppError> {
    let projects: Vec<Project> = get_json_with_credentials("/api/projects").await?;
    tracing::debug!(count = projects.len(), "projects fetched");
    Ok(projects)
}

/// Refreshes projects after sign in. Failures are logged and yield an empty
/// list so the user still lands on the dashboard.
pub async fn list_projects_or_empty() -> Vec<Project> {
    list_projects().await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load projects after sign in");
        Vec::new()
    })
}
