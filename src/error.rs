//! Error types shared by the store, form validation and API helpers. Messages
//! are rendered verbatim in alert banners, so they must stay user-facing and
//! never carry credentials.

use thiserror::Error;

/// A form field failed client-side validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Project name is required.")]
    MissingName,
    #[error("Track is required.")]
    MissingTrack,
    #[error("Cohort is required.")]
    MissingCohort,
    #[error("GitHub URL must look like https://github.com/<owner>/<repo> (got \"{0}\").")]
    InvalidGithubUrl(String),
    #[error("Member ID is required.")]
    MissingMemberId,
    #[error("Member name is required.")]
    MissingMemberName,
    #[error("Name is required.")]
    MissingDisplayName,
    #[error("Email address looks invalid.")]
    InvalidEmail,
    #[error("Password is required.")]
    MissingPassword,
    #[error("Password must be at least {0} characters.")]
    PasswordTooShort(usize),
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// An intent could not be applied to the application state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Project {0} not found.")]
    NotFound(String),
    #[error("You must be signed in to do that.")]
    Unauthenticated,
    #[error("You do not have permission to do that.")]
    Forbidden,
    #[error("{0} is already on this project.")]
    AlreadyMember(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Top-level error surfaced by views.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
