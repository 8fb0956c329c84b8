//! Client wrappers for the auth API endpoints. Sessions are cookie based, so
//! every call includes credentials and the response only carries the user.

use crate::app_lib::{
    get_optional_json_with_credentials, post_empty_with_credentials,
    post_json_with_credentials_response,
};
use cohort_projects::{
    AppError,
    model::{LoginRequest, RegisterRequest, User},
};

/// Fetches the current session user.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_session() -> Result<Option<User>, AppError> {
    get_optional_json_with_credentials("/api/auth/session").await
}

/// Signs in and lets the server set the session cookie.
pub async fn login(request: &LoginRequest) -> Result<User, AppError> {
    post_json_with_credentials_response("/api/auth/login", request).await
}

/// Creates an account and signs it in.
pub async fn register(request: &RegisterRequest) -> Result<User, AppError> {
    post_json_with_credentials_response("/api/auth/register", request).await
}

/// Clears the server-side session.
pub async fn logout() -> Result<(), AppError> {
    post_empty_with_credentials("/api/auth/logout").await
}
