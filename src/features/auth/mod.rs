//! Auth feature: API calls for sign in, registration and logout, plus the
//! guard component for protected routes. Passwords only ever leave the form
//! inside a request body and must never be logged.

pub(crate) mod client;
mod guards;

pub(crate) use guards::RequireAuth;
