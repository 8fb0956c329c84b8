//! Frontend features: the state store and the API clients that feed it.
//! Routes import these modules to keep view code focused on rendering while
//! session handling and network calls stay in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod projects;
pub(crate) mod store;
