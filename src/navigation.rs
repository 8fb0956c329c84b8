//! Route table and access guard for the navigation shell.
//!
//! The Leptos router does the actual matching in the browser; [`Route::resolve`]
//! mirrors its table so the guard decision can be computed from a plain path
//! and tested without a DOM.

use crate::model::Session;

/// Path constants and builders shared by links, redirects and the route table.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
    pub const NEW_PROJECT: &str = "/projects/new";

    pub fn project_detail(id: &str) -> String {
        format!("/projects/{id}")
    }

    pub fn project_members(id: &str) -> String {
        format!("/projects/{id}/members")
    }
}

/// A view reachable from the navigation shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    NewProject,
    ProjectDetail { id: String },
    ProjectMembers { id: String },
}

impl Route {
    /// Matches a location path against the route table. Query strings,
    /// fragments and a trailing slash are ignored. `None` means the shell
    /// should fall back to [`paths::HOME`].
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.trim_start_matches('/').split('/').collect()
        };

        match segments.as_slice() {
            [] => Some(Self::Home),
            ["login"] => Some(Self::Login),
            ["register"] => Some(Self::Register),
            ["dashboard"] => Some(Self::Dashboard),
            ["projects", "new"] => Some(Self::NewProject),
            ["projects", id] if !id.is_empty() => Some(Self::ProjectDetail { id: id.to_string() }),
            ["projects", id, "members"] if !id.is_empty() => {
                Some(Self::ProjectMembers { id: id.to_string() })
            }
            _ => None,
        }
    }

    /// Whether the route requires an authenticated session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Home | Self::Login | Self::Register)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => paths::HOME.to_string(),
            Self::Login => paths::LOGIN.to_string(),
            Self::Register => paths::REGISTER.to_string(),
            Self::Dashboard => paths::DASHBOARD.to_string(),
            Self::NewProject => paths::NEW_PROJECT.to_string(),
            Self::ProjectDetail { id } => paths::project_detail(id),
            Self::ProjectMembers { id } => paths::project_members(id),
        }
    }
}

/// What the shell should do for a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(&'static str),
}

/// Gates a route on the session. Absence of a user is a normal state, so this
/// never fails: protected routes simply redirect to the login view.
pub fn guard(route: Route, session: &Session) -> Navigation {
    if route.is_protected() && !session.is_authenticated() {
        tracing::debug!(path = %route.path(), "redirecting anonymous visitor to login");
        Navigation::Redirect(paths::LOGIN)
    } else {
        Navigation::Render(route)
    }
}

/// Resolves and guards a location path in one step.
pub fn navigate(path: &str, session: &Session) -> Navigation {
    match Route::resolve(path) {
        Some(route) => guard(route, session),
        None => Navigation::Redirect(paths::HOME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, User};

    fn signed_in() -> Session {
        Session::authenticated(User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: None,
            role: Role::Student,
        })
    }

    #[test]
    fn resolves_route_table() {
        assert_eq!(Route::resolve("/"), Some(Route::Home));
        assert_eq!(Route::resolve(""), Some(Route::Home));
        assert_eq!(Route::resolve("/login"), Some(Route::Login));
        assert_eq!(Route::resolve("/register/"), Some(Route::Register));
        assert_eq!(Route::resolve("/dashboard?tab=mine"), Some(Route::Dashboard));
        assert_eq!(Route::resolve("/projects/new"), Some(Route::NewProject));
        assert_eq!(
            Route::resolve("/projects/p1"),
            Some(Route::ProjectDetail {
                id: "p1".to_string()
            })
        );
        assert_eq!(
            Route::resolve("/projects/p1/members#add"),
            Some(Route::ProjectMembers {
                id: "p1".to_string()
            })
        );
    }

    #[test]
    fn unmatched_paths_do_not_resolve() {
        for path in ["/projects", "/projects//members", "/settings", "/projects/p1/edit"] {
            assert_eq!(Route::resolve(path), None, "{path}");
        }
    }

    #[test]
    fn new_project_wins_over_detail_param() {
        assert_eq!(Route::resolve("/projects/new"), Some(Route::NewProject));
    }

    #[test]
    fn paths_round_trip_through_resolve() {
        let route = Route::ProjectMembers {
            id: "p9".to_string(),
        };
        assert_eq!(Route::resolve(&route.path()), Some(route));
    }

    #[test]
    fn anonymous_visitors_are_sent_to_login() {
        let session = Session::anonymous();
        assert_eq!(navigate("/dashboard", &session), Navigation::Redirect(paths::LOGIN));
        assert_eq!(navigate("/projects/p1", &session), Navigation::Redirect(paths::LOGIN));
        assert_eq!(navigate("/login", &session), Navigation::Render(Route::Login));
    }

    #[test]
    fn signed_in_users_reach_guarded_views() {
        let session = signed_in();
        assert_eq!(
            navigate("/projects/new", &session),
            Navigation::Render(Route::NewProject)
        );
    }

    #[test]
    fn unknown_paths_redirect_home_regardless_of_session() {
        assert_eq!(
            navigate("/nowhere", &Session::anonymous()),
            Navigation::Redirect(paths::HOME)
        );
        assert_eq!(navigate("/nowhere", &signed_in()), Navigation::Redirect(paths::HOME));
    }
}
