use cohort_projects::model::{Role, Session, User};
use cohort_projects::navigation::{Navigation, Route, guard, navigate, paths};
use proptest::prelude::*;

fn signed_in() -> Session {
    Session::authenticated(User {
        id: "u1".to_string(),
        name: "Ada".to_string(),
        email: Some("ada@school.edu".to_string()),
        role: Role::Student,
    })
}

fn protected_paths() -> Vec<String> {
    vec![
        paths::DASHBOARD.to_string(),
        paths::NEW_PROJECT.to_string(),
        paths::project_detail("p1"),
        paths::project_members("p1"),
    ]
}

#[test]
fn anonymous_visitors_are_sent_to_login_from_every_protected_path() {
    for path in protected_paths() {
        assert_eq!(
            navigate(&path, &Session::anonymous()),
            Navigation::Redirect(paths::LOGIN),
            "{path}"
        );
    }
}

#[test]
fn signed_in_users_reach_every_protected_path() {
    let session = signed_in();
    for path in protected_paths() {
        match navigate(&path, &session) {
            Navigation::Render(route) => assert_eq!(route.path(), path),
            other => panic!("{path} resolved to {other:?}"),
        }
    }
}

#[test]
fn public_paths_render_without_a_session() {
    for path in [paths::HOME, paths::LOGIN, paths::REGISTER] {
        assert!(matches!(
            navigate(path, &Session::anonymous()),
            Navigation::Render(_)
        ));
    }
}

#[test]
fn new_project_wins_over_project_detail() {
    assert_eq!(Route::resolve("/projects/new"), Some(Route::NewProject));
}

#[test]
fn unknown_paths_redirect_home() {
    for path in ["/nope", "/projects", "/projects/p1/edit", "/dashboard/extra"] {
        assert_eq!(
            navigate(path, &signed_in()),
            Navigation::Redirect(paths::HOME),
            "{path}"
        );
    }
}

proptest! {
    #[test]
    fn protected_project_routes_always_redirect_when_anonymous(id in "[A-Za-z0-9_-]{1,24}") {
        prop_assume!(id != "new");
        let route = Route::ProjectDetail { id: id.clone() };
        prop_assert_eq!(guard(route, &Session::anonymous()), Navigation::Redirect(paths::LOGIN));
        let route = Route::ProjectMembers { id };
        prop_assert_eq!(guard(route, &Session::anonymous()), Navigation::Redirect(paths::LOGIN));
    }

    #[test]
    fn project_paths_resolve_back_to_their_id(id in "[A-Za-z0-9_-]{1,24}") {
        prop_assume!(id != "new");
        prop_assert_eq!(
            Route::resolve(&paths::project_detail(&id)),
            Some(Route::ProjectDetail { id: id.clone() })
        );
        prop_assert_eq!(
            Route::resolve(&paths::project_members(&id)),
            Some(Route::ProjectMembers { id })
        );
    }

    #[test]
    fn navigation_never_panics(path in "\\PC*") {
        let _ = navigate(&path, &Session::anonymous());
        let _ = navigate(&path, &signed_in());
    }
}
