use chrono::{TimeZone, Utc};
use cohort_projects::model::{Member, Project, Role, Session, User};
use cohort_projects::navigation::paths;
use cohort_projects::permissions::ProjectPermissions;
use cohort_projects::store::{AppState, Intent};
use proptest::prelude::*;

fn person(index: usize) -> Member {
    Member {
        id: format!("u{index}"),
        name: format!("Person {index}"),
    }
}

fn project(index: usize, owners: usize, members: usize) -> Project {
    Project {
        id: format!("p{index}"),
        name: format!("Project {index}"),
        description: String::new(),
        track: "Web Development".to_string(),
        cohort: "2026-A".to_string(),
        github_url: format!("https://github.com/cohort/p{index}"),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        owners: (0..owners).map(person).collect(),
        members: (owners..owners + members).map(|i| person(i + 100)).collect(),
    }
}

fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: id.to_string(),
        email: None,
        role,
    }
}

#[test]
fn deleting_the_only_project_empties_the_collection() {
    let mut owned = project(1, 0, 0);
    owned.owners = vec![Member {
        id: "u1".to_string(),
        name: "Ada".to_string(),
    }];
    let mut state = AppState::new(
        Session::authenticated(user("u1", Role::Student)),
        vec![owned],
    );

    let transition = state.apply(Intent::DeleteProject("p1".to_string())).unwrap();

    assert!(state.projects().is_empty());
    assert_eq!(transition.navigate_to.as_deref(), Some(paths::DASHBOARD));
}

#[test]
fn only_owners_and_admins_can_delete() {
    let projects = vec![project(1, 1, 1)];
    for (session, allowed) in [
        (Session::anonymous(), false),
        (Session::authenticated(user("u101", Role::Student)), false),
        (Session::authenticated(user("u0", Role::Student)), true),
        (Session::authenticated(user("staff", Role::Admin)), true),
    ] {
        let mut state = AppState::new(session, projects.clone());
        let outcome = state.apply(Intent::DeleteProject("p1".to_string()));
        assert_eq!(outcome.is_ok(), allowed);
        assert_eq!(state.projects().is_empty(), allowed);
    }
}

#[test]
fn project_without_members_counts_its_owners() {
    assert_eq!(project(1, 2, 0).member_count(), 2);
    assert_eq!(project(1, 0, 0).member_count(), 0);
}

proptest! {
    #[test]
    fn delete_removes_exactly_the_target(count in 1usize..20, target in 0usize..20) {
        let target = target % count;
        let projects: Vec<Project> = (0..count).map(|i| project(i, 1, 0)).collect();
        let mut state = AppState::new(Session::authenticated(user("u0", Role::Student)), projects.clone());

        let transition = state.apply(Intent::DeleteProject(format!("p{target}"))).unwrap();

        let expected: Vec<&str> = projects
            .iter()
            .filter(|p| p.id != format!("p{target}"))
            .map(|p| p.id.as_str())
            .collect();
        let remaining: Vec<&str> = state.projects().iter().map(|p| p.id.as_str()).collect();
        prop_assert_eq!(remaining, expected);
        prop_assert_eq!(transition.navigate_to.as_deref(), Some(paths::DASHBOARD));
    }

    #[test]
    fn can_modify_iff_owner_or_admin(
        owners in 0usize..5,
        members in 0usize..5,
        user_index in 0usize..10,
        admin in any::<bool>(),
    ) {
        let project = project(1, owners, members);
        let role = if admin { Role::Admin } else { Role::Student };
        let visitor = user(&format!("u{user_index}"), role);

        let permissions = ProjectPermissions::resolve(Some(&visitor), &project);

        let is_owner = project.owners.iter().any(|owner| owner.id == visitor.id);
        prop_assert_eq!(permissions.can_modify(), is_owner || admin);
        prop_assert_eq!(permissions.can_delete(), is_owner || admin);
        prop_assert_eq!(permissions.can_manage_members(), is_owner);
    }

    #[test]
    fn member_count_is_owners_plus_members(owners in 0usize..10, members in 0usize..10) {
        prop_assert_eq!(project(1, owners, members).member_count(), owners + members);
    }

    #[test]
    fn lookup_finds_exactly_the_known_ids(
        count in 0usize..10,
        id in "p[0-9]{1,3}[a-z]?|P[0-9]|[a-z0-9]{1,6}",
    ) {
        let projects: Vec<Project> = (0..count).map(|i| project(i, 1, 0)).collect();
        let ids: Vec<String> = projects.iter().map(|p| p.id.clone()).collect();
        let state = AppState::new(Session::anonymous(), projects);

        for known in &ids {
            prop_assert_eq!(state.project(known).map(|p| p.id.as_str()), Some(known.as_str()));
        }
        prop_assume!(!ids.contains(&id));
        prop_assert!(state.project(&id).is_none());
    }
}
