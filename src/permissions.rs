//! Owner/admin permission resolution for project actions.

use crate::model::{Project, User};

/// Actions the current user may take on a project.
///
/// Stateless: resolve it from the current session and project snapshot on
/// every render rather than caching it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectPermissions {
    pub is_owner: bool,
    pub is_admin: bool,
}

impl ProjectPermissions {
    pub fn resolve(user: Option<&User>, project: &Project) -> Self {
        let Some(user) = user else {
            return Self::default();
        };
        Self {
            is_owner: project.is_owned_by(&user.id),
            is_admin: user.is_admin(),
        }
    }

    pub fn can_modify(&self) -> bool {
        self.is_owner || self.is_admin
    }

    /// Adding members is reserved for owners; admins moderate but do not
    /// manage teams.
    pub fn can_manage_members(&self) -> bool {
        self.is_owner
    }

    pub fn can_delete(&self) -> bool {
        self.is_admin || self.is_owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, Role};
    use chrono::Utc;

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            name: id.to_uppercase(),
            email: None,
            role,
        }
    }

    fn project_owned_by(owner: &str) -> Project {
        Project {
            id: "p1".to_string(),
            name: "Study Buddy".to_string(),
            description: String::new(),
            track: "Web Development".to_string(),
            cohort: "2026-A".to_string(),
            github_url: "https://github.com/cohort/study-buddy".to_string(),
            created_at: Utc::now(),
            owners: vec![Member {
                id: owner.to_string(),
                name: owner.to_uppercase(),
            }],
            members: vec![Member {
                id: "u3".to_string(),
                name: "U3".to_string(),
            }],
        }
    }

    #[test]
    fn owner_can_manage_and_delete() {
        let perms = ProjectPermissions::resolve(Some(&user("u1", Role::Student)), &project_owned_by("u1"));
        assert!(perms.is_owner);
        assert!(!perms.is_admin);
        assert!(perms.can_modify());
        assert!(perms.can_manage_members());
        assert!(perms.can_delete());
    }

    #[test]
    fn admin_can_delete_but_not_manage_members() {
        let perms = ProjectPermissions::resolve(Some(&user("u9", Role::Admin)), &project_owned_by("u1"));
        assert!(perms.can_modify());
        assert!(perms.can_delete());
        assert!(!perms.can_manage_members());
    }

    #[test]
    fn plain_member_gets_nothing() {
        let perms = ProjectPermissions::resolve(Some(&user("u3", Role::Student)), &project_owned_by("u1"));
        assert_eq!(perms, ProjectPermissions::default());
        assert!(!perms.can_modify());
    }

    #[test]
    fn anonymous_viewer_gets_nothing() {
        let perms = ProjectPermissions::resolve(None, &project_owned_by("u1"));
        assert!(!perms.can_modify());
        assert!(!perms.can_delete());
    }
}
