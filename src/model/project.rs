use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::session::User;
use crate::error::ValidationError;

/// Tracks offered by the new-project form.
pub const TRACKS: &[&str] = &[
    "Web Development",
    "Data Science",
    "Mobile Development",
    "UX Design",
    "Cybersecurity",
];

/// A person referenced by a project's ownership or membership set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
}

impl Member {
    /// Builds a member from form input, rejecting blank fields.
    pub fn new(id: &str, name: &str) -> Result<Self, ValidationError> {
        let id = id.trim();
        let name = name.trim();
        if id.is_empty() {
            return Err(ValidationError::MissingMemberId);
        }
        if name.is_empty() {
            return Err(ValidationError::MissingMemberName);
        }
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
        })
    }
}

impl From<&User> for Member {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
        }
    }
}

/// A team's submission.
///
/// `owners` carry elevated permissions over the project (manage members,
/// delete); `members` are the rest of the team. The two sets together make the
/// headcount shown on cards and the detail page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub cohort: String,
    #[serde(default)]
    pub github_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub owners: Vec<Member>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Project {
    /// Owners plus members.
    pub fn member_count(&self) -> usize {
        self.owners.len() + self.members.len()
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owners.iter().any(|owner| owner.id == user_id)
    }

    /// Whether the person already appears among owners or members.
    pub fn includes(&self, person_id: &str) -> bool {
        self.is_owned_by(person_id) || self.members.iter().any(|member| member.id == person_id)
    }
}

/// Input for creating a project from the new-project form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub track: String,
    pub cohort: String,
    pub github_url: String,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.track.trim().is_empty() {
            return Err(ValidationError::MissingTrack);
        }
        if self.cohort.trim().is_empty() {
            return Err(ValidationError::MissingCohort);
        }
        validate_github_url(self.github_url.trim())
    }

    /// Builds the project record with `owner` as its only owner.
    pub fn into_project(self, owner: Member) -> Result<Project, ValidationError> {
        self.into_project_with(owner, Uuid::new_v4().to_string(), Utc::now())
    }

    pub(crate) fn into_project_with(
        self,
        owner: Member,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Result<Project, ValidationError> {
        self.validate()?;
        Ok(Project {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            track: self.track.trim().to_string(),
            cohort: self.cohort.trim().to_string(),
            github_url: self.github_url.trim().to_string(),
            created_at,
            owners: vec![owner],
            members: Vec::new(),
        })
    }
}

fn validate_github_url(raw: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidGithubUrl(raw.to_string());
    let url = Url::parse(raw).map_err(|_| invalid())?;
    if url.scheme() != "https" || url.host_str() != Some("github.com") {
        return Err(invalid());
    }
    let has_repo_path = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).count() >= 2)
        .unwrap_or(false);
    if has_repo_path {
        Ok(())
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewProject {
        NewProject {
            name: " Study Buddy ".to_string(),
            description: "Pairs learners for review sessions".to_string(),
            track: "Web Development".to_string(),
            cohort: "2026-A".to_string(),
            github_url: "https://github.com/cohort/study-buddy".to_string(),
        }
    }

    fn owner() -> Member {
        Member {
            id: "u1".to_string(),
            name: "Ada".to_string(),
        }
    }

    #[test]
    fn deserializes_camel_case_api_payload() {
        let json = r#"{
            "id": "p1",
            "name": "Study Buddy",
            "description": "Pairs learners",
            "track": "Web Development",
            "cohort": "2026-A",
            "githubUrl": "https://github.com/cohort/study-buddy",
            "createdAt": "2026-10-18T09:30:00Z",
            "owners": [{"id": "u1", "name": "Ada"}]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.github_url, "https://github.com/cohort/study-buddy");
        assert!(project.members.is_empty());
        assert_eq!(project.member_count(), 1);
    }

    #[test]
    fn member_count_includes_owners_and_members() {
        let mut project = input().into_project(owner()).unwrap();
        assert_eq!(project.member_count(), 1);

        project.members.push(Member {
            id: "u2".to_string(),
            name: "Grace".to_string(),
        });
        assert_eq!(project.member_count(), 2);
    }

    #[test]
    fn into_project_trims_and_sets_owner() {
        let project = input().into_project(owner()).unwrap();
        assert_eq!(project.name, "Study Buddy");
        assert_eq!(project.owners, vec![owner()]);
        assert!(project.is_owned_by("u1"));
        assert!(!project.is_owned_by("u2"));
        assert!(Uuid::parse_str(&project.id).is_ok());
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut missing_name = input();
        missing_name.name = "  ".to_string();
        assert_eq!(missing_name.validate(), Err(ValidationError::MissingName));

        let mut missing_cohort = input();
        missing_cohort.cohort.clear();
        assert_eq!(missing_cohort.validate(), Err(ValidationError::MissingCohort));
    }

    #[test]
    fn github_url_must_point_at_a_repository() {
        for bad in [
            "github.com/cohort/study-buddy",
            "http://github.com/cohort/study-buddy",
            "https://gitlab.com/cohort/study-buddy",
            "https://github.com/cohort",
        ] {
            let mut project = input();
            project.github_url = bad.to_string();
            assert_eq!(
                project.validate(),
                Err(ValidationError::InvalidGithubUrl(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn member_new_rejects_blank_fields() {
        assert_eq!(Member::new(" ", "Ada"), Err(ValidationError::MissingMemberId));
        assert_eq!(Member::new("u1", ""), Err(ValidationError::MissingMemberName));
        assert_eq!(Member::new(" u1 ", " Ada ").unwrap(), owner());
    }
}
