//! Dashboard search over the project collection.

use crate::model::Project;

/// Free-text query plus an optional exact track.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub query: String,
    pub track: Option<String>,
}

impl ProjectFilter {
    pub fn new(query: &str, track: Option<&str>) -> Self {
        Self {
            query: query.trim().to_string(),
            track: track
                .map(str::trim)
                .filter(|track| !track.is_empty())
                .map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.track.is_none()
    }

    /// Case-insensitive match on name or description, and exact track match.
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(track) = &self.track {
            if project.track != *track {
                return false;
            }
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        project.name.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle)
    }

    /// Matching projects in collection order.
    pub fn apply<'a, I>(&self, projects: I) -> Vec<&'a Project>
    where
        I: IntoIterator<Item = &'a Project>,
    {
        projects
            .into_iter()
            .filter(|project| self.matches(project))
            .collect()
    }
}
