//! Application state for the frontend: the session and the project
//! collection behind a single owner.
//!
//! Views never mutate state directly. They dispatch an [`Intent`]; the store
//! applies it synchronously and answers with a [`Transition`] naming where the
//! shell should navigate next, if anywhere.

use std::collections::HashSet;

use crate::error::StoreError;
use crate::model::{Member, NewProject, Project, Session, User};
use crate::navigation::paths;
use crate::permissions::ProjectPermissions;

/// Whether initial data from the API has been applied yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

/// Ordered projects with unique ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectCollection {
    projects: Vec<Project>,
}

impl ProjectCollection {
    /// Builds a collection, keeping the first record for any repeated id.
    pub fn new(projects: Vec<Project>) -> Self {
        let mut seen = HashSet::new();
        let projects = projects
            .into_iter()
            .filter(|project| {
                let fresh = seen.insert(project.id.clone());
                if !fresh {
                    tracing::warn!(project_id = %project.id, "dropping project with duplicate id");
                }
                fresh
            })
            .collect();
        Self { projects }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// First project whose id matches. `None` is a normal outcome.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id == id)
    }

    /// Removes the project with `id`, leaving the order of the rest intact.
    pub fn remove(&mut self, id: &str) -> Option<Project> {
        let index = self.projects.iter().position(|project| project.id == id)?;
        Some(self.projects.remove(index))
    }

    fn push(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Most recently created projects first.
    pub fn recent(&self, limit: usize) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self.projects.iter().collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects.truncate(limit);
        projects
    }

    /// Distinct tracks in collection order.
    pub fn tracks(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .filter(|project| !project.track.is_empty())
            .filter(|project| seen.insert(project.track.as_str()))
            .map(|project| project.track.clone())
            .collect()
    }
}

/// State-mutating requests from views and the hydration task.
#[derive(Clone, Debug)]
pub enum Intent {
    /// Initial data from the API. Leaves `LoadState::Loading`.
    Hydrated {
        user: Option<User>,
        projects: Vec<Project>,
    },
    Login(User),
    Logout,
    /// Replaces the collection after a fetch that followed sign in.
    ProjectsLoaded(Vec<Project>),
    CreateProject(NewProject),
    DeleteProject(String),
    AddMember { project_id: String, member: Member },
}

/// Follow-up for the navigation shell after an intent was applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub navigate_to: Option<String>,
}

impl Transition {
    fn stay() -> Self {
        Self::default()
    }

    fn to(path: impl Into<String>) -> Self {
        Self {
            navigate_to: Some(path.into()),
        }
    }
}

/// Session plus projects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    session: Session,
    projects: ProjectCollection,
    load_state: LoadState,
}

impl AppState {
    pub fn new(session: Session, projects: Vec<Project>) -> Self {
        Self {
            session,
            projects: ProjectCollection::new(projects),
            load_state: LoadState::Ready,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn projects(&self) -> &ProjectCollection {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.find(id)
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Computes the state an intent would produce without touching `self`.
    /// Lets the shell follow the transition before subscribers see the change.
    pub fn applied(&self, intent: Intent) -> Result<(Self, Transition), StoreError> {
        let mut next = self.clone();
        let transition = next.apply(intent)?;
        Ok((next, transition))
    }

    /// Applies an intent. Either the whole change lands or nothing does.
    pub fn apply(&mut self, intent: Intent) -> Result<Transition, StoreError> {
        match intent {
            Intent::Hydrated { user, projects } => {
                warn_ownerless(&projects);
                self.session = user.map(Session::authenticated).unwrap_or_default();
                self.projects = ProjectCollection::new(projects);
                self.load_state = LoadState::Ready;
                tracing::info!(
                    projects = self.projects.len(),
                    authenticated = self.session.is_authenticated(),
                    "store hydrated"
                );
                Ok(Transition::stay())
            }
            Intent::Login(user) => {
                tracing::info!(user_id = %user.id, role = user.role.as_str(), "signed in");
                self.session.sign_in(user);
                Ok(Transition::to(paths::DASHBOARD))
            }
            Intent::Logout => {
                if let Some(user) = self.session.sign_out() {
                    tracing::info!(user_id = %user.id, "signed out");
                }
                Ok(Transition::to(paths::HOME))
            }
            Intent::ProjectsLoaded(projects) => {
                warn_ownerless(&projects);
                self.projects = ProjectCollection::new(projects);
                tracing::debug!(projects = self.projects.len(), "projects replaced");
                Ok(Transition::stay())
            }
            Intent::CreateProject(input) => {
                let owner = self
                    .session
                    .user()
                    .map(Member::from)
                    .ok_or(StoreError::Unauthenticated)?;
                let project = input.into_project(owner)?;
                let id = project.id.clone();
                tracing::info!(project_id = %id, name = %project.name, "project created");
                self.projects.push(project);
                Ok(Transition::to(paths::project_detail(&id)))
            }
            Intent::DeleteProject(id) => {
                let actor = self.session.user().ok_or(StoreError::Unauthenticated)?;
                let Some(project) = self.projects.find(&id) else {
                    tracing::debug!(project_id = %id, "delete ignored, no such project");
                    return Ok(Transition::to(paths::DASHBOARD));
                };
                if !ProjectPermissions::resolve(Some(actor), project).can_delete() {
                    tracing::warn!(project_id = %id, actor_id = %actor.id, "unauthorized delete");
                    return Err(StoreError::Forbidden);
                }
                if self.projects.remove(&id).is_some() {
                    tracing::info!(project_id = %id, "project deleted");
                }
                Ok(Transition::to(paths::DASHBOARD))
            }
            Intent::AddMember { project_id, member } => {
                let actor_id = self
                    .session
                    .user()
                    .map(|user| user.id.clone())
                    .ok_or(StoreError::Unauthenticated)?;
                let project = self
                    .projects
                    .find_mut(&project_id)
                    .ok_or_else(|| StoreError::NotFound(project_id.clone()))?;
                if !project.is_owned_by(&actor_id) {
                    tracing::warn!(%project_id, %actor_id, "non-owner tried to add a member");
                    return Err(StoreError::Forbidden);
                }
                if project.includes(&member.id) {
                    return Err(StoreError::AlreadyMember(member.name));
                }
                tracing::info!(%project_id, member_id = %member.id, "member added");
                project.members.push(member);
                Ok(Transition::to(paths::project_detail(&project_id)))
            }
        }
    }
}

/// Projects created here always have an owner; API data is accepted as is.
fn warn_ownerless(projects: &[Project]) {
    for project in projects.iter().filter(|p| p.owners.is_empty()) {
        tracing::warn!(project_id = %project.id, "project has no owners");
    }
}
