//! Shared UI components exported for routes and features.

pub(crate) mod layout;
mod project_card;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
pub(crate) use project_card::ProjectCard;
pub(crate) use ui::{Alert, AlertKind, Button, ButtonVariant, Spinner};
