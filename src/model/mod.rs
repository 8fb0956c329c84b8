//! Data model for the projects frontend.
//!
//! - [`Session`]: the signed-in [`User`], if any. Authentication is derived from
//!   the presence of a user so the flag and the identity can never disagree.
//! - [`Project`]: a cohort team's submission with an ownership set and a
//!   membership set of [`Member`] references.
//! - [`NewProject`], [`LoginRequest`], [`RegisterRequest`]: form inputs with
//!   their client-side validation.

mod project;
mod session;

pub use project::*;
pub use session::*;
