//! Core state and access-control logic for the cohort projects frontend.
//!
//! Everything in this crate is plain Rust with no browser dependency so the
//! route guard, permission checks and store transitions can be exercised by
//! native tests. The Leptos views in the binary read and dispatch through
//! these types only.

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod model;
pub mod navigation;
pub mod permissions;
pub mod store;

pub use error::{AppError, StoreError, ValidationError};
