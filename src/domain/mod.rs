//! Core domain models for spm-helper
//!
//! This module contains the fundamental types used throughout the application:
//! - Version constraint types and the selection tag used to build them
//! - Repository and tag shapes returned by GitHub

mod constraint;
mod repository;

pub use constraint::{ConstraintFields, ConstraintKind, VersionConstraint};
pub use repository::{latest_tag, ReleaseCommit, ReleaseTag, RepositorySummary};
