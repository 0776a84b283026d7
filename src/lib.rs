//! spm-helper - Swift Package Manager dependency helper library
//!
//! This library provides:
//! - Version constraint rendering for `Package.swift` dependency lines
//! - Input sanitization and commit hash validation
//! - A GitHub client for repository search and tag listing

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod github;
pub mod output;
pub mod progress;
pub mod sanitize;
pub mod workflow;
