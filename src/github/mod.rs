//! Code-hosting collaborators
//!
//! This module provides:
//! - HTTP client shared foundation
//! - GitHub REST API adapter (repository search and tag listing)

mod api;
mod client;

pub use api::{parse_search_response, parse_tags_response, GithubClient};
pub use client::HttpClient;

use crate::domain::{ReleaseTag, RepositorySummary};
use crate::error::GithubError;
use async_trait::async_trait;

/// Trait for code-hosting services that can be searched for packages
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Get the service name
    fn host_name(&self) -> &'static str;

    /// Search repositories matching a free-text query, most popular first
    async fn search(&self, query: &str) -> Result<Vec<RepositorySummary>, GithubError>;

    /// List the tags of a repository
    async fn tags(&self, repository: &RepositorySummary) -> Result<Vec<ReleaseTag>, GithubError>;
}
