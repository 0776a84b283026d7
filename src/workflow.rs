//! Workflow coordination: search → choose repository → list tags → generate
//!
//! This module provides:
//! - Repository search with client-side truncation
//! - Tag listing for an `owner/name` pair
//! - Manifest entry generation for a URL or for a repository found by name
//! - Latest-tag suggestion when a version-based constraint has no version

use crate::domain::{
    latest_tag, ConstraintFields, ConstraintKind, ReleaseTag, RepositorySummary, VersionConstraint,
};
use crate::error::{AppError, GenerateError, GithubError};
use crate::generator::generate_entry;
use crate::github::RepositoryHost;
use crate::progress::Progress;
use serde::Serialize;
use tracing::{debug, info, warn};

/// A generated manifest line with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedEntry {
    /// Source URL embedded in the entry
    pub url: String,
    /// Constraint used for the entry
    pub constraint: VersionConstraint,
    /// The `.package(...)` line
    pub entry: String,
    /// Repository the URL came from, when it was looked up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositorySummary>,
    /// Tag name filled in automatically, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_tag: Option<String>,
}

/// Build a manifest entry for a known URL
pub fn generate(
    url: &str,
    kind: ConstraintKind,
    fields: &ConstraintFields,
) -> Result<GeneratedEntry, GenerateError> {
    let constraint = VersionConstraint::from_selection(kind, fields);
    let entry = generate_entry(url, &constraint)?;
    debug!(%kind, entry = %entry, "entry generated");

    Ok(GeneratedEntry {
        url: url.to_string(),
        constraint,
        entry,
        repository: None,
        suggested_tag: None,
    })
}

/// Repository summary for an `owner/name` pair without searching
pub fn repository_from_full_name(full_name: &str) -> RepositorySummary {
    let full_name = full_name.trim().trim_matches('/');
    RepositorySummary::new(
        full_name,
        format!("https://github.com/{}.git", full_name),
        0.0,
    )
}

/// Coordinates calls against a repository host
pub struct Helper {
    host: Box<dyn RepositoryHost>,
    progress: Progress,
}

impl Helper {
    /// Create a helper over the given host
    pub fn new(host: Box<dyn RepositoryHost>, show_progress: bool) -> Self {
        Self {
            host,
            progress: Progress::new(show_progress),
        }
    }

    /// Search repositories; `limit` truncates the list locally
    pub async fn search(
        &mut self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<RepositorySummary>, GithubError> {
        self.progress
            .spinner(&format!("Searching {}...", self.host.host_name()));
        let result = self.host.search(query).await;
        self.progress.finish_and_clear();

        let mut repositories = result?;
        if let Some(limit) = limit {
            repositories.truncate(limit);
        }
        Ok(repositories)
    }

    /// List tags for an `owner/name` pair
    pub async fn tags(&mut self, full_name: &str) -> Result<Vec<ReleaseTag>, GithubError> {
        let repository = repository_from_full_name(full_name);
        self.tags_for(&repository).await
    }

    async fn tags_for(
        &mut self,
        repository: &RepositorySummary,
    ) -> Result<Vec<ReleaseTag>, GithubError> {
        self.progress
            .spinner(&format!("Fetching tags for {}...", repository));
        let result = self.host.tags(repository).await;
        self.progress.finish_and_clear();
        result
    }

    /// Find a repository by exact `owner/name` (case-insensitive) via search
    pub async fn find_repository(
        &mut self,
        full_name: &str,
    ) -> Result<RepositorySummary, GithubError> {
        let wanted = repository_from_full_name(full_name);
        let (Some(_), Some(name)) = (wanted.owner(), wanted.name()) else {
            return Err(GithubError::BadRepository);
        };

        let query = format!("{} in:name", name);
        let repositories = self.search(&query, None).await?;
        repositories
            .into_iter()
            .find(|repo| repo.full_name.eq_ignore_ascii_case(&wanted.full_name))
            .ok_or(GithubError::BadRepository)
    }

    /// Look up a repository by name and generate its manifest entry
    ///
    /// For version-based kinds without a version, the latest release tag is
    /// used when one exists.
    pub async fn add(
        &mut self,
        full_name: &str,
        kind: ConstraintKind,
        fields: &ConstraintFields,
    ) -> Result<GeneratedEntry, AppError> {
        let repository = self.find_repository(full_name).await?;
        info!(repository = %repository, url = %repository.url, "repository resolved");

        let mut fields = fields.clone();
        let mut suggested_tag = None;

        if kind.uses_version() && fields.version.is_none() {
            let tags = self.tags_for(&repository).await?;
            match latest_tag(&tags) {
                Some(tag) => {
                    info!(tag = %tag.name, "using latest tag");
                    let version = tag
                        .semver()
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| tag.name.clone());
                    fields.version = Some(version);
                    suggested_tag = Some(tag.name.clone());
                }
                None => warn!(repository = %repository, "no release tags to suggest a version from"),
            }
        }

        let mut generated = generate(&repository.url, kind, &fields)?;
        generated.repository = Some(repository);
        generated.suggested_tag = suggested_tag;
        Ok(generated)
    }
}
