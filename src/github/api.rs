//! GitHub REST API adapter
//!
//! API endpoints:
//! - Search: {api}/search/repositories?q={query}+language:{language}&sort=stars&order=desc
//! - Tags: {api}/repos/{owner}/{repo}/tags

use crate::config::Config;
use crate::domain::{ReleaseTag, RepositorySummary};
use crate::error::GithubError;
use crate::github::{HttpClient, RepositoryHost};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, info};

/// GitHub adapter
pub struct GithubClient {
    client: HttpClient,
    api_root: String,
    language: String,
}

/// Search response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Matching repositories, already sorted by the server
    items: Vec<RepositorySummary>,
}

impl GithubClient {
    /// Create a new GitHub adapter
    pub fn new(client: HttpClient, config: &Config) -> Self {
        Self {
            client,
            api_root: config.api_root().to_string(),
            language: config.language.clone(),
        }
    }

    /// Create an adapter with its own HTTP client
    pub fn from_config(config: &Config) -> Result<Self, GithubError> {
        Ok(Self::new(HttpClient::from_config(config)?, config))
    }

    /// Build the search URL for a query
    fn build_search_url(&self, query: &str) -> Result<Url, GithubError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GithubError::BadQuery);
        }

        let base = format!("{}/search/repositories", self.api_root);
        let q = format!("{} language:{}", query, self.language);
        Url::parse_with_params(&base, &[("q", q.as_str()), ("sort", "stars"), ("order", "desc")])
            .map_err(|_| GithubError::BadQuery)
    }

    /// Build the tags URL for a repository
    fn build_tags_url(&self, repository: &RepositorySummary) -> Result<Url, GithubError> {
        let (Some(owner), Some(name)) = (repository.owner(), repository.name()) else {
            return Err(GithubError::BadRepository);
        };

        let mut url = Url::parse(&self.api_root).map_err(|_| GithubError::BadRepository)?;
        url.path_segments_mut()
            .map_err(|_| GithubError::BadRepository)?
            .pop_if_empty()
            .extend(["repos", owner, name, "tags"]);
        Ok(url)
    }
}

/// Decode a search response body
pub fn parse_search_response(body: &str) -> Result<Vec<RepositorySummary>, GithubError> {
    if body.trim().is_empty() {
        return Err(GithubError::NoData);
    }
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|_| GithubError::MalformedData)?;
    Ok(response.items)
}

/// Decode a tags response body
pub fn parse_tags_response(body: &str) -> Result<Vec<ReleaseTag>, GithubError> {
    if body.trim().is_empty() {
        return Err(GithubError::NoData);
    }
    serde_json::from_str(body).map_err(|_| GithubError::MalformedData)
}

#[async_trait]
impl RepositoryHost for GithubClient {
    fn host_name(&self) -> &'static str {
        "GitHub"
    }

    async fn search(&self, query: &str) -> Result<Vec<RepositorySummary>, GithubError> {
        let url = self.build_search_url(query)?;
        let body = self.client.get_text(url).await?;
        let repositories = parse_search_response(&body)?;
        info!(query, count = repositories.len(), "search finished");
        Ok(repositories)
    }

    async fn tags(&self, repository: &RepositorySummary) -> Result<Vec<ReleaseTag>, GithubError> {
        let url = self.build_tags_url(repository)?;
        let body = self.client.get_text(url).await?;
        let tags = parse_tags_response(&body)?;
        debug!(repository = %repository, count = tags.len(), "tags fetched");
        Ok(tags)
    }
}
