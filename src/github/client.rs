//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - GitHub API `Accept` header
//! - Status code and transport error mapping onto GithubError

use crate::config::Config;
use crate::error::GithubError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// Media type recommended by the GitHub REST API
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client from resolved settings
    pub fn from_config(config: &Config) -> Result<Self, GithubError> {
        Self::with_config(config.timeout(), &config.user_agent)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| GithubError::other(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Perform a GET request and return the body as text
    ///
    /// Anything but `200 OK` is reported as `BadResponseStatus`.
    pub async fn get_text(&self, url: Url) -> Result<String, GithubError> {
        debug!(%url, "sending request");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "request failed");
            if e.is_timeout() {
                GithubError::other(format!("request to {} timed out", url))
            } else {
                GithubError::other(e.to_string())
            }
        })?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "received response");

        if status != StatusCode::OK {
            warn!(%url, status = status.as_u16(), "unexpected status");
            return Err(GithubError::BadResponseStatus(status.as_u16()));
        }

        response.text().await.map_err(|e| GithubError::other(e.to_string()))
    }
}
