//! GitHub repository and tag shapes returned by the API

use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository found by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Identifying name in `owner/name` form
    pub full_name: String,
    /// Clone-able source location
    #[serde(rename = "clone_url")]
    pub url: String,
    /// Popularity score
    #[serde(rename = "stargazers_count")]
    pub stars: f64,
}

/// A tag (release) of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseTag {
    pub name: String,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub commit: ReleaseCommit,
}

/// The commit a tag points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseCommit {
    pub sha: String,
    pub url: String,
}

impl RepositorySummary {
    /// Creates a new RepositorySummary
    pub fn new(full_name: impl Into<String>, url: impl Into<String>, stars: f64) -> Self {
        Self {
            full_name: full_name.into(),
            url: url.into(),
            stars,
        }
    }

    /// Splits `full_name` into owner and name.
    /// Returns None unless there is exactly one `/` with text on both sides.
    fn split_full_name(&self) -> Option<(&str, &str)> {
        let (owner, name) = self.full_name.split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some((owner, name))
    }

    /// Repository name without the owner
    pub fn name(&self) -> Option<&str> {
        self.split_full_name().map(|(_, name)| name)
    }

    /// Owning user or organization
    pub fn owner(&self) -> Option<&str> {
        self.split_full_name().map(|(owner, _)| owner)
    }
}

impl fmt::Display for RepositorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

impl ReleaseTag {
    /// Commit hash for this tag, preferring the top-level `sha` when present
    pub fn commit_sha(&self) -> &str {
        self.sha.as_deref().unwrap_or(&self.commit.sha)
    }

    /// Parse the tag name as a semantic version, tolerating a `v` prefix
    pub fn semver(&self) -> Option<semver::Version> {
        let name = self.name.trim();
        let name = name.strip_prefix('v').unwrap_or(name);
        semver::Version::parse(name).ok()
    }
}

/// Picks the highest semantic-version tag, skipping pre-releases and names
/// that are not versions
pub fn latest_tag(tags: &[ReleaseTag]) -> Option<&ReleaseTag> {
    tags.iter()
        .filter_map(|tag| tag.semver().map(|v| (v, tag)))
        .filter(|(v, _)| v.pre.is_empty())
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, tag)| tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> ReleaseTag {
        ReleaseTag {
            name: name.to_string(),
            sha: None,
            url: None,
            commit: ReleaseCommit {
                sha: "0123456789abcdef0123456789abcdef01234567".to_string(),
                url: "https://api.github.com/repos/a/b/commits/0123456".to_string(),
            },
        }
    }

    #[test]
    fn test_name_and_owner() {
        let repo = RepositorySummary::new(
            "Alamofire/Alamofire",
            "https://github.com/Alamofire/Alamofire.git",
            39000.0,
        );
        assert_eq!(repo.owner(), Some("Alamofire"));
        assert_eq!(repo.name(), Some("Alamofire"));
    }

    #[test]
    fn test_name_and_owner_without_separator() {
        let repo = RepositorySummary::new("justaname", "https://example.com/x.git", 0.0);
        assert_eq!(repo.owner(), None);
        assert_eq!(repo.name(), None);
    }

    #[test]
    fn test_name_and_owner_with_extra_separator() {
        let repo = RepositorySummary::new("a/b/c", "https://example.com/x.git", 0.0);
        assert_eq!(repo.owner(), None);
        assert_eq!(repo.name(), None);
    }

    #[test]
    fn test_name_and_owner_with_empty_part() {
        let repo = RepositorySummary::new("/b", "https://example.com/x.git", 0.0);
        assert_eq!(repo.owner(), None);
        let repo = RepositorySummary::new("a/", "https://example.com/x.git", 0.0);
        assert_eq!(repo.name(), None);
    }

    #[test]
    fn test_deserialize_repository() {
        let json = r#"{
            "full_name": "vapor/vapor",
            "clone_url": "https://github.com/vapor/vapor.git",
            "stargazers_count": 24000,
            "language": "Swift"
        }"#;
        let repo: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.full_name, "vapor/vapor");
        assert_eq!(repo.url, "https://github.com/vapor/vapor.git");
        assert_eq!(repo.stars, 24000.0);
    }

    #[test]
    fn test_deserialize_tag() {
        let json = r#"{
            "name": "5.8.0",
            "zipball_url": "https://api.github.com/repos/a/b/zipball/refs/tags/5.8.0",
            "commit": {
                "sha": "f455c2975872ccd2d9c81594c658af65716e9b9a",
                "url": "https://api.github.com/repos/a/b/commits/f455c29"
            }
        }"#;
        let tag: ReleaseTag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.name, "5.8.0");
        assert!(tag.sha.is_none());
        assert!(tag.url.is_none());
        assert_eq!(tag.commit_sha(), "f455c2975872ccd2d9c81594c658af65716e9b9a");
    }

    #[test]
    fn test_commit_sha_prefers_top_level() {
        let mut t = tag("1.0.0");
        t.sha = Some("abcdef1".to_string());
        assert_eq!(t.commit_sha(), "abcdef1");
    }

    #[test]
    fn test_tag_semver() {
        assert_eq!(tag("1.2.3").semver(), Some(semver::Version::new(1, 2, 3)));
        assert_eq!(tag("v2.0.0").semver(), Some(semver::Version::new(2, 0, 0)));
        assert_eq!(tag("release-1").semver(), None);
    }

    #[test]
    fn test_latest_tag() {
        let tags = vec![tag("1.9.0"), tag("v1.10.0"), tag("nightly"), tag("2.0.0-beta.1")];
        assert_eq!(latest_tag(&tags).map(|t| t.name.as_str()), Some("v1.10.0"));
    }

    #[test]
    fn test_latest_tag_none() {
        assert!(latest_tag(&[]).is_none());
        assert!(latest_tag(&[tag("main"), tag("latest")]).is_none());
    }

    #[test]
    fn test_display() {
        let repo = RepositorySummary::new("a/b", "https://github.com/a/b.git", 1.0);
        assert_eq!(format!("{}", repo), "a/b");
    }
}
