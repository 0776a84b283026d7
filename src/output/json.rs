//! JSON output formatter for machine processing

use crate::domain::{ReleaseTag, RepositorySummary};
use crate::output::{OutputFormatter, Verbosity};
use crate::workflow::GeneratedEntry;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of a search result
#[derive(Serialize)]
struct JsonRepository<'a> {
    full_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    url: &'a str,
    stars: f64,
}

/// JSON representation of a tag
#[derive(Serialize)]
struct JsonTag<'a> {
    name: &'a str,
    sha: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

/// JSON representation of a tag listing
#[derive(Serialize)]
struct JsonTags<'a> {
    repository: &'a str,
    tags: Vec<JsonTag<'a>>,
}

impl JsonFormatter {
    fn write_json<T: Serialize>(&self, value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = if self.verbosity == Verbosity::Quiet {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        writeln!(writer, "{}", json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_repositories(
        &self,
        repositories: &[RepositorySummary],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let items: Vec<JsonRepository> = repositories
            .iter()
            .map(|repo| JsonRepository {
                full_name: &repo.full_name,
                owner: repo.owner(),
                name: repo.name(),
                url: &repo.url,
                stars: repo.stars,
            })
            .collect();
        self.write_json(&items, writer)
    }

    fn format_tags(
        &self,
        repository: &str,
        tags: &[ReleaseTag],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let verbose = self.verbosity == Verbosity::Verbose;
        let output = JsonTags {
            repository,
            tags: tags
                .iter()
                .map(|tag| JsonTag {
                    name: &tag.name,
                    sha: tag.commit_sha(),
                    url: verbose.then_some(tag.commit.url.as_str()),
                })
                .collect(),
        };
        self.write_json(&output, writer)
    }

    fn format_entry(&self, entry: &GeneratedEntry, writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_json(entry, writer)
    }
}
