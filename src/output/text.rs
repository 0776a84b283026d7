//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Search result table with star counts
//! - Tag listing with short commit hashes
//! - The generated manifest line, optionally with its inputs

use crate::domain::{ReleaseTag, RepositorySummary};
use crate::output::{OutputFormatter, Verbosity};
use crate::workflow::GeneratedEntry;
use colored::Colorize;
use std::io::Write;

/// Length of abbreviated commit hashes
const SHORT_SHA_LEN: usize = 7;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Format a star count the way GitHub shows it (e.g. `1.2k`)
    pub fn format_stars(stars: f64) -> String {
        if stars >= 1000.0 {
            format!("{:.1}k", stars / 1000.0)
        } else {
            format!("{}", stars.round() as u64)
        }
    }

    fn short_sha(sha: &str) -> &str {
        sha.get(..SHORT_SHA_LEN).unwrap_or(sha)
    }

    fn paint_name(&self, name: &str) -> String {
        if self.color {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }

    fn paint_dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_repositories(
        &self,
        repositories: &[RepositorySummary],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if repositories.is_empty() {
            if self.verbosity != Verbosity::Quiet {
                writeln!(writer, "No repositories found.")?;
            }
            return Ok(());
        }

        if self.verbosity == Verbosity::Quiet {
            for repo in repositories {
                writeln!(writer, "{}", repo.full_name)?;
            }
            return Ok(());
        }

        let width = repositories
            .iter()
            .map(|r| r.full_name.len())
            .max()
            .unwrap_or(0);

        for repo in repositories {
            let stars = format!("★ {:>6}", Self::format_stars(repo.stars));
            let padded = format!("{:<width$}", repo.full_name, width = width);
            writeln!(
                writer,
                "{}  {}  {}",
                self.paint_name(&padded),
                if self.color {
                    stars.yellow().to_string()
                } else {
                    stars
                },
                self.paint_dim(&repo.url)
            )?;
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(writer)?;
            writeln!(writer, "{} repositories", repositories.len())?;
        }

        Ok(())
    }

    fn format_tags(
        &self,
        repository: &str,
        tags: &[ReleaseTag],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if tags.is_empty() {
            if self.verbosity != Verbosity::Quiet {
                writeln!(writer, "{} has no tags.", repository)?;
            }
            return Ok(());
        }

        if self.verbosity != Verbosity::Quiet {
            writeln!(writer, "Tags for {}:", self.paint_name(repository))?;
        }

        for tag in tags {
            match self.verbosity {
                Verbosity::Quiet => writeln!(writer, "{}", tag.name)?,
                Verbosity::Normal => writeln!(
                    writer,
                    "  {}  {}",
                    tag.name,
                    self.paint_dim(Self::short_sha(tag.commit_sha()))
                )?,
                Verbosity::Verbose => writeln!(
                    writer,
                    "  {}  {}  {}",
                    tag.name,
                    self.paint_dim(tag.commit_sha()),
                    self.paint_dim(&tag.commit.url)
                )?,
            }
        }

        Ok(())
    }

    fn format_entry(&self, entry: &GeneratedEntry, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Verbose {
            if let Some(ref repo) = entry.repository {
                writeln!(
                    writer,
                    "{} {} ({} stars)",
                    self.paint_dim("repository:"),
                    repo.full_name,
                    Self::format_stars(repo.stars)
                )?;
            }
            writeln!(
                writer,
                "{} {}",
                self.paint_dim("constraint:"),
                entry.constraint.kind()
            )?;
        }

        if self.verbosity != Verbosity::Quiet {
            if let Some(ref tag) = entry.suggested_tag {
                writeln!(
                    writer,
                    "{}",
                    self.paint_dim(&format!("using latest tag {}", tag))
                )?;
            }
        }

        // The manifest line itself is never colored so it pastes cleanly
        writeln!(writer, "{}", entry.entry)
    }
}
