//! CLI argument parsing module for spm-helper

use crate::domain::{ConstraintFields, ConstraintKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Find Swift packages on GitHub and generate `Package.swift` dependency lines
#[derive(Parser, Debug, Clone)]
#[command(name = "spm-helper", version, about = "Swift Package Manager dependency helper")]
pub struct CliArgs {
    /// Enable verbose output and debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable quiet mode - print only the essential value
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the GitHub API root URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the language qualifier used for searches
    #[arg(long, global = true, value_name = "LANG")]
    pub language: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search GitHub repositories, most starred first
    Search {
        /// Search terms
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Show at most this many results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the tags of a repository
    Tags {
        /// Repository in owner/name form
        repository: String,
    },

    /// Generate a dependency line for a repository URL
    Generate {
        /// Clone URL of the package repository
        url: String,

        #[command(flatten)]
        constraint: ConstraintArgs,
    },

    /// Look up a repository by owner/name and generate its dependency line
    Add {
        /// Repository in owner/name form
        repository: String,

        #[command(flatten)]
        constraint: ConstraintArgs,
    },
}

/// Constraint selection and its raw field values
#[derive(Args, Debug, Clone)]
pub struct ConstraintArgs {
    /// Version constraint strategy
    #[arg(short, long, value_enum, default_value_t = ConstraintKind::UpToNextMajor)]
    pub kind: ConstraintKind,

    /// Version for from, up-to-next-major, up-to-next-minor and exact
    #[arg(long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Lower bound for open-range and closed-range
    #[arg(long, value_name = "VERSION")]
    pub lower: Option<String>,

    /// Upper bound for open-range and closed-range
    #[arg(long, value_name = "VERSION")]
    pub upper: Option<String>,

    /// Branch name for branch
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Commit hash for revision
    #[arg(long, value_name = "HASH")]
    pub revision: Option<String>,
}

impl ConstraintArgs {
    /// Raw field values in the form the constraint model expects
    pub fn fields(&self) -> ConstraintFields {
        ConstraintFields {
            version: self.version.clone(),
            lower: self.lower.clone(),
            upper: self.upper.clone(),
            branch: self.branch.clone(),
            revision: self.revision.clone(),
        }
    }
}

impl CliArgs {
    /// Whether a spinner may be drawn on stderr
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }

    /// Default tracing filter directive for this invocation
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "spm_helper=debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
