//! Version constraint types for Swift Package Manager dependencies
//!
//! Each variant renders to the argument list that follows `url:` in a
//! `.package(...)` declaration:
//! - `from: "1.0.0"`
//! - `.upToNextMajor(from: "1.0.0")`, `.upToNextMinor(from: "1.0.0")`
//! - `.exact("1.0.0")`
//! - `"1.0.0"..<"2.0.0"`, `"1.0.0"..."2.0.0"`
//! - `.branch("main")`, `.revision("deadbeef")`

use crate::error::GenerateError;
use crate::sanitize::{is_valid_commit_hash, sanitize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rule describing which versions of a dependency are acceptable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum VersionConstraint {
    /// Minimum version, up to the next major (`from: "1.0.0"`)
    From { version: String },
    /// Explicit next-major bound
    UpToNextMajor { version: String },
    /// Next-minor bound
    UpToNextMinor { version: String },
    /// A single pinned version
    Exact { version: String },
    /// Half-open range `lower..<upper`
    OpenRange { lower: String, upper: String },
    /// Closed range `lower...upper`
    ClosedRange { lower: String, upper: String },
    /// Track a git branch
    #[serde(rename = "branch")]
    GitBranch { branch: String },
    /// Pin a git commit
    #[serde(rename = "revision")]
    GitRevision { revision: String },
}

/// The constraint strategy a user selected, without its inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintKind {
    From,
    UpToNextMajor,
    UpToNextMinor,
    Exact,
    OpenRange,
    ClosedRange,
    Branch,
    Revision,
}

/// Raw, untrusted text inputs for building a constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintFields {
    pub version: Option<String>,
    pub lower: Option<String>,
    pub upper: Option<String>,
    pub branch: Option<String>,
    pub revision: Option<String>,
}

impl ConstraintKind {
    /// Returns true if this kind is driven by a single version number
    pub fn uses_version(&self) -> bool {
        matches!(
            self,
            ConstraintKind::From
                | ConstraintKind::UpToNextMajor
                | ConstraintKind::UpToNextMinor
                | ConstraintKind::Exact
        )
    }

    /// Returns the kebab-case name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            ConstraintKind::From => "from",
            ConstraintKind::UpToNextMajor => "up-to-next-major",
            ConstraintKind::UpToNextMinor => "up-to-next-minor",
            ConstraintKind::Exact => "exact",
            ConstraintKind::OpenRange => "open-range",
            ConstraintKind::ClosedRange => "closed-range",
            ConstraintKind::Branch => "branch",
            ConstraintKind::Revision => "revision",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ConstraintFields {
    /// Creates fields holding only a version
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// Creates fields holding only a range
    pub fn with_range(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        Self {
            lower: Some(lower.into()),
            upper: Some(upper.into()),
            ..Self::default()
        }
    }
}

impl VersionConstraint {
    /// Build a constraint from the selected kind and the raw field values
    ///
    /// Fields the kind does not use are ignored; missing fields become empty
    /// strings.
    pub fn from_selection(kind: ConstraintKind, fields: &ConstraintFields) -> Self {
        let take = |field: &Option<String>| field.clone().unwrap_or_default();

        match kind {
            ConstraintKind::From => VersionConstraint::From {
                version: take(&fields.version),
            },
            ConstraintKind::UpToNextMajor => VersionConstraint::UpToNextMajor {
                version: take(&fields.version),
            },
            ConstraintKind::UpToNextMinor => VersionConstraint::UpToNextMinor {
                version: take(&fields.version),
            },
            ConstraintKind::Exact => VersionConstraint::Exact {
                version: take(&fields.version),
            },
            ConstraintKind::OpenRange => VersionConstraint::OpenRange {
                lower: take(&fields.lower),
                upper: take(&fields.upper),
            },
            ConstraintKind::ClosedRange => VersionConstraint::ClosedRange {
                lower: take(&fields.lower),
                upper: take(&fields.upper),
            },
            ConstraintKind::Branch => VersionConstraint::GitBranch {
                branch: take(&fields.branch),
            },
            ConstraintKind::Revision => VersionConstraint::GitRevision {
                revision: take(&fields.revision),
            },
        }
    }

    /// Creates a `from:` constraint
    pub fn from_version(version: impl Into<String>) -> Self {
        VersionConstraint::From {
            version: version.into(),
        }
    }

    /// Creates an `.upToNextMajor` constraint
    pub fn up_to_next_major(version: impl Into<String>) -> Self {
        VersionConstraint::UpToNextMajor {
            version: version.into(),
        }
    }

    /// Creates an `.upToNextMinor` constraint
    pub fn up_to_next_minor(version: impl Into<String>) -> Self {
        VersionConstraint::UpToNextMinor {
            version: version.into(),
        }
    }

    /// Creates an `.exact` constraint
    pub fn exact(version: impl Into<String>) -> Self {
        VersionConstraint::Exact {
            version: version.into(),
        }
    }

    /// Creates a `..<` range
    pub fn open_range(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        VersionConstraint::OpenRange {
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    /// Creates a `...` range
    pub fn closed_range(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        VersionConstraint::ClosedRange {
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    /// Creates a `.branch` constraint
    pub fn branch(branch: impl Into<String>) -> Self {
        VersionConstraint::GitBranch {
            branch: branch.into(),
        }
    }

    /// Creates a `.revision` constraint
    pub fn revision(revision: impl Into<String>) -> Self {
        VersionConstraint::GitRevision {
            revision: revision.into(),
        }
    }

    /// The selection tag for this constraint
    pub fn kind(&self) -> ConstraintKind {
        match self {
            VersionConstraint::From { .. } => ConstraintKind::From,
            VersionConstraint::UpToNextMajor { .. } => ConstraintKind::UpToNextMajor,
            VersionConstraint::UpToNextMinor { .. } => ConstraintKind::UpToNextMinor,
            VersionConstraint::Exact { .. } => ConstraintKind::Exact,
            VersionConstraint::OpenRange { .. } => ConstraintKind::OpenRange,
            VersionConstraint::ClosedRange { .. } => ConstraintKind::ClosedRange,
            VersionConstraint::GitBranch { .. } => ConstraintKind::Branch,
            VersionConstraint::GitRevision { .. } => ConstraintKind::Revision,
        }
    }

    /// Render the constraint as Swift manifest source
    ///
    /// Every text field is sanitized first. Only `GitRevision` can fail.
    pub fn render(&self) -> Result<String, GenerateError> {
        let rendered = match self {
            VersionConstraint::From { version } => {
                format!("from: \"{}\"", sanitize(version))
            }
            VersionConstraint::UpToNextMajor { version } => {
                format!(".upToNextMajor(from: \"{}\")", sanitize(version))
            }
            VersionConstraint::UpToNextMinor { version } => {
                format!(".upToNextMinor(from: \"{}\")", sanitize(version))
            }
            VersionConstraint::Exact { version } => {
                format!(".exact(\"{}\")", sanitize(version))
            }
            VersionConstraint::OpenRange { lower, upper } => {
                format!("\"{}\"..<\"{}\"", sanitize(lower), sanitize(upper))
            }
            VersionConstraint::ClosedRange { lower, upper } => {
                format!("\"{}\"...\"{}\"", sanitize(lower), sanitize(upper))
            }
            VersionConstraint::GitBranch { branch } => {
                format!(".branch(\"{}\")", sanitize(branch))
            }
            VersionConstraint::GitRevision { revision } => {
                if !is_valid_commit_hash(revision) {
                    return Err(GenerateError::InvalidHash);
                }
                format!(".revision(\"{}\")", sanitize(revision))
            }
        };

        Ok(rendered)
    }
}
