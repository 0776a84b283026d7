//! Manifest entry generation
//!
//! Combines a repository URL with a rendered constraint into one line of a
//! `Package.swift` dependency list.

use crate::domain::VersionConstraint;
use crate::error::GenerateError;

/// Produce `.package(url: "{source_url}", {constraint}),`
///
/// `source_url` is embedded as-is; only the constraint's fields are sanitized.
pub fn generate_entry(
    source_url: &str,
    constraint: &VersionConstraint,
) -> Result<String, GenerateError> {
    let rendered = constraint.render()?;
    Ok(format!(".package(url: \"{}\", {}),", source_url, rendered))
}
