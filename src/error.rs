//! Application error types using thiserror
//!
//! Error hierarchy:
//! - GenerateError: The generator core rejected its input
//! - GithubError: Issues with GitHub API communication
//! - ConfigError: Issues with configuration files and CLI values

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest entry generation errors
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// GitHub API related errors
    #[error(transparent)]
    Github(#[from] GithubError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while rendering a version constraint
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The revision is not exactly one 5-40 character lowercase hex word
    #[error("Invalid commit hash!")]
    InvalidHash,
}

/// Errors related to GitHub API communication
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GithubError {
    /// The query could not be turned into a search request
    #[error("The search term you entered could not be searched for.")]
    BadQuery,

    /// The repository has no usable owner/name pair
    #[error("The repository you entered could not be used to find any releases.")]
    BadRepository,

    /// Empty response body
    #[error("The search did not return any data.")]
    NoData,

    /// The response body could not be decoded
    #[error("The response from GitHub could not be appropriately parsed.")]
    MalformedData,

    /// Non-200 status code
    #[error("The GitHub API responded with a status code of {0}")]
    BadResponseStatus(u16),

    /// Transport or client failure
    #[error("An unknown error occurred: {0}")]
    Other(String),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// A setting holds a value that cannot be used
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl GithubError {
    /// Creates a new Other error
    pub fn other(reason: impl Into<String>) -> Self {
        GithubError::Other(reason.into())
    }
}

impl ConfigError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidValue error
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
