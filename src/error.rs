//! Error types for jpackage argument construction.
//!
//! Every failure the crate can report is a [`PackagingError`]; command line
//! problems are wrapped from [`CliError`].

use std::path::PathBuf;
use thiserror::Error;

use crate::packaging::{PackageFormat, join_formats};

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, PackagingError>;

/// Main error type for all packaging operations
#[derive(Error, Debug)]
pub enum PackagingError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors (e.g. the current directory cannot be read while resolving a relative path)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Format name that jpackage does not know
    #[error("Unknown package format: {name}. Known formats: {known}")]
    UnknownFormat {
        /// Name as given by the caller
        name: String,
        /// Comma separated list of known formats
        known: String,
    },

    /// Format is known but this package family cannot build it
    #[error(
        "Unsupported package format: {format}. Supported formats: {}",
        join_formats(supported)
    )]
    UnsupportedFormat {
        /// Requested format
        format: PackageFormat,
        /// Formats the package family does support
        supported: Vec<PackageFormat>,
    },

    /// Absolute form of a path is not valid UTF-8
    #[error("Path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// Offending path
        path: PathBuf,
    },

    /// Packaging configuration file could not be read or parsed
    #[error("Invalid packaging config {}: {reason}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}
