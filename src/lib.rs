//! jpackage argument builder for the Bisq 2 desktop installers
//!
//! Turns a resources directory and an application name into the
//! platform specific flags jpackage needs for one installer format.
//! Currently the macOS disk image is the only supported family.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod error;
pub mod packaging;

// Re-export commonly used types
pub use error::{CliError, PackagingError, Result};
pub use packaging::{MacPackage, PackageFormat, PackageFormatConfig};
