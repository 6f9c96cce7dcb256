//! jpackage argument construction per platform package family.
//!
//! Each family declares the installer formats it can build and turns a
//! requested format into the jpackage flags for it. The caller is expected
//! to add `--type`, `--input` and the other invocation-wide flags itself.

mod format;
mod macos;
mod paths;

pub use format::{PackageFormat, join_formats};
pub use macos::MacPackage;
pub use paths::absolute_path_string;

use std::collections::BTreeSet;

use crate::error::Result;

/// Per-family jpackage argument builder.
pub trait PackageFormatConfig {
    /// Formats this family can produce. Constant for the lifetime of the value.
    fn package_formats(&self) -> BTreeSet<PackageFormat>;

    /// Ordered flag/value pairs for `format`.
    ///
    /// Fails with [`crate::PackagingError::UnsupportedFormat`] when `format`
    /// is not one of [`package_formats`](Self::package_formats).
    fn create_arguments(&self, format: PackageFormat) -> Result<Vec<String>>;

    /// Whether `format` is one of [`package_formats`](Self::package_formats).
    fn supports(&self, format: PackageFormat) -> bool {
        self.package_formats().contains(&format)
    }
}
