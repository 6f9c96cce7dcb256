//! macOS disk image arguments.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::{PackageFormat, PackageFormatConfig, absolute_path_string};
use crate::error::{PackagingError, Result};

/// Icon file expected inside the resources directory
pub const ICON_FILE_NAME: &str = "Bisq2.icns";

/// Text passed to `--description`
pub const DESCRIPTION: &str = "A decentralized bitcoin exchange network.";

/// jpackage configuration for the macOS disk image.
///
/// Holds the resources directory and application name and turns them into
/// the macOS specific jpackage flags. The value is immutable after
/// construction and can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use bisq_jpackage_args::packaging::{MacPackage, PackageFormat};
///
/// let package = MacPackage::new("/build/resources", "Bisq2");
/// let args = package.build_arguments(PackageFormat::Dmg).unwrap();
/// assert_eq!(args[0], "--resource-dir");
/// assert_eq!(args[5], "/build/resources/Bisq2.icns");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacPackage {
    resources_path: PathBuf,
    app_name: String,
}

impl MacPackage {
    /// Creates the builder. `resources_path` may be relative; it is made
    /// absolute only when arguments are built.
    pub fn new(resources_path: impl Into<PathBuf>, app_name: impl Into<String>) -> Self {
        Self {
            resources_path: resources_path.into(),
            app_name: app_name.into(),
        }
    }

    /// Resources directory as given at construction.
    pub fn resources_path(&self) -> &Path {
        &self.resources_path
    }

    /// Application name as given at construction.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Formats this family builds: only the disk image.
    pub fn supported_formats() -> BTreeSet<PackageFormat> {
        BTreeSet::from([PackageFormat::Dmg])
    }

    /// jpackage flags for `format`.
    ///
    /// Yields `--resource-dir`, `--mac-package-name`, `--icon` and
    /// `--description`, each followed by its value.
    pub fn build_arguments(&self, format: PackageFormat) -> Result<Vec<String>> {
        if !Self::supported_formats().contains(&format) {
            log::warn!("Rejecting {} for macOS package {}", format, self.app_name);
            return Err(PackagingError::UnsupportedFormat {
                format,
                supported: Self::supported_formats().into_iter().collect(),
            });
        }

        let resource_dir = absolute_path_string(&self.resources_path)?;
        let icon = absolute_path_string(&self.resources_path.join(ICON_FILE_NAME))?;

        log::debug!(
            "Building {} arguments for {} (resources: {})",
            format,
            self.app_name,
            resource_dir
        );

        Ok(vec![
            "--resource-dir".to_string(),
            resource_dir,
            "--mac-package-name".to_string(),
            self.app_name.clone(),
            "--icon".to_string(),
            icon,
            "--description".to_string(),
            DESCRIPTION.to_string(),
        ])
    }
}

impl PackageFormatConfig for MacPackage {
    fn package_formats(&self) -> BTreeSet<PackageFormat> {
        Self::supported_formats()
    }

    fn create_arguments(&self, format: PackageFormat) -> Result<Vec<String>> {
        self.build_arguments(format)
    }
}
