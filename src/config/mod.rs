//! Packaging configuration file.
//!
//! A small TOML file that names the application and its macOS resources
//! directory:
//!
//! ```toml
//! app_name = "Bisq2"
//! resources_dir = "package/macosx"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{PackagingError, Result};
use crate::packaging::MacPackage;

/// Values read from a packaging config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackagingConfig {
    /// Name passed to `--mac-package-name`.
    #[serde(default)]
    pub app_name: Option<String>,

    /// Resources directory. Relative values are taken relative to the
    /// directory holding the config file once loaded through [`PackagingConfig::load`].
    #[serde(default)]
    pub resources_dir: Option<PathBuf>,
}

impl PackagingConfig {
    /// Read and parse `path`, anchoring a relative `resources_dir` at the
    /// config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| PackagingError::Config {
            path: path.to_path_buf(),
            reason: format!("failed to read: {}", e),
        })?;

        let mut config = Self::parse(&contents).map_err(|e| PackagingError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if let Some(dir) = config.resources_dir.take() {
            let anchored = match path.parent() {
                Some(parent) if dir.is_relative() => parent.join(dir),
                _ => dir,
            };
            config.resources_dir = Some(anchored);
        }

        log::debug!("Loaded packaging config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse config text without any path anchoring.
    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Fill any value still unset from `other`. Values already present win.
    pub fn or(self, other: PackagingConfig) -> Self {
        Self {
            app_name: self.app_name.or(other.app_name),
            resources_dir: self.resources_dir.or(other.resources_dir),
        }
    }

    /// macOS argument builder, if both values are known.
    pub fn mac_package(&self) -> Option<MacPackage> {
        match (&self.resources_dir, &self.app_name) {
            (Some(dir), Some(name)) => Some(MacPackage::new(dir.clone(), name.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_both_fields() {
        let config =
            PackagingConfig::parse("app_name = \"Bisq2\"\nresources_dir = \"/res\"\n").unwrap();
        assert_eq!(config.app_name.as_deref(), Some("Bisq2"));
        assert_eq!(config.resources_dir, Some(PathBuf::from("/res")));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(PackagingConfig::parse("icon = \"x.icns\"\n").is_err());
    }

    #[test]
    fn relative_resources_dir_is_anchored_at_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packaging.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "app_name = \"Bisq2\"").unwrap();
        writeln!(file, "resources_dir = \"package/macosx\"").unwrap();
        drop(file);

        let config = PackagingConfig::load(&path).unwrap();
        assert_eq!(
            config.resources_dir,
            Some(dir.path().join("package/macosx"))
        );
    }

    #[test]
    fn absolute_resources_dir_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packaging.toml");
        std::fs::write(&path, "resources_dir = \"/opt/res\"\n").unwrap();

        let config = PackagingConfig::load(&path).unwrap();
        assert_eq!(config.resources_dir, Some(PathBuf::from("/opt/res")));
        assert_eq!(config.app_name, None);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PackagingConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PackagingError::Config { .. }));
    }

    #[test]
    fn present_values_win_when_merging() {
        let cli = PackagingConfig {
            app_name: Some("Cli".into()),
            resources_dir: None,
        };
        let file = PackagingConfig {
            app_name: Some("File".into()),
            resources_dir: Some("/file/res".into()),
        };
        let merged = cli.or(file);
        assert_eq!(merged.app_name.as_deref(), Some("Cli"));
        assert_eq!(merged.resources_dir, Some(PathBuf::from("/file/res")));
        assert!(merged.mac_package().is_some());
    }

    #[test]
    fn mac_package_needs_both_values() {
        let config = PackagingConfig {
            app_name: Some("Bisq2".into()),
            resources_dir: None,
        };
        assert!(config.mac_package().is_none());
    }
}
