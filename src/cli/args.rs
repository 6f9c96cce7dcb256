//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

use crate::config::PackagingConfig;
use crate::error::{CliError, Result};
use crate::packaging::{MacPackage, PackageFormat};

/// jpackage argument builder for the Bisq 2 macOS installer
#[derive(Parser, Debug)]
#[command(
    name = "bisq_jpackage_args",
    version,
    about = "Prints the macOS specific jpackage arguments for the Bisq 2 installer",
    long_about = "Prints the macOS specific jpackage arguments for the Bisq 2 installer.

Values come from the command line, a packaging config file, or both; command
line values win.

Usage:
  bisq_jpackage_args --resources-dir package/macosx --app-name Bisq2
  bisq_jpackage_args --config packaging.toml --json
  bisq_jpackage_args --list-formats"
)]
pub struct Args {
    /// Installer format to build arguments for
    #[arg(short, long, value_name = "FORMAT", default_value = "dmg", env = "BISQ_PACKAGE_FORMAT")]
    pub format: String,

    /// Directory holding the macOS packaging resources (Info.plist, icons)
    #[arg(short, long, value_name = "PATH")]
    pub resources_dir: Option<PathBuf>,

    /// Application name passed to --mac-package-name
    #[arg(short = 'n', long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Packaging config file (TOML with app_name and resources_dir)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a JSON array instead of one argument per line
    #[arg(long)]
    pub json: bool,

    /// Print the supported formats and exit
    #[arg(long)]
    pub list_formats: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Requested installer format
    pub fn package_format(&self) -> Result<PackageFormat> {
        self.format.parse()
    }

    /// Command line values, completed from the config file if one was given
    pub fn resolve_config(&self) -> Result<PackagingConfig> {
        let from_cli = PackagingConfig {
            app_name: self.app_name.clone(),
            resources_dir: self.resources_dir.clone(),
        };

        match &self.config {
            Some(path) => Ok(from_cli.or(PackagingConfig::load(path)?)),
            None => Ok(from_cli),
        }
    }

    /// Check that both inputs are known and build the argument builder from them
    pub fn validate(&self) -> Result<MacPackage> {
        let config = self.resolve_config()?;

        match config.mac_package() {
            Some(package) => Ok(package),
            None => {
                let argument = if config.resources_dir.is_none() {
                    "--resources-dir"
                } else {
                    "--app-name"
                };
                Err(CliError::MissingArgument {
                    argument: argument.to_string(),
                }
                .into())
            }
        }
    }
}
