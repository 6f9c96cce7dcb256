//! Installer format identifiers understood by jpackage.

use std::fmt;
use std::str::FromStr;

use crate::error::PackagingError;

/// Installer type produced by one jpackage run.
///
/// The string form matches the value jpackage accepts for `--type`.
///
/// # Examples
///
/// ```
/// use bisq_jpackage_args::packaging::PackageFormat;
///
/// let format: PackageFormat = "dmg".parse().unwrap();
/// assert_eq!(format, PackageFormat::Dmg);
/// assert_eq!(format.file_extension(), Some("dmg"));
/// ```
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PackageFormat {
    /// Unpacked application image, no installer
    AppImage,
    /// macOS disk image
    Dmg,
    /// macOS installer package
    Pkg,
    /// Windows executable installer
    Exe,
    /// Windows Installer database
    Msi,
    /// Debian package
    Deb,
    /// RPM package
    Rpm,
}

impl PackageFormat {
    /// Every format jpackage can emit.
    pub const ALL: [PackageFormat; 7] = [
        PackageFormat::AppImage,
        PackageFormat::Dmg,
        PackageFormat::Pkg,
        PackageFormat::Exe,
        PackageFormat::Msi,
        PackageFormat::Deb,
        PackageFormat::Rpm,
    ];

    /// Value passed to `jpackage --type`.
    pub fn as_str(self) -> &'static str {
        match self {
            PackageFormat::AppImage => "app-image",
            PackageFormat::Dmg => "dmg",
            PackageFormat::Pkg => "pkg",
            PackageFormat::Exe => "exe",
            PackageFormat::Msi => "msi",
            PackageFormat::Deb => "deb",
            PackageFormat::Rpm => "rpm",
        }
    }

    /// Extension of the produced artifact. An app image is a directory and has none.
    pub fn file_extension(self) -> Option<&'static str> {
        match self {
            PackageFormat::AppImage => None,
            other => Some(other.as_str()),
        }
    }
}

/// Comma separated `--type` names, e.g. `dmg, pkg`.
pub fn join_formats(formats: &[PackageFormat]) -> String {
    formats
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageFormat {
    type Err = PackagingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PackageFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PackagingError::UnknownFormat {
                name: s.to_string(),
                known: join_formats(&PackageFormat::ALL),
            })
    }
}
