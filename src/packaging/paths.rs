//! Absolute path strings for argument values.

use std::path::Path;

use crate::error::{PackagingError, Result};

/// Absolute string form of `path`.
///
/// Relative paths are joined onto the current directory. `..` components are
/// kept as given and nothing is resolved through symlinks. The path itself is never touched on disk and does not need to exist.
pub fn absolute_path_string(path: &Path) -> Result<String> {
    let absolute = std::path::absolute(path)?;
    match absolute.to_str() {
        Some(value) => Ok(value.to_owned()),
        None => Err(PackagingError::NonUtf8Path { path: absolute }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_is_kept() {
        let value = absolute_path_string(Path::new("/build/resources")).unwrap();
        assert_eq!(value, "/build/resources");
    }

    #[cfg(unix)]
    #[test]
    fn parent_components_are_kept() {
        let value = absolute_path_string(Path::new("/build/./tmp/../resources")).unwrap();
        assert_eq!(value, "/build/tmp/../resources");
    }

    #[test]
    fn relative_path_is_joined_onto_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        let value = absolute_path_string(Path::new("does-not-exist/resources")).unwrap();
        assert_eq!(
            value,
            cwd.join("does-not-exist/resources").to_str().unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn relative_parent_components_are_kept() {
        let cwd = std::env::current_dir().unwrap();
        let value = absolute_path_string(Path::new("link/../res")).unwrap();
        assert_eq!(value, cwd.join("link/../res").to_str().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn path_through_symlink_still_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        std::fs::create_dir_all(root.join("real/inner")).unwrap();
        std::fs::create_dir_all(root.join("real/res")).unwrap();
        std::os::unix::fs::symlink(root.join("real/inner"), root.join("link")).unwrap();

        let given = root.join("link/../res");
        let value = absolute_path_string(&given).unwrap();
        assert_eq!(value, given.to_str().unwrap());
        assert!(Path::new(&value).is_dir());
    }

    #[test]
    fn empty_path_is_an_io_error() {
        let err = absolute_path_string(Path::new("")).unwrap_err();
        assert!(matches!(err, PackagingError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/build/\xff"));
        let err = absolute_path_string(path).unwrap_err();
        assert!(matches!(err, PackagingError::NonUtf8Path { .. }));
    }
}
