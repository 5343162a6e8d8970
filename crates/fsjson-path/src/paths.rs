//! Path classification and existence checks.
//!
//! These helpers look at the path string as given; no `~` or `$VAR`
//! expansion is applied. Use [`PathResolver`](crate::PathResolver) to
//! expand first.

use std::path::{Component, Path, PathBuf};

use fsjson_core::{Error, Result};

pub(crate) const NO_PATH_PROVIDED: &str = "No path provided";

/// Reports whether `path` is relative.
///
/// A path starting with `/` is absolute. A path starting with `$` is treated
/// as absolute whatever the variable holds, since it may expand to one.
/// Everything else, including `~/...`, is relative.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an empty path.
///
/// # Example
///
/// ```
/// use fsjson_path::is_relative_path;
///
/// assert!(is_relative_path("./rel").unwrap());
/// assert!(!is_relative_path("/abs").unwrap());
/// assert!(!is_relative_path("$HOME/some").unwrap());
/// ```
pub fn is_relative_path(path: &str) -> Result<bool> {
    if path.is_empty() {
        return Err(Error::invalid_argument(NO_PATH_PROVIDED));
    }
    if path.starts_with("./") {
        return Ok(true);
    }
    Ok(!(path.starts_with('/') || path.starts_with('$')))
}

/// Checks whether a filesystem entry exists at `path`.
///
/// A missing entry is `Ok(false)`, not an error. Symlinks are followed, so a
/// dangling link reports `false`.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] for an empty path
/// - [`Error::IoPath`] if existence cannot be determined (e.g. a parent
///   directory is not readable)
pub fn is_path_exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::invalid_argument(NO_PATH_PROVIDED));
    }
    path.try_exists().map_err(|e| Error::io_with_path(e, path))
}

/// Cleans a path lexically.
///
/// Drops `.` components and repeated or trailing separators, and resolves
/// `..` against the preceding component. `..` never climbs above the root
/// of an absolute path; leading `..` components of a relative path are
/// kept. Symlinks are not consulted. An empty result becomes `.`.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use fsjson_path::clean_path;
///
/// assert_eq!(clean_path(Path::new("/a/./b//../c/")), PathBuf::from("/a/c"));
/// assert_eq!(clean_path(Path::new("../x/..")), PathBuf::from(".."));
/// ```
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_relative_path() {
        assert!(is_relative_path("./rel").unwrap());
        assert!(is_relative_path("rel").unwrap());
        assert!(is_relative_path("../up").unwrap());
        assert!(is_relative_path("~/home-relative").unwrap());
        assert!(!is_relative_path("/abs").unwrap());
        assert!(!is_relative_path("$THISENVDOESNTEXIST/some").unwrap());
        assert!(!is_relative_path("${HOME}/some").unwrap());
    }

    #[test]
    fn test_is_relative_path_empty() {
        let err = is_relative_path("").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_is_path_exists() {
        assert!(!is_path_exists("this/should/not/exist").unwrap());
        assert!(is_path_exists(".").unwrap());
    }

    #[test]
    fn test_is_path_exists_empty() {
        let err = is_path_exists("").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: No path provided");
    }

    #[test]
    fn test_is_path_exists_file_and_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("present.json");
        std::fs::write(&file, "{}").unwrap();

        assert!(is_path_exists(temp.path()).unwrap());
        assert!(is_path_exists(&file).unwrap());
        assert!(!is_path_exists(temp.path().join("absent.json")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_is_path_exists_dangling_symlink() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("dangling");
        std::os::unix::fs::symlink(temp.path().join("missing"), &link).unwrap();

        assert!(!is_path_exists(&link).unwrap());
    }

    #[test]
    fn test_clean_path_absolute() {
        assert_eq!(clean_path(Path::new("/a/b/c")), PathBuf::from("/a/b/c"));
        assert_eq!(clean_path(Path::new("/a/./b")), PathBuf::from("/a/b"));
        assert_eq!(clean_path(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(clean_path(Path::new("/a//b/")), PathBuf::from("/a/b"));
    }

    #[test]
    fn test_clean_path_does_not_climb_above_root() {
        assert_eq!(clean_path(Path::new("/../..")), PathBuf::from("/"));
        assert_eq!(clean_path(Path::new("/a/../../b")), PathBuf::from("/b"));
    }

    #[test]
    fn test_clean_path_relative() {
        assert_eq!(clean_path(Path::new("a/../b")), PathBuf::from("b"));
        assert_eq!(clean_path(Path::new("../../a")), PathBuf::from("../../a"));
        assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new(".")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("")), PathBuf::from("."));
    }
}
