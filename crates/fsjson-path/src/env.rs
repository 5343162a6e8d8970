//! Environment lookups used during path expansion.
//!
//! [`PathResolver`](crate::PathResolver) never reads the process environment
//! directly. It goes through an [`Environment`], so callers (and tests) can
//! expand paths against a fixed set of variables without touching global
//! state.

use std::collections::HashMap;
use std::env;
use std::io;
use std::path::PathBuf;

/// Source of environment variables, the home directory and the working
/// directory.
pub trait Environment {
    /// Value of the variable `name`, or `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;

    /// Directory that a leading `~` expands to.
    ///
    /// Defaults to a non-empty `HOME` variable.
    fn home_dir(&self) -> Option<PathBuf> {
        self.var("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
    }

    /// Directory that relative paths are resolved against.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    /// `$HOME` when set, otherwise the platform home directory.
    fn home_dir(&self) -> Option<PathBuf> {
        self.var("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }
}

/// A fixed, in-memory environment.
///
/// Without an explicit working directory it falls back to the process's
/// current directory.
///
/// # Example
///
/// ```
/// use fsjson_path::{Environment, MapEnv};
///
/// let env = MapEnv::new().with_var("HOME", "/home/ada");
/// assert_eq!(env.var("HOME").as_deref(), Some("/home/ada"));
/// assert_eq!(env.var("SHELL"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
    current_dir: Option<PathBuf>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Pin the working directory.
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            current_dir: None,
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        match &self.current_dir {
            Some(dir) => Ok(dir.clone()),
            None => env::current_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_home_dir() {
        let env = MapEnv::new().with_var("HOME", "/path/home/test-user");
        assert_eq!(env.home_dir(), Some(PathBuf::from("/path/home/test-user")));
    }

    #[test]
    fn test_map_env_empty_home_is_none() {
        let env = MapEnv::new().with_var("HOME", "");
        assert_eq!(env.home_dir(), None);
    }

    #[test]
    fn test_map_env_no_home() {
        assert_eq!(MapEnv::new().home_dir(), None);
    }

    #[test]
    fn test_map_env_pinned_current_dir() {
        let env = MapEnv::new().with_current_dir("/srv/app");
        assert_eq!(env.current_dir().unwrap(), PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_map_env_current_dir_fallback() {
        let env = MapEnv::new();
        assert_eq!(env.current_dir().unwrap(), env::current_dir().unwrap());
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("A").as_deref(), Some("1"));
        assert_eq!(env.var("B").as_deref(), Some("2"));
        assert_eq!(env.var("C"), None);
    }

    #[test]
    fn test_process_env_current_dir() {
        assert_eq!(
            ProcessEnv.current_dir().unwrap(),
            env::current_dir().unwrap()
        );
    }

    #[test]
    fn test_process_env_reads_cargo_vars() {
        // cargo exports package metadata to the test process.
        assert_eq!(
            ProcessEnv.var("CARGO_PKG_NAME").as_deref(),
            Some(env!("CARGO_PKG_NAME"))
        );
    }
}
