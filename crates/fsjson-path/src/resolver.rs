//! `~` and `$VAR` expansion, and absolute path resolution.

use std::path::PathBuf;

use fsjson_core::{Error, Result};
use log::trace;

use crate::config::{ResolverConfig, UndefinedVarPolicy};
use crate::env::{Environment, ProcessEnv};
use crate::paths::{NO_PATH_PROVIDED, clean_path};

/// Expands and absolutizes path strings against an [`Environment`].
///
/// `PathResolver::new()` reads the real process environment. Use
/// [`PathResolver::with_env`] to expand against something else.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use fsjson_path::{MapEnv, PathResolver};
///
/// let resolver = PathResolver::with_env(
///     MapEnv::new().with_var("HOME", "/path/home/test-user"),
/// );
/// assert_eq!(
///     resolver.abs_path("~/some/file.ext").unwrap(),
///     PathBuf::from("/path/home/test-user/some/file.ext"),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver<E = ProcessEnv> {
    env: E,
    config: ResolverConfig,
}

impl PathResolver<ProcessEnv> {
    /// Create a resolver over the process environment.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Environment> PathResolver<E> {
    /// Create a resolver over a custom environment.
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            config: ResolverConfig::default(),
        }
    }

    /// Replace the expansion settings.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// The environment this resolver reads from.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// The active expansion settings.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Expands a leading `~` and every `$VAR` / `${VAR}` reference.
    ///
    /// `~` is only expanded when it is the whole path or is followed by a
    /// separator. If the environment has no home directory it is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedVariable`] when a variable is unset and the
    /// policy is [`UndefinedVarPolicy::Error`].
    pub fn expand(&self, path: &str) -> Result<String> {
        let policy = self.config.undefined_vars;
        let env = &self.env;

        let lookup = |name: &str| -> std::result::Result<Option<String>, Error> {
            match env.var(name) {
                Some(value) => Ok(Some(value)),
                None => match policy {
                    UndefinedVarPolicy::Empty => Ok(Some(String::new())),
                    UndefinedVarPolicy::Keep => Ok(None),
                    UndefinedVarPolicy::Error => Err(Error::undefined_variable(name)),
                },
            }
        };

        let expanded = if self.config.expand_tilde {
            let home = || env.home_dir().map(|dir| dir.to_string_lossy().into_owned());
            shellexpand::full_with_context(path, home, lookup)
        } else {
            shellexpand::env_with_context(path, lookup)
        }
        .map_err(|e| e.cause)?;

        trace!("Expanded path {:?} -> {:?}", path, expanded);
        Ok(expanded.into_owned())
    }

    /// Resolves `path` to an absolute, cleaned path.
    ///
    /// Expands `~` and environment variables, joins a relative result onto
    /// the environment's working directory, then cleans it lexically (see
    /// [`clean_path`]). `"."` resolves to the working directory itself.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an empty path
    /// - [`Error::UndefinedVariable`] under the strict policy
    /// - [`Error::Io`] if the working directory cannot be determined
    pub fn abs_path(&self, path: &str) -> Result<PathBuf> {
        if path.is_empty() {
            return Err(Error::invalid_argument(NO_PATH_PROVIDED));
        }

        let expanded = PathBuf::from(self.expand(path)?);
        let joined = if expanded.is_absolute() {
            expanded
        } else {
            self.env.current_dir()?.join(expanded)
        };

        let cleaned = clean_path(&joined);
        trace!("Resolved {:?} to {}", path, cleaned.display());
        Ok(cleaned)
    }
}

/// [`PathResolver::expand`] over the process environment.
pub fn expand(path: &str) -> Result<String> {
    PathResolver::new().expand(path)
}

/// [`PathResolver::abs_path`] over the process environment.
///
/// # Example
///
/// ```
/// let cwd = std::env::current_dir().unwrap();
/// assert_eq!(fsjson_path::abs_path(".").unwrap(), cwd);
/// ```
pub fn abs_path(path: &str) -> Result<PathBuf> {
    PathResolver::new().abs_path(path)
}
