//! Expansion settings for [`PathResolver`](crate::PathResolver).

/// What to do with a `$VAR` reference whose variable is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndefinedVarPolicy {
    /// Substitute the empty string.
    #[default]
    Empty,
    /// Leave the `$VAR` reference in the output unchanged.
    Keep,
    /// Fail with [`Error::UndefinedVariable`](fsjson_core::Error::UndefinedVariable).
    Error,
}

/// Options controlling `~` and `$VAR` expansion.
///
/// # Example
///
/// ```
/// use fsjson_path::{ResolverConfig, UndefinedVarPolicy};
///
/// let config = ResolverConfig::default()
///     .with_undefined_vars(UndefinedVarPolicy::Error)
///     .with_tilde(false);
/// assert_eq!(config.undefined_vars, UndefinedVarPolicy::Error);
/// assert!(!config.expand_tilde);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Handling of unset variables.
    pub undefined_vars: UndefinedVarPolicy,
    /// Expand a leading `~` to the home directory.
    pub expand_tilde: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            undefined_vars: UndefinedVarPolicy::Empty,
            expand_tilde: true,
        }
    }
}

impl ResolverConfig {
    /// Defaults, but unset variables are an error.
    pub fn strict() -> Self {
        Self::default().with_undefined_vars(UndefinedVarPolicy::Error)
    }

    /// Set the undefined variable policy.
    pub fn with_undefined_vars(mut self, policy: UndefinedVarPolicy) -> Self {
        self.undefined_vars = policy;
        self
    }

    /// Enable or disable tilde expansion.
    pub fn with_tilde(mut self, enabled: bool) -> Self {
        self.expand_tilde = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.undefined_vars, UndefinedVarPolicy::Empty);
        assert!(config.expand_tilde);
    }

    #[test]
    fn test_strict_config() {
        let config = ResolverConfig::strict();
        assert_eq!(config.undefined_vars, UndefinedVarPolicy::Error);
        assert!(config.expand_tilde);
    }
}
