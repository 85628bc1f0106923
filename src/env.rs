//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests build an [`Env::mock()`] from explicit pairs so config layering can
//! be checked without touching the process environment.

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed only by the given key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable. Empty values count as unset.
    pub fn var(&self, name: &str) -> Option<String> {
        let value = match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        assert!(Env::real().var("CARGO_MANIFEST_DIR").is_some());
    }

    #[test]
    fn mock_env_returns_set_values() {
        let env = Env::mock([("USERDIR_BASE_URL", "http://api"), ("USERDIR_TOKEN", "t")]);
        assert_eq!(env.var("USERDIR_BASE_URL").as_deref(), Some("http://api"));
        assert_eq!(env.var("USERDIR_TOKEN").as_deref(), Some("t"));
        assert!(env.var("USERDIR_LOG").is_none());
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let env = Env::mock([("USERDIR_TOKEN", "   ")]);
        assert!(env.var("USERDIR_TOKEN").is_none());
    }
}
