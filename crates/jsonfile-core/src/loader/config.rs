//! Loader configuration
//!
//! Values come from defaults, an optional serialized config section, and
//! `JSONFILE_*` environment variables, in that order of precedence.
//!
//! Copyright (c) 2025 jsonfile contributors
//! Licensed under the Apache-2.0 license

use crate::loader::error::LoaderResult;
use crate::loader::resolver::normalize_extension;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding [`LoaderConfig::base_path`]
pub const BASE_PATH_ENV: &str = "JSONFILE_BASE_PATH";

/// Environment variable overriding [`LoaderConfig::default_extension`]
pub const DEFAULT_EXTENSION_ENV: &str = "JSONFILE_DEFAULT_EXTENSION";

/// Extension appended to identifiers that carry none
pub const DEFAULT_EXTENSION: &str = "json";

/// Configuration for loader behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directory the identifiers are resolved against. `None` means the
    /// working directory at construction time.
    pub base_path: Option<PathBuf>,
    /// Extension appended when the identifier has none
    pub default_extension: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            default_extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Configuration rooted at `base_path`
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
            ..Default::default()
        }
    }

    /// Apply `JSONFILE_*` overrides from the process environment
    pub fn merge_with_env(&mut self) {
        self.merge_env_from(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_path) = lookup(BASE_PATH_ENV) {
            tracing::debug!(%base_path, "base path overridden from environment");
            self.base_path = Some(PathBuf::from(base_path));
        }

        if let Some(extension) = lookup(DEFAULT_EXTENSION_ENV) {
            tracing::debug!(%extension, "default extension overridden from environment");
            self.default_extension = extension;
        }
    }

    /// The default extension without a leading dot
    pub(crate) fn normalized_extension(&self) -> LoaderResult<String> {
        normalize_extension(&self.default_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::error::LoaderError;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = LoaderConfig::default();
        assert_eq!(config.base_path, None);
        assert_eq!(config.default_extension, "json");
        assert_eq!(config.normalized_extension().unwrap(), "json");
    }

    #[test]
    fn test_deserialize_partial_section() {
        let config: LoaderConfig = serde_json::from_str(r#"{"base_path": "fixtures"}"#).unwrap();
        assert_eq!(config.base_path, Some(PathBuf::from("fixtures")));
        assert_eq!(config.default_extension, "json");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (BASE_PATH_ENV, "/srv/fixtures"),
            (DEFAULT_EXTENSION_ENV, ".jsonc"),
        ]
        .into_iter()
        .collect();

        let mut config = LoaderConfig::with_base_path("data");
        config.merge_env_from(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.base_path, Some(PathBuf::from("/srv/fixtures")));
        assert_eq!(config.normalized_extension().unwrap(), "jsonc");
    }

    #[test]
    fn test_absent_env_keeps_values() {
        let mut config = LoaderConfig::with_base_path("data");
        config.merge_env_from(|_| None);
        assert_eq!(config, LoaderConfig::with_base_path("data"));
    }

    #[test]
    fn test_blank_extension_rejected() {
        let config = LoaderConfig {
            default_extension: " . ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.normalized_extension(),
            Err(LoaderError::InvalidConfiguration { .. })
        ));
    }
}
