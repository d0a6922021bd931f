//! JSON file loader
//!
//! Copyright (c) 2025 jsonfile contributors
//! Licensed under the Apache-2.0 license

use crate::loader::{
    config::LoaderConfig,
    error::{LoaderError, LoaderResult},
    resolver::{root_base_path, simple_type_name, working_directory, NameResolver},
};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Loads typed values from JSON documents located by identifier
pub trait DocumentLoader {
    /// Load a single value. `None` resolves the file from the name of `T`.
    fn load<T: DeserializeOwned>(&self, identifier: Option<&str>) -> LoaderResult<T>;

    /// Load a JSON array of values. `None` resolves the file from the name of `T`.
    fn load_many<T: DeserializeOwned>(&self, identifier: Option<&str>) -> LoaderResult<Vec<T>>;
}

/// Resolves identifiers against a base directory and deserializes the
/// matching file with `serde_json`.
///
/// The loader is immutable after construction. Every call resolves, checks,
/// reads and decodes from scratch; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileLoader {
    resolver: NameResolver,
}

impl JsonFileLoader {
    /// Create a loader rooted at the current working directory
    pub fn new() -> LoaderResult<Self> {
        Self::from_config(LoaderConfig::default())
    }

    /// Create a loader rooted at `base_path`.
    ///
    /// A relative path is joined onto the current working directory.
    pub fn with_base_path(base_path: impl AsRef<Path>) -> LoaderResult<Self> {
        Self::from_config(LoaderConfig::with_base_path(base_path.as_ref()))
    }

    /// Create a loader from the `JSONFILE_*` environment variables
    pub fn from_env() -> LoaderResult<Self> {
        let mut config = LoaderConfig::default();
        config.merge_with_env();
        Self::from_config(config)
    }

    /// Create a loader from an explicit configuration
    pub fn from_config(config: LoaderConfig) -> LoaderResult<Self> {
        let extension = config.normalized_extension()?;
        let cwd = working_directory()?;

        let base_path = match config.base_path {
            Some(ref path) => root_base_path(path, &cwd)?,
            None => cwd,
        };

        tracing::debug!(
            base_path = %base_path.display(),
            extension = %extension,
            "json file loader configured"
        );

        Ok(Self {
            resolver: NameResolver::rooted(base_path, extension),
        })
    }

    /// Absolute directory identifiers are resolved against
    pub fn base_path(&self) -> &Path {
        self.resolver.base_path()
    }

    /// Path that `load::<T>(identifier)` would read, without touching the
    /// filesystem
    pub fn resolve_path<T: ?Sized>(&self, identifier: Option<&str>) -> LoaderResult<PathBuf> {
        self.resolver.resolve(identifier, simple_type_name::<T>())
    }

    /// Load a single JSON value of type `T`
    pub fn load<T: DeserializeOwned>(&self, identifier: Option<&str>) -> LoaderResult<T> {
        let path = self.resolve_path::<T>(identifier)?;
        tracing::debug!(
            path = %path.display(),
            type_name = simple_type_name::<T>(),
            "loading json document"
        );

        let content = read_document(&path)?;
        decode(&content, &path)
    }

    /// Load a JSON array of `T`.
    ///
    /// The whole file is read and decoded before anything is returned.
    pub fn load_many<T: DeserializeOwned>(&self, identifier: Option<&str>) -> LoaderResult<Vec<T>> {
        let path = self.resolve_path::<T>(identifier)?;
        tracing::debug!(
            path = %path.display(),
            type_name = simple_type_name::<T>(),
            "loading json array"
        );

        let content = read_document(&path)?;
        let values: Vec<T> = decode(&content, &path)?;
        tracing::trace!(count = values.len(), "decoded json array");
        Ok(values)
    }
}

impl DocumentLoader for JsonFileLoader {
    fn load<T: DeserializeOwned>(&self, identifier: Option<&str>) -> LoaderResult<T> {
        JsonFileLoader::load(self, identifier)
    }

    fn load_many<T: DeserializeOwned>(&self, identifier: Option<&str>) -> LoaderResult<Vec<T>> {
        JsonFileLoader::load_many(self, identifier)
    }
}

/// Read the whole file; the handle is dropped before returning
fn read_document(path: &Path) -> LoaderResult<String> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "json file not found");
        return Err(LoaderError::not_found(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut content = String::new();
    BufReader::new(file)
        .read_to_string(&mut content)
        .map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to read json file");
            LoaderError::read_failure(path.to_path_buf(), e)
        })?;

    // Editors on some platforms still write a UTF-8 BOM
    if let Some(stripped) = content.strip_prefix('\u{feff}') {
        content = stripped.to_string();
    }

    Ok(content)
}

fn open_error(path: &Path, error: std::io::Error) -> LoaderError {
    // removed between the existence check and the open
    if error.kind() == ErrorKind::NotFound {
        tracing::warn!(path = %path.display(), "json file disappeared before it was opened");
        return LoaderError::not_found(path.to_path_buf());
    }

    tracing::warn!(path = %path.display(), error = %error, "failed to open json file");
    LoaderError::read_failure(path.to_path_buf(), error)
}

fn decode<T: DeserializeOwned>(content: &str, path: &Path) -> LoaderResult<T> {
    serde_json::from_str(content).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "failed to decode json file");
        LoaderError::decode_failure(path.to_path_buf(), e)
    })
}
