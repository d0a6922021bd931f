//! File name resolution
//!
//! This module turns a caller-supplied identifier into the path that gets
//! read:
//! - Blank identifiers fall back to the simple name of the target type
//! - Leading and trailing `/` and `\` separators are stripped, and interior
//!   separators of either style are rebuilt with the host separator
//! - `.json` (or the configured default extension) is appended when the name
//!   carries no extension
//! - The name is joined onto the base path
//!
//! An identifier that is already absolute for the host replaces the base path
//! entirely. This is deliberate and means the resolver is not a sandbox.
//!
//! Copyright (c) 2025 jsonfile contributors
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Separator characters accepted in identifiers regardless of host
pub const SEPARATORS: [char; 2] = ['/', '\\'];

/// Simple name of `T`, without module path or generic arguments.
///
/// `my_app::fixtures::TestClass` becomes `TestClass` and
/// `alloc::vec::Vec<my_app::Item>` becomes `Vec`.
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// Resolves identifiers against a fixed, absolute base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameResolver {
    base_path: PathBuf,
    default_extension: String,
}

impl NameResolver {
    /// Create a resolver.
    ///
    /// A relative `base_path` is rooted against the current working
    /// directory. A leading dot on `default_extension` is ignored.
    pub fn new(
        base_path: impl AsRef<Path>,
        default_extension: impl Into<String>,
    ) -> LoaderResult<Self> {
        let default_extension: String = default_extension.into();
        let extension = normalize_extension(&default_extension)?;
        let base_path = root_base_path(base_path.as_ref(), &working_directory()?)?;
        Ok(Self::rooted(base_path, extension))
    }

    /// Build from an already absolute base and a normalized extension
    pub(crate) fn rooted(base_path: PathBuf, default_extension: String) -> Self {
        Self {
            base_path,
            default_extension,
        }
    }

    /// Absolute directory identifiers are resolved against
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Extension appended to names without one
    pub fn default_extension(&self) -> &str {
        &self.default_extension
    }

    /// Resolve `identifier`, falling back to `type_name` when it is blank
    pub fn resolve(&self, identifier: Option<&str>, type_name: &str) -> LoaderResult<PathBuf> {
        let name = match identifier {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                tracing::trace!(type_name, "no identifier supplied, using type name");
                type_name
            }
        };

        let file_name = self.file_name_with_extension(name)?;
        let path = self.base_path.join(&file_name);
        tracing::trace!(identifier = name, path = %path.display(), "resolved file name");
        Ok(path)
    }

    /// Normalize separators and make sure the name ends in an extension
    pub fn file_name_with_extension(&self, name: &str) -> LoaderResult<PathBuf> {
        let normalized = normalize_separators(Path::new(name))
            .ok_or_else(|| LoaderError::missing_identifier(name))?;

        if has_extension(&normalized) {
            return Ok(normalized);
        }

        let mut with_extension = OsString::from(normalized);
        with_extension.push(".");
        with_extension.push(&self.default_extension);
        Ok(PathBuf::from(with_extension))
    }
}

/// Root a configured base path against the working directory.
///
/// Blank input is rejected. Both relative and absolute input go through the
/// same separator normalization as identifiers; segments that are not valid
/// UTF-8 are kept byte for byte.
pub fn root_base_path(base_path: &Path, cwd: &Path) -> LoaderResult<PathBuf> {
    if base_path.to_string_lossy().trim().is_empty() {
        return Err(LoaderError::invalid_configuration(
            "base path cannot be empty or whitespace",
        ));
    }

    let normalized = normalize_separators(base_path);
    if base_path.is_absolute() {
        // only the root itself is left, e.g. "/"
        return Ok(normalized.unwrap_or_else(|| base_path.to_path_buf()));
    }

    Ok(match normalized {
        Some(relative) => cwd.join(relative),
        None => cwd.to_path_buf(),
    })
}

/// Working directory used to root relative base paths
pub(crate) fn working_directory() -> LoaderResult<PathBuf> {
    std::env::current_dir().map_err(|e| {
        LoaderError::invalid_configuration(format!(
            "cannot determine the working directory: {}",
            e
        ))
    })
}

/// Strip a leading dot and reject blank extensions
pub(crate) fn normalize_extension(raw: &str) -> LoaderResult<String> {
    let extension = raw.trim().trim_start_matches('.');
    if extension.is_empty() {
        return Err(LoaderError::invalid_configuration(format!(
            "default extension '{}' cannot be empty",
            raw
        )));
    }
    Ok(extension.to_string())
}

/// Rebuild `path` with host separators, splitting every segment on both
/// separator styles.
///
/// Host-absolute paths keep their prefix and root; relative ones lose any
/// leading separator. Returns `None` when no named segment is left.
fn normalize_separators(path: &Path) -> Option<PathBuf> {
    let absolute = path.is_absolute();
    let mut rebuilt = PathBuf::new();
    let mut named = false;

    for component in path.components() {
        match component {
            Component::Normal(segment) => match segment.to_str() {
                Some(text) => {
                    for piece in text.split(SEPARATORS).filter(|p| !p.is_empty()) {
                        rebuilt.push(piece);
                        named = true;
                    }
                }
                None => {
                    rebuilt.push(segment);
                    named = true;
                }
            },
            Component::Prefix(_) | Component::RootDir if !absolute => {}
            other => rebuilt.push(other.as_os_str()),
        }
    }

    named.then_some(rebuilt)
}

fn has_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| !ext.is_empty())
}
