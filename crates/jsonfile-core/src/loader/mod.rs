//! JSON file loading
//!
//! This module provides:
//! - Name resolution from a type name or an explicit identifier
//! - Base path configuration with environment overrides
//! - Typed single-value and array loading through `serde_json`
//! - A distinct error for every failure mode
//!
//! # Example Usage
//!
//! ```no_run
//! use jsonfile_core::loader::JsonFileLoader;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Settings {
//!     name: String,
//! }
//!
//! let loader = JsonFileLoader::with_base_path("config")?;
//! // reads config/Settings.json
//! let settings: Settings = loader.load(None)?;
//! println!("Loaded settings: {}", settings.name);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 jsonfile contributors
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod error;
pub mod json_loader;
pub mod resolver;

pub use config::LoaderConfig;
pub use error::{LoaderError, LoaderResult};
pub use json_loader::{DocumentLoader, JsonFileLoader};
pub use resolver::{simple_type_name, NameResolver};
