//! jsonfile - locate JSON documents on disk and deserialize them
//!
//! A [`JsonFileLoader`] owns an absolute base directory. Each call turns an
//! optional identifier into a file path and decodes that file as a single
//! value or as an array of values.
//!
//! ## Name Resolution
//!
//! - No identifier (or a blank one) means the simple name of the target type,
//!   so `load::<TestClass>(None)` reads `<base>/TestClass.json`
//! - Leading and trailing `/` or `\` are stripped, so `"\data\"` and `"data"`
//!   resolve to the same file
//! - An existing extension is kept; otherwise `.json` is appended once
//! - A host-absolute identifier bypasses the base path entirely
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jsonfile_core::{JsonFileLoader, LoaderResult};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Fixture {
//!     id: u32,
//! }
//!
//! fn run() -> LoaderResult<()> {
//!     let loader = JsonFileLoader::with_base_path("tests/data")?;
//!     let all: Vec<Fixture> = loader.load_many(Some("fixtures"))?;
//!     println!("{} fixtures", all.len());
//!     Ok(())
//! }
//! ```
//!
//! Copyright (c) 2025 jsonfile contributors
//! Licensed under the Apache-2.0 license

pub mod loader;

// Re-export commonly used types for convenience
pub use loader::{
    simple_type_name, DocumentLoader, JsonFileLoader, LoaderConfig, LoaderError, LoaderResult,
    NameResolver,
};
