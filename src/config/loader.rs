//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shift
//! catalog from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ShiftCatalog;

/// Loads and provides access to the shift catalog.
///
/// # File Format
///
/// ```text
/// # config/shifts.yaml
/// shifts:
///   - id: 1
///     name: "A"
///     start_time: "06:00:00"
///     end_time: "14:00:00"
///   - id: 3
///     name: "C"
///     start_time: "22:00:00"
///     end_time: "06:00:00"   # end before start: spans midnight
/// ```
///
/// # Example
///
/// ```no_run
/// use oee_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/shifts.yaml").unwrap();
/// for shift in loader.catalog().shifts() {
///     println!("{}: {}–{}", shift.name, shift.start_time, shift.end_time);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: ShiftCatalog,
}

impl ConfigLoader {
    /// Loads the shift catalog from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be read,
    /// [`EngineError::ConfigParseError`] when it is not valid YAML or fails
    /// catalog validation (zero-length shift, duplicate id).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let catalog: ShiftCatalog =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { catalog })
    }

    /// Wraps an already-validated catalog, for callers that construct one in
    /// code (e.g. [`ShiftCatalog::standard_three_shift`]).
    pub fn from_catalog(catalog: ShiftCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the loaded shift catalog.
    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }
}
