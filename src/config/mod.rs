//! Shift catalog configuration for the OEE engine.
//!
//! The shift catalog is reference data the resolver receives as an explicit
//! parameter — never a compiled-in table. This module loads it from a YAML
//! file and validates it.
//!
//! # Example
//!
//! ```no_run
//! use oee_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/shifts.yaml").unwrap();
//! println!("Loaded {} shifts", config.catalog().shifts().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ShiftCatalog;
