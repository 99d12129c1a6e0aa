//! Minimum wage reference data.
//!
//! This module provides the UMP reference table, either built in or loaded
//! once from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use wage_shortfall::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/jakarta.yaml").unwrap();
//! println!("Region: {}", loader.table().region());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_YEAR, ReferenceFile, ReferenceTable};
