//! Reference table loading.
//!
//! This module provides the [`ConfigLoader`] type for loading the minimum
//! wage reference table from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{ReferenceFile, ReferenceTable};

/// Loads and holds the minimum wage reference table.
///
/// The table is read once; nothing reloads it while the process runs.
///
/// # Example
///
/// ```no_run
/// use wage_shortfall::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/jakarta.yaml")?;
/// println!("UMP 2024: {}", loader.table().minimum_wage(2024)?);
/// # Ok::<(), wage_shortfall::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: ReferenceTable,
}

impl ConfigLoader {
    /// Loads the reference table from a YAML file.
    ///
    /// Returns an error if the file is missing (`ConfigNotFound`), is not
    /// valid YAML for a reference file (`ConfigParseError`), or describes an
    /// inconsistent table (`InvalidReference`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: ReferenceFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let table = ReferenceTable::from_file(file)?;
        info!(
            path = %path_str,
            region = table.region(),
            years = table.years().count(),
            "Loaded reference table"
        );

        Ok(Self { table })
    }

    /// Uses the built-in DKI Jakarta table.
    pub fn builtin() -> Self {
        Self {
            table: ReferenceTable::jakarta(),
        }
    }

    /// Returns the loaded reference table.
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Consumes the loader, returning the table.
    pub fn into_table(self) -> ReferenceTable {
        self.table
    }
}
