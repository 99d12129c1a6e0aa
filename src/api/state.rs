//! Application state for the wage shortfall API.
//!
//! The only shared resource is the reference table, which is read-only.

use std::sync::Arc;

use crate::config::ReferenceTable;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The minimum wage reference table.
    table: Arc<ReferenceTable>,
}

impl AppState {
    /// Creates a new application state around a reference table.
    pub fn new(table: ReferenceTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns the reference table.
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ReferenceTable::jakarta())
    }
}
