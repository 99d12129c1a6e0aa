//! Tabular import of wage records.
//!
//! Imports are strict: a batch with any problem is rejected as a whole,
//! including duplicate rows. The manual-entry path instead drops later
//! duplicates silently (see [`crate::calculation::compute_manual`]).

mod batch;
mod validator;

pub use batch::{
    COLUMN_MONTH, COLUMN_NAME, COLUMN_WAGE, COLUMN_YEAR, ImportBatch, REQUIRED_COLUMNS, RawRow,
};
pub use validator::{ValidationOutcome, validate};

use tracing::{info, warn};

use crate::calculation::compute_batch;
use crate::config::ReferenceTable;
use crate::error::EngineResult;
use crate::models::ShortfallSummary;

/// Validates an import batch and computes its shortfalls.
///
/// # Errors
///
/// Returns `ImportRejected` carrying every validation problem if the batch
/// is not clean.
pub fn import_records(batch: &ImportBatch, table: &ReferenceTable) -> EngineResult<ShortfallSummary> {
    let outcome = validate(batch, table);
    if !outcome.is_valid() {
        warn!(
            rows = batch.len(),
            problems = outcome.errors.len(),
            "Import rejected"
        );
    }

    let records = outcome.into_result()?;
    let summary = compute_batch(records, table)?;
    info!(
        rows = batch.len(),
        total_deficit = summary.total_deficit,
        "Imported wage records"
    );
    Ok(summary)
}
