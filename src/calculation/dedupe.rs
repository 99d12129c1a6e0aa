//! Duplicate removal for wage records.

use std::collections::HashSet;

use tracing::debug;

use crate::models::WageRecord;

/// Keeps the first record for each identity key, preserving input order.
///
/// Later records with the same (name, year, month) are discarded regardless
/// of their wage. This is the manual-entry behaviour; imports reject
/// duplicates outright before reaching this point.
///
/// # Examples
///
/// ```
/// use wage_shortfall::calculation::dedupe;
/// use wage_shortfall::models::{Month, WageRecord};
///
/// let records = vec![
///     WageRecord::new("Budi", 2023, Month::Mei, "1.000.000"),
///     WageRecord::new("budi", 2023, Month::Mei, "9.000.000"),
/// ];
/// let kept = dedupe(records);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].reported_wage, "1.000.000");
/// ```
pub fn dedupe(records: Vec<WageRecord>) -> Vec<WageRecord> {
    let before = records.len();
    let mut seen = HashSet::with_capacity(before);
    let kept: Vec<WageRecord> = records
        .into_iter()
        .filter(|record| seen.insert(record.identity_key()))
        .collect();

    if kept.len() < before {
        debug!(
            dropped = before - kept.len(),
            kept = kept.len(),
            "Dropped duplicate wage records"
        );
    }
    kept
}
