//! Manual-entry calculation path.

use tracing::info;

use crate::config::ReferenceTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{MAX_MANUAL_ENTRIES, ManualEntry, ShortfallSummary, WageRecord};

use super::shortfall::compute_batch;

/// Computes shortfalls for manually entered rows.
///
/// Each entry is resolved to a legal record first. Unlike the import path,
/// duplicate rows are not an error here: later duplicates are dropped
/// silently by [`compute_batch`].
///
/// # Errors
///
/// - `InvalidEntryCount` if there are no entries or more than
///   [`MAX_MANUAL_ENTRIES`].
/// - `UnknownYear` if an entry names a year outside the table.
pub fn compute_manual(
    entries: &[ManualEntry],
    table: &ReferenceTable,
) -> EngineResult<ShortfallSummary> {
    if entries.is_empty() || entries.len() > MAX_MANUAL_ENTRIES {
        return Err(EngineError::InvalidEntryCount {
            count: entries.len(),
            max: MAX_MANUAL_ENTRIES,
        });
    }

    let records = entries
        .iter()
        .map(|entry| entry.resolve(table))
        .collect::<EngineResult<Vec<WageRecord>>>()?;

    let summary = compute_batch(records, table)?;
    info!(
        entries = entries.len(),
        results = summary.results.len(),
        total_deficit = summary.total_deficit,
        "Computed manual entries"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    fn table() -> ReferenceTable {
        ReferenceTable::jakarta()
    }

    #[test]
    fn test_empty_entries_rejected() {
        match compute_manual(&[], &table()) {
            Err(EngineError::InvalidEntryCount { count, max }) => {
                assert_eq!(count, 0);
                assert_eq!(max, 200);
            }
            other => panic!("Expected InvalidEntryCount, got {:?}", other),
        }
    }

    #[test]
    fn test_too_many_entries_rejected() {
        let entries = vec![ManualEntry::default(); MAX_MANUAL_ENTRIES + 1];
        assert!(matches!(
            compute_manual(&entries, &table()),
            Err(EngineError::InvalidEntryCount { count: 201, .. })
        ));
    }

    #[test]
    fn test_maximum_entries_accepted() {
        let entries: Vec<ManualEntry> = (0..MAX_MANUAL_ENTRIES)
            .map(|i| ManualEntry::new(format!("E{}", i), 2023, "Januari", "4.000.000"))
            .collect();
        let summary = compute_manual(&entries, &table()).unwrap();
        assert_eq!(summary.results.len(), MAX_MANUAL_ENTRIES);
        assert_eq!(summary.total_deficit, -901_798 * MAX_MANUAL_ENTRIES as i64);
    }

    #[test]
    fn test_duplicates_silently_dropped() {
        let entries = vec![
            ManualEntry::new("Budi", 2023, "Januari", "4.000.000"),
            ManualEntry::new("BUDI", 2023, "Januari", "1.000.000"),
        ];
        let summary = compute_manual(&entries, &table()).unwrap();
        assert_eq!(summary.results.len(), 1);
        assert_eq!(summary.total_deficit, -901_798);
    }

    #[test]
    fn test_entries_coerced_to_same_month_are_duplicates() {
        // both resolve to September 2011
        let entries = vec![
            ManualEntry::new("Budi", 2011, "Januari", "1.000.000"),
            ManualEntry::new("Budi", 2011, "September", "1.200.000"),
        ];
        let summary = compute_manual(&entries, &table()).unwrap();
        assert_eq!(summary.results.len(), 1);
        assert_eq!(summary.results[0].month, Month::September);
        assert_eq!(summary.results[0].reported_wage, Some(1_000_000));
    }

    #[test]
    fn test_blank_entries_are_placeholders() {
        let summary = compute_manual(&[ManualEntry::default()], &table()).unwrap();
        assert_eq!(summary.results.len(), 1);
        assert!(summary.results[0].is_placeholder());
        assert_eq!(summary.total_deficit, 0);
    }
}
