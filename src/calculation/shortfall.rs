//! Shortfall calculation.
//!
//! This module compares reported wages with the UMP for their year. A wage
//! above the UMP is not a surplus: the shortfall is clamped to zero.

use tracing::debug;

use crate::config::ReferenceTable;
use crate::error::EngineResult;
use crate::models::{ShortfallResult, ShortfallSummary, WageRecord};

use super::dedupe::dedupe;
use super::number_format::sanitize;

/// Computes the shortfall for a single record.
///
/// A wage that sanitizes to 0 (blank, non-numeric or literally zero) yields
/// a placeholder result with no reported wage and a deficit of 0. Otherwise
/// the deficit is `min(0, wage - UMP)`.
///
/// # Errors
///
/// Returns `UnknownYear` if the record's year is not in `table`. Validated
/// imports and resolved manual entries never hit this.
///
/// # Examples
///
/// ```
/// use wage_shortfall::calculation::compute_one;
/// use wage_shortfall::config::ReferenceTable;
/// use wage_shortfall::models::{Month, WageRecord};
///
/// let table = ReferenceTable::jakarta();
/// let record = WageRecord::new("A", 2023, Month::Januari, "4000000");
/// let result = compute_one(&record, &table).unwrap();
/// assert_eq!(result.deficit, -901_798);
/// ```
pub fn compute_one(record: &WageRecord, table: &ReferenceTable) -> EngineResult<ShortfallResult> {
    let minimum_wage = table.minimum_wage(record.year)?;
    let wage = sanitize(&record.reported_wage);

    if wage == 0 {
        return Ok(ShortfallResult {
            name: record.name.clone(),
            year: record.year,
            month: record.month,
            reported_wage: None,
            minimum_wage,
            deficit: 0,
        });
    }

    let deficit = wage.saturating_sub(minimum_wage).min(0);

    Ok(ShortfallResult {
        name: record.name.clone(),
        year: record.year,
        month: record.month,
        reported_wage: Some(wage),
        minimum_wage,
        deficit,
    })
}

/// Computes shortfalls for a batch of records.
///
/// Records are deduplicated first (first occurrence per identity key wins)
/// and then computed independently. The total is the sum of every deficit,
/// so it is never positive.
///
/// # Examples
///
/// ```
/// use wage_shortfall::calculation::compute_batch;
/// use wage_shortfall::config::ReferenceTable;
/// use wage_shortfall::models::{Month, WageRecord};
///
/// let table = ReferenceTable::jakarta();
/// let records = vec![
///     WageRecord::new("A", 2023, Month::Januari, "4.000.000"),
///     WageRecord::new("B", 2023, Month::Januari, "4.900.000"),
/// ];
/// let summary = compute_batch(records, &table).unwrap();
/// assert_eq!(summary.total_deficit, -901_798 - 1_798);
/// ```
pub fn compute_batch(
    records: Vec<WageRecord>,
    table: &ReferenceTable,
) -> EngineResult<ShortfallSummary> {
    let results = dedupe(records)
        .iter()
        .map(|record| compute_one(record, table))
        .collect::<EngineResult<Vec<_>>>()?;

    let total_deficit = results
        .iter()
        .fold(0i64, |acc, r| acc.saturating_add(r.deficit));

    debug!(
        records = results.len(),
        total_deficit, "Computed shortfall batch"
    );

    Ok(ShortfallSummary {
        results,
        total_deficit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::Month;
    use proptest::prelude::*;

    fn table() -> ReferenceTable {
        ReferenceTable::jakarta()
    }

    fn record(name: &str, year: i32, month: Month, wage: &str) -> WageRecord {
        WageRecord::new(name, year, month, wage)
    }

    #[test]
    fn test_zero_wage_is_placeholder() {
        let result = compute_one(&record("A", 2023, Month::Januari, "0"), &table()).unwrap();
        assert!(result.is_placeholder());
        assert_eq!(result.deficit, 0);
        assert_eq!(result.minimum_wage, 4_901_798);
        assert_eq!(result.display_wage(), "-");
        assert_eq!(result.display_deficit(), "-");
    }

    #[test]
    fn test_blank_and_text_wage_are_placeholders() {
        for wage in ["", "abc", "Rp -"] {
            let result = compute_one(&record("A", 2023, Month::Januari, wage), &table()).unwrap();
            assert!(result.is_placeholder(), "wage {:?} should be a placeholder", wage);
        }
    }

    #[test]
    fn test_underpaid_wage_reports_shortfall() {
        let result =
            compute_one(&record("A", 2023, Month::Januari, "4000000"), &table()).unwrap();
        assert_eq!(result.reported_wage, Some(4_000_000));
        assert_eq!(result.deficit, -901_798);
        assert_eq!(result.display_deficit(), "-901.798");
        assert_eq!(result.display_wage(), "4.000.000");
        assert_eq!(result.display_minimum_wage(), "4.901.798");
    }

    #[test]
    fn test_overpaid_wage_is_clamped_to_zero() {
        let result =
            compute_one(&record("A", 2023, Month::Januari, "9999999"), &table()).unwrap();
        assert_eq!(result.deficit, 0);
        assert_eq!(result.display_deficit(), "0");
    }

    #[test]
    fn test_exact_minimum_wage_is_compliant() {
        let result =
            compute_one(&record("A", 2023, Month::Januari, "4.901.798"), &table()).unwrap();
        assert_eq!(result.deficit, 0);
        assert!(!result.is_placeholder());
    }

    #[test]
    fn test_formatted_wage_is_sanitized() {
        let result =
            compute_one(&record("A", 2011, Month::Oktober, "Rp 1.000.000"), &table()).unwrap();
        assert_eq!(result.deficit, -290_000);
    }

    #[test]
    fn test_unknown_year_returns_error() {
        match compute_one(&record("A", 1999, Month::Januari, "1"), &table()) {
            Err(EngineError::UnknownYear { year }) => assert_eq!(year, 1999),
            other => panic!("Expected UnknownYear, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_total_sums_deficits() {
        let summary = compute_batch(
            vec![
                record("A", 2023, Month::Januari, "4.000.000"),
                record("B", 2023, Month::Januari, "9.999.999"),
                record("C", 2023, Month::Januari, ""),
                record("D", 2024, Month::Juni, "5.000.000"),
            ],
            &table(),
        )
        .unwrap();

        assert_eq!(summary.results.len(), 4);
        assert_eq!(summary.total_deficit, -901_798 - 67_381);
        assert_eq!(summary.placeholder_count(), 1);
    }

    #[test]
    fn test_batch_drops_later_duplicates() {
        let summary = compute_batch(
            vec![
                record("A", 2023, Month::Januari, "4.000.000"),
                record("a", 2023, Month::Januari, "1.000.000"),
            ],
            &table(),
        )
        .unwrap();

        assert_eq!(summary.results.len(), 1);
        assert_eq!(summary.results[0].reported_wage, Some(4_000_000));
        assert_eq!(summary.total_deficit, -901_798);
    }

    #[test]
    fn test_empty_batch() {
        let summary = compute_batch(vec![], &table()).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.total_deficit, 0);
    }

    #[test]
    fn test_batch_fails_on_unknown_year() {
        let result = compute_batch(
            vec![
                record("A", 2023, Month::Januari, "1"),
                record("B", 2040, Month::Januari, "1"),
            ],
            &table(),
        );
        assert!(matches!(result, Err(EngineError::UnknownYear { year: 2040 })));
    }

    proptest! {
        #[test]
        fn prop_deficit_never_positive(wage in 0i64..20_000_000, year in 2011i32..=2025) {
            let result = compute_one(
                &record("P", year, Month::Desember, &wage.to_string()),
                &table(),
            ).unwrap();
            prop_assert!(result.deficit <= 0);
        }

        #[test]
        fn prop_batch_total_matches_sum(wages in proptest::collection::vec(0i64..10_000_000, 0..50)) {
            let records: Vec<WageRecord> = wages
                .iter()
                .enumerate()
                .map(|(i, w)| record(&format!("E{}", i), 2023, Month::Mei, &w.to_string()))
                .collect();
            let summary = compute_batch(records, &table()).unwrap();
            let expected: i64 = summary
                .results
                .iter()
                .filter(|r| !r.is_placeholder())
                .map(|r| r.deficit)
                .sum();
            prop_assert_eq!(summary.total_deficit, expected);
            prop_assert!(summary.total_deficit <= 0);
        }
    }
}
