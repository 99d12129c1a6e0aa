//! Import batch validation.
//!
//! Every check runs and every problem is reported, so a user can fix a file
//! in one pass. The only short circuit is a missing column: without all four
//! columns the value checks are meaningless.

use std::collections::HashSet;

use tracing::debug;

use crate::config::ReferenceTable;
use crate::error::{EngineError, EngineResult, ImportError};
use crate::models::{Month, WageRecord, normalize_name};

use super::batch::{ImportBatch, REQUIRED_COLUMNS};

/// The result of validating an import batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Every problem found, in check order.
    pub errors: Vec<ImportError>,
    /// The cleaned records; present only when `errors` is empty.
    pub records: Option<Vec<WageRecord>>,
}

impl ValidationOutcome {
    /// Returns true if the batch can proceed to calculation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the outcome into the cleaned records or `ImportRejected`.
    pub fn into_result(self) -> EngineResult<Vec<WageRecord>> {
        match self.records {
            Some(records) if self.errors.is_empty() => Ok(records),
            _ => Err(EngineError::ImportRejected {
                errors: self.errors,
            }),
        }
    }

    fn rejected(errors: Vec<ImportError>) -> Self {
        Self {
            errors,
            records: None,
        }
    }
}

/// Validates an import batch against the reference table.
///
/// Checks, in order:
/// 1. each required column is present (one error per missing column; if any
///    is missing no further checks run);
/// 2. every year is in the table (one error listing distinct bad values);
/// 3. every month is one of the twelve month names (one error listing
///    distinct bad values);
/// 4. no required cell is blank (one generic error);
/// 5. no two rows share an identity key (one generic error).
///
/// Months are checked against the full twelve-name list here, not against
/// the year's restricted months.
///
/// # Examples
///
/// ```
/// use wage_shortfall::config::ReferenceTable;
/// use wage_shortfall::error::ImportError;
/// use wage_shortfall::import::{ImportBatch, RawRow, validate};
///
/// let columns = vec!["Nama".to_string(), "Tahun".to_string(), "Bulan".to_string()];
/// let batch = ImportBatch::new(columns, vec![RawRow::default()]);
/// let outcome = validate(&batch, &ReferenceTable::jakarta());
/// assert_eq!(
///     outcome.errors,
///     vec![ImportError::MissingColumn { column: "Upah".to_string() }]
/// );
/// assert!(outcome.records.is_none());
/// ```
pub fn validate(batch: &ImportBatch, table: &ReferenceTable) -> ValidationOutcome {
    let missing: Vec<ImportError> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !batch.has_column(column))
        .map(|column| ImportError::MissingColumn {
            column: column.to_string(),
        })
        .collect();
    if !missing.is_empty() {
        debug!(missing = missing.len(), "Import batch missing columns");
        return ValidationOutcome::rejected(missing);
    }

    let mut invalid_years: Vec<String> = Vec::new();
    let mut invalid_months: Vec<String> = Vec::new();
    let mut has_blank = false;
    let mut has_duplicate = false;
    let mut seen_keys: HashSet<(String, String, String)> = HashSet::new();
    let mut records = Vec::with_capacity(batch.len());

    for row in batch.rows() {
        let year = row.year_text();
        let month = row.month_text();

        let parsed_year = year.and_then(|text| match parse_year(text) {
            Some(y) if table.contains_year(y) => Some(y),
            _ => {
                push_distinct(&mut invalid_years, text);
                None
            }
        });

        let parsed_month = month.and_then(|text| match text.parse::<Month>() {
            Ok(m) => Some(m),
            Err(_) => {
                push_distinct(&mut invalid_months, text);
                None
            }
        });

        has_blank |= row.has_blank();

        let key = (
            normalize_name(row.name_text().unwrap_or_default()),
            parsed_year.map_or_else(|| year.unwrap_or_default().to_string(), |y| y.to_string()),
            month.unwrap_or_default().to_string(),
        );
        has_duplicate |= !seen_keys.insert(key);

        if let (Some(name), Some(year), Some(month), Some(wage)) =
            (row.name_text(), parsed_year, parsed_month, row.wage_text())
        {
            records.push(WageRecord::new(name, year, month, wage));
        }
    }

    let mut errors = Vec::new();
    if !invalid_years.is_empty() {
        errors.push(ImportError::InvalidYear {
            values: invalid_years,
        });
    }
    if !invalid_months.is_empty() {
        errors.push(ImportError::InvalidMonth {
            values: invalid_months,
        });
    }
    if has_blank {
        errors.push(ImportError::EmptyValue);
    }
    if has_duplicate {
        errors.push(ImportError::DuplicateRecord);
    }

    if !errors.is_empty() {
        debug!(
            rows = batch.len(),
            problems = errors.len(),
            "Import batch failed validation"
        );
        return ValidationOutcome::rejected(errors);
    }

    ValidationOutcome {
        errors,
        records: Some(records),
    }
}

/// Reads a year written either as an integer or as a whole float.
fn parse_year(text: &str) -> Option<i32> {
    text.parse::<i32>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|f| f.fract() == 0.0 && *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
            .map(|f| f as i32)
    })
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::batch::RawRow;

    fn table() -> ReferenceTable {
        ReferenceTable::jakarta()
    }

    fn all_columns() -> Vec<String> {
        REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    fn row(name: &str, year: &str, month: &str, wage: &str) -> RawRow {
        let cell = |s: &str| (!s.is_empty()).then(|| s.to_string());
        RawRow {
            name: cell(name),
            year: cell(year),
            month: cell(month),
            wage: cell(wage),
        }
    }

    fn batch(rows: Vec<RawRow>) -> ImportBatch {
        ImportBatch::new(all_columns(), rows)
    }

    #[test]
    fn test_valid_batch_produces_records() {
        let outcome = validate(
            &batch(vec![
                row("Budi", "2023", "Januari", "4.000.000"),
                row("Siti", "2011", "Oktober", "1000000"),
            ]),
            &table(),
        );

        assert!(outcome.is_valid());
        assert_eq!(
            outcome.records,
            Some(vec![
                WageRecord::new("Budi", 2023, Month::Januari, "4.000.000"),
                WageRecord::new("Siti", 2011, Month::Oktober, "1000000"),
            ])
        );
    }

    #[test]
    fn test_missing_wage_column_is_single_error() {
        let columns = vec!["Nama".to_string(), "Tahun".to_string(), "Bulan".to_string()];
        let outcome = validate(
            &ImportBatch::new(columns, vec![row("Budi", "1999", "Jan", "")]),
            &table(),
        );

        assert_eq!(
            outcome.errors,
            vec![ImportError::MissingColumn {
                column: "Upah".to_string()
            }]
        );
        assert!(outcome.records.is_none());
    }

    #[test]
    fn test_every_missing_column_reported() {
        let outcome = validate(&ImportBatch::new(vec!["Nama".to_string()], vec![]), &table());
        let columns: Vec<String> = outcome
            .errors
            .iter()
            .map(|e| match e {
                ImportError::MissingColumn { column } => column.clone(),
                other => panic!("Expected MissingColumn, got {:?}", other),
            })
            .collect();
        assert_eq!(columns, vec!["Tahun", "Bulan", "Upah"]);
    }

    #[test]
    fn test_invalid_years_reported_once_with_distinct_values() {
        let outcome = validate(
            &batch(vec![
                row("A", "1999", "Januari", "1"),
                row("B", "1999", "Januari", "1"),
                row("C", "dua ribu", "Januari", "1"),
                row("D", "2023", "Januari", "1"),
            ]),
            &table(),
        );

        assert_eq!(
            outcome.errors,
            vec![ImportError::InvalidYear {
                values: vec!["1999".to_string(), "dua ribu".to_string()]
            }]
        );
        assert!(outcome.records.is_none());
    }

    #[test]
    fn test_invalid_months_use_global_list() {
        let outcome = validate(
            &batch(vec![
                row("A", "2011", "Januari", "1"),
                row("B", "2023", "Jan", "1"),
                row("C", "2023", "january", "1"),
                row("D", "2023", "Jan", "1"),
            ]),
            &table(),
        );

        // Januari 2011 passes here even though 2011 starts in September
        assert_eq!(
            outcome.errors,
            vec![ImportError::InvalidMonth {
                values: vec!["Jan".to_string(), "january".to_string()]
            }]
        );
    }

    #[test]
    fn test_blank_cell_reported_generically() {
        let outcome = validate(
            &batch(vec![
                row("A", "2023", "Januari", ""),
                row("", "2023", "Februari", "1"),
            ]),
            &table(),
        );
        assert_eq!(outcome.errors, vec![ImportError::EmptyValue]);
    }

    #[test]
    fn test_blank_year_is_not_an_invalid_year() {
        let outcome = validate(&batch(vec![row("A", "", "Januari", "1")]), &table());
        assert_eq!(outcome.errors, vec![ImportError::EmptyValue]);
    }

    #[test]
    fn test_whitespace_and_empty_cells_are_blank() {
        let rows = vec![RawRow {
            name: Some("   ".to_string()),
            year: Some("2023".to_string()),
            month: Some("Januari".to_string()),
            wage: Some(String::new()),
        }];
        let outcome = validate(&batch(rows), &table());

        assert_eq!(outcome.errors, vec![ImportError::EmptyValue]);
        assert!(outcome.records.is_none());
    }

    #[test]
    fn test_whitespace_year_is_blank_not_invalid() {
        let rows = vec![RawRow {
            year: Some("  ".to_string()),
            ..row("A", "", "Januari", "1")
        }];
        let outcome = validate(&batch(rows), &table());
        assert_eq!(outcome.errors, vec![ImportError::EmptyValue]);
    }

    #[test]
    fn test_duplicates_reported_generically() {
        let outcome = validate(
            &batch(vec![
                row("Budi", "2023", "Januari", "1"),
                row(" budi ", "2023", "Januari", "2"),
                row("Siti", "2023", "Januari", "3"),
            ]),
            &table(),
        );
        assert_eq!(outcome.errors, vec![ImportError::DuplicateRecord]);
        assert!(outcome.records.is_none());
    }

    #[test]
    fn test_float_year_matches_integer_year_for_duplicates() {
        let outcome = validate(
            &batch(vec![
                row("Budi", "2023", "Januari", "1"),
                row("Budi", "2023.0", "Januari", "2"),
            ]),
            &table(),
        );
        assert_eq!(outcome.errors, vec![ImportError::DuplicateRecord]);
    }

    #[test]
    fn test_all_value_errors_accumulate_in_order() {
        let outcome = validate(
            &batch(vec![
                row("A", "1999", "Jan", "1"),
                row("B", "2023", "Januari", ""),
                row("C", "2023", "Maret", "1"),
                row("c", "2023", "Maret", "2"),
            ]),
            &table(),
        );

        assert_eq!(
            outcome.errors,
            vec![
                ImportError::InvalidYear {
                    values: vec!["1999".to_string()]
                },
                ImportError::InvalidMonth {
                    values: vec!["Jan".to_string()]
                },
                ImportError::EmptyValue,
                ImportError::DuplicateRecord,
            ]
        );
    }

    #[test]
    fn test_empty_batch_with_columns_is_valid() {
        let outcome = validate(&batch(vec![]), &table());
        assert!(outcome.is_valid());
        assert_eq!(outcome.records, Some(vec![]));
    }

    #[test]
    fn test_into_result_rejects_with_errors() {
        let outcome = validate(&batch(vec![row("A", "1999", "Januari", "1")]), &table());
        match outcome.into_result() {
            Err(EngineError::ImportRejected { errors }) => assert_eq!(errors.len(), 1),
            other => panic!("Expected ImportRejected, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2023"), Some(2023));
        assert_eq!(parse_year("2023.0"), Some(2023));
        assert_eq!(parse_year("2023.5"), None);
        assert_eq!(parse_year("abc"), None);
    }
}
