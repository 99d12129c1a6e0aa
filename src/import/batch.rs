//! Raw import batches.
//!
//! An [`ImportBatch`] is the typed boundary between a tabular source and the
//! validator. Cells are kept as text; nothing is interpreted until
//! validation.

use std::io;

use serde_json::{Map, Value};

use crate::error::{EngineError, EngineResult};

/// Column holding the employee name.
pub const COLUMN_NAME: &str = "Nama";
/// Column holding the year.
pub const COLUMN_YEAR: &str = "Tahun";
/// Column holding the month name.
pub const COLUMN_MONTH: &str = "Bulan";
/// Column holding the reported wage.
pub const COLUMN_WAGE: &str = "Upah";

/// Columns every import must provide, in report order.
pub const REQUIRED_COLUMNS: [&str; 4] = [COLUMN_NAME, COLUMN_YEAR, COLUMN_MONTH, COLUMN_WAGE];

/// One imported row. `None` marks a missing cell; a whitespace-only cell
/// counts as blank too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// `Nama` cell.
    pub name: Option<String>,
    /// `Tahun` cell.
    pub year: Option<String>,
    /// `Bulan` cell.
    pub month: Option<String>,
    /// `Upah` cell.
    pub wage: Option<String>,
}

impl RawRow {
    /// Returns true if any required cell is missing or whitespace only.
    pub fn has_blank(&self) -> bool {
        [&self.name, &self.year, &self.month, &self.wage]
            .into_iter()
            .any(|cell| filled(cell).is_none())
    }

    /// Returns the `Nama` cell unless it is blank.
    pub fn name_text(&self) -> Option<&str> {
        filled(&self.name)
    }

    /// Returns the trimmed `Tahun` cell unless it is blank.
    pub fn year_text(&self) -> Option<&str> {
        filled(&self.year).map(str::trim)
    }

    /// Returns the trimmed `Bulan` cell unless it is blank.
    pub fn month_text(&self) -> Option<&str> {
        filled(&self.month).map(str::trim)
    }

    /// Returns the `Upah` cell unless it is blank.
    pub fn wage_text(&self) -> Option<&str> {
        filled(&self.wage)
    }

    fn set(&mut self, column: &str, cell: Option<String>) {
        match column {
            COLUMN_NAME => self.name = cell,
            COLUMN_YEAR => self.year = cell,
            COLUMN_MONTH => self.month = cell,
            COLUMN_WAGE => self.wage = cell,
            _ => {}
        }
    }
}

/// A batch of rows from a tabular source, with the columns it declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    columns: Vec<String>,
    rows: Vec<RawRow>,
}

impl ImportBatch {
    /// Creates a batch from already extracted columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { columns, rows }
    }

    /// Builds a batch from JSON objects keyed by column name.
    ///
    /// The batch's columns are every key seen in any row. Strings, numbers
    /// and booleans become cell text; `null`, blank strings and absent keys
    /// become blank cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_shortfall::import::ImportBatch;
    /// use serde_json::json;
    ///
    /// let rows = vec![json!({"Nama": "Budi", "Tahun": 2023, "Bulan": "Mei", "Upah": 4000000})];
    /// let rows: Vec<_> = rows.into_iter().filter_map(|v| v.as_object().cloned()).collect();
    /// let batch = ImportBatch::from_json_rows(&rows);
    /// assert_eq!(batch.rows()[0].year.as_deref(), Some("2023"));
    /// ```
    pub fn from_json_rows(rows: &[Map<String, Value>]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut raw_rows = Vec::with_capacity(rows.len());

        for object in rows {
            let mut row = RawRow::default();
            for (key, value) in object {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
                row.set(key, cell_text(value));
            }
            raw_rows.push(row);
        }

        Self::new(columns, raw_rows)
    }

    /// Reads a batch from CSV with a header row.
    ///
    /// Cells are trimmed. Rows shorter than the header leave the remaining
    /// cells blank.
    ///
    /// # Errors
    ///
    /// Returns `ImportRead` if the CSV cannot be parsed.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> EngineResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()
            .map_err(read_error)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(read_error)?;
            let mut row = RawRow::default();
            for (column, field) in columns.iter().zip(record.iter()) {
                row.set(column, non_blank(field));
            }
            rows.push(row);
        }

        Ok(Self::new(columns, rows))
    }

    /// Returns the columns the source declared.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the source declared `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Returns the imported rows.
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn read_error(error: csv::Error) -> EngineError {
    EngineError::ImportRead {
        message: error.to_string(),
    }
}

fn filled(cell: &Option<String>) -> Option<&str> {
    cell.as_deref().filter(|text| !text.trim().is_empty())
}

fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Spreadsheet readers hand whole numbers back as floats; render those
/// without the trailing `.0` so `2023.0` still reads as a year.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
