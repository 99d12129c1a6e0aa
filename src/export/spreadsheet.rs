//! CSV spreadsheet export.

use csv::WriterBuilder;

use crate::error::{EngineError, EngineResult};

use super::table::{ShortfallTable, TABLE_HEADERS};

/// Suggested download name for the spreadsheet export.
pub const CSV_FILE_NAME: &str = "Kekurangan_Upah.csv";

/// Renders the table as CSV: a header row, one row per record, then the
/// total row.
///
/// # Examples
///
/// ```
/// use wage_shortfall::export::{ShortfallTable, to_csv};
/// use wage_shortfall::models::ShortfallSummary;
///
/// let csv = to_csv(&ShortfallTable::from_summary(&ShortfallSummary::default())).unwrap();
/// assert_eq!(csv, "Nama,Tahun,Bulan,Upah,UMP,Selisih\n,,Total,,,0\n");
/// ```
pub fn to_csv(table: &ShortfallTable) -> EngineResult<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(TABLE_HEADERS).map_err(export_error)?;
    for row in table.rows() {
        writer.write_record(row.cells()).map_err(export_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| EngineError::Export {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::Export {
        message: e.to_string(),
    })
}

fn export_error(error: csv::Error) -> EngineError {
    EngineError::Export {
        message: error.to_string(),
    }
}
