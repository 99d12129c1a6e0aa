//! Display table and file exports.
//!
//! Both exporters consume the same [`ShortfallTable`]: the record rows
//! followed by one total row whose `Bulan` is `Total`.

mod document;
mod spreadsheet;
mod table;

pub use document::{DOCUMENT_FILE_NAME, DOCUMENT_TITLE, to_markdown};
pub use spreadsheet::{CSV_FILE_NAME, to_csv};
pub use table::{ShortfallTable, TABLE_HEADERS, TOTAL_LABEL, TableRow};
