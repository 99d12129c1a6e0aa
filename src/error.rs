//! Error types for the wage shortfall engine.
//!
//! Import problems are collected as [`ImportError`] values so that a user
//! sees every problem with a file at once. Everything else surfaces as an
//! [`EngineError`].

use thiserror::Error;

/// A single problem found while validating an import batch.
///
/// The messages are shown to payroll staff as-is, so they are written in
/// Indonesian like the column names they refer to.
///
/// # Example
///
/// ```
/// use wage_shortfall::error::ImportError;
///
/// let error = ImportError::MissingColumn {
///     column: "Upah".to_string(),
/// };
/// assert_eq!(error.to_string(), "Kolom 'Upah' tidak ditemukan.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// A required column is absent from the batch.
    #[error("Kolom '{column}' tidak ditemukan.")]
    MissingColumn {
        /// The name of the missing column.
        column: String,
    },

    /// One or more rows reference a year outside the reference table.
    #[error("Salah Tahun: {}", values.join(", "))]
    InvalidYear {
        /// The distinct offending values, in first-seen order.
        values: Vec<String>,
    },

    /// One or more rows reference an unknown month name.
    #[error("Salah Bulan: {}", values.join(", "))]
    InvalidMonth {
        /// The distinct offending values, in first-seen order.
        values: Vec<String>,
    },

    /// At least one required cell is blank.
    #[error("Ada nilai kosong.")]
    EmptyValue,

    /// At least two rows share the same identity key.
    #[error("Ada data duplikat pada file.")]
    DuplicateRecord,
}

impl ImportError {
    /// Returns a stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ImportError::MissingColumn { .. } => "MISSING_COLUMN",
            ImportError::InvalidYear { .. } => "INVALID_YEAR",
            ImportError::InvalidMonth { .. } => "INVALID_MONTH",
            ImportError::EmptyValue => "EMPTY_VALUE",
            ImportError::DuplicateRecord => "DUPLICATE_RECORD",
        }
    }
}

/// The main error type for the wage shortfall engine.
///
/// # Example
///
/// ```
/// use wage_shortfall::error::EngineError;
///
/// let error = EngineError::UnknownYear { year: 1999 };
/// assert_eq!(error.to_string(), "No minimum wage defined for year 1999");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Reference table file was not found at the specified path.
    #[error("Reference table not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Reference table file could not be parsed.
    #[error("Failed to parse reference table '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Reference table parsed but is internally inconsistent.
    #[error("Invalid reference table: {message}")]
    InvalidReference {
        /// What is wrong with the table.
        message: String,
    },

    /// A record reached the calculator with a year absent from the table.
    #[error("No minimum wage defined for year {year}")]
    UnknownYear {
        /// The year that was looked up.
        year: i32,
    },

    /// An import batch failed validation.
    #[error("Import rejected with {} problem(s)", errors.len())]
    ImportRejected {
        /// Every problem found in the batch.
        errors: Vec<ImportError>,
    },

    /// A tabular source could not be read.
    #[error("Failed to read import data: {message}")]
    ImportRead {
        /// A description of the read error.
        message: String,
    },

    /// A manual entry list was empty or too long.
    #[error("Expected between 1 and {max} entries, got {count}")]
    InvalidEntryCount {
        /// The number of entries supplied.
        count: usize,
        /// The maximum number of entries accepted.
        max: usize,
    },

    /// A table could not be rendered for export.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the export error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
