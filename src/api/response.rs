//! Response types for the wage shortfall API.
//!
//! This module defines the success bodies and the error response structure,
//! together with the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::format_with_dots;
use crate::config::ReferenceTable;
use crate::error::{EngineError, ImportError};
use crate::export::ShortfallTable;
use crate::models::{Month, ShortfallResult, ShortfallSummary};

/// Body returned by `POST /import` and `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// One result per deduplicated record.
    pub results: Vec<ShortfallResult>,
    /// Aggregate shortfall; never positive.
    pub total_deficit: i64,
    /// Aggregate shortfall formatted for display.
    pub total_deficit_display: String,
    /// The display table, including the total row.
    pub table: ShortfallTable,
}

impl CalculationResponse {
    /// Wraps a computed summary.
    pub fn from_summary(summary: ShortfallSummary) -> Self {
        let table = ShortfallTable::from_summary(&summary);
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            total_deficit_display: summary.display_total(),
            total_deficit: summary.total_deficit,
            results: summary.results,
            table,
        }
    }
}

/// One year of reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceYear {
    /// The year.
    pub year: i32,
    /// UMP in whole rupiah.
    pub minimum_wage: i64,
    /// UMP formatted for display.
    pub minimum_wage_display: String,
    /// Months that may be entered for this year.
    pub months: Vec<Month>,
}

/// Body returned by `GET /reference`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceResponse {
    /// Region the table applies to.
    pub region: String,
    /// Year a blank manual entry starts on.
    pub default_year: i32,
    /// Every year in the table, ascending.
    pub years: Vec<ReferenceYear>,
}

impl From<&ReferenceTable> for ReferenceResponse {
    fn from(table: &ReferenceTable) -> Self {
        let years = table
            .years()
            .filter_map(|year| {
                table.minimum_wage(year).ok().map(|minimum_wage| ReferenceYear {
                    year,
                    minimum_wage,
                    minimum_wage_display: format_with_dots(minimum_wage),
                    months: table.valid_months(year),
                })
            })
            .collect();

        Self {
            region: table.region().to_string(),
            default_year: table.default_year(),
            years,
        }
    }
}

/// A single import problem in an error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportProblem {
    /// Machine-readable problem code.
    pub code: String,
    /// Message to show the user.
    pub message: String,
}

impl From<&ImportError> for ImportProblem {
    fn from(error: &ImportError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Every problem found in a rejected import.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ImportProblem>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            errors: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an import rejection listing every problem.
    pub fn import_rejected(errors: &[ImportError]) -> Self {
        Self {
            errors: errors.iter().map(ImportProblem::from).collect(),
            ..Self::new("IMPORT_REJECTED", "File memiliki masalah")
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidReference { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Reference table error", message),
            },
            EngineError::UnknownYear { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_YEAR",
                    message,
                    "Choose a year listed by GET /reference",
                ),
            },
            EngineError::ImportRejected { errors } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::import_rejected(&errors),
            },
            EngineError::ImportRead { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details("IMPORT_READ_ERROR", "Tidak bisa membaca file", message),
            },
            EngineError::InvalidEntryCount { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_ENTRY_COUNT", message),
            },
            EngineError::Export { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
        assert!(!json.contains("errors"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_import_rejected_lists_problems() {
        let engine_error = EngineError::ImportRejected {
            errors: vec![
                ImportError::InvalidYear {
                    values: vec!["1999".to_string()],
                },
                ImportError::EmptyValue,
            ],
        };
        let response: ApiErrorResponse = engine_error.into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "IMPORT_REJECTED");
        assert_eq!(response.error.errors.len(), 2);
        assert_eq!(response.error.errors[0].code, "INVALID_YEAR");
        assert_eq!(response.error.errors[0].message, "Salah Tahun: 1999");
    }

    #[test]
    fn test_unknown_year_is_bad_request() {
        let response: ApiErrorResponse = EngineError::UnknownYear { year: 1990 }.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "UNKNOWN_YEAR");
    }

    #[test]
    fn test_reference_response_from_table() {
        let response = ReferenceResponse::from(&ReferenceTable::jakarta());
        assert_eq!(response.default_year, 2023);
        assert_eq!(response.years.len(), 15);
        assert_eq!(response.years[0].year, 2011);
        assert_eq!(response.years[0].months.len(), 4);
        assert_eq!(response.years[0].minimum_wage_display, "1.290.000");
    }

    #[test]
    fn test_calculation_response_carries_table() {
        let response = CalculationResponse::from_summary(ShortfallSummary::default());
        assert_eq!(response.total_deficit_display, "0");
        assert_eq!(response.table.total_row().bulan, "Total");
        assert_eq!(response.engine_version, env!("CARGO_PKG_VERSION"));
    }
}
