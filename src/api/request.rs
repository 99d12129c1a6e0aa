//! Request types for the wage shortfall API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::import::ImportBatch;
use crate::models::ManualEntry;

/// Request body for `POST /import`.
///
/// Each row is an object keyed by column name, as a spreadsheet reader
/// would produce: `{"Nama": "Budi", "Tahun": 2023, "Bulan": "Mei", "Upah": "4.000.000"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// The imported rows.
    pub rows: Vec<Map<String, Value>>,
}

impl ImportRequest {
    /// Converts the rows into an import batch.
    pub fn to_batch(&self) -> ImportBatch {
        ImportBatch::from_json_rows(&self.rows)
    }
}

/// Request body for `POST /calculate` and the export endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The manually entered rows.
    pub entries: Vec<ManualEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_import_request() {
        let json = r#"{
            "rows": [
                {"Nama": "Budi", "Tahun": 2023, "Bulan": "Mei", "Upah": "4.000.000"},
                {"Nama": "Siti", "Tahun": 2024, "Bulan": "Juni", "Upah": 5000000}
            ]
        }"#;

        let request: ImportRequest = serde_json::from_str(json).unwrap();
        let batch = request.to_batch();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.rows()[1].wage.as_deref(), Some("5000000"));
    }

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "entries": [
                {"name": "Budi", "year": 2023, "month": "Mei", "wage": "4.000.000"},
                {}
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.entries.len(), 2);
        assert_eq!(request.entries[1], ManualEntry::default());
    }

    #[test]
    fn test_calculation_request_requires_entries() {
        let result: Result<CalculationRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
