//! The display and export table.

use serde::{Deserialize, Serialize};

use crate::models::ShortfallSummary;

/// Header row shared by every exporter.
pub const TABLE_HEADERS: [&str; 6] = ["Nama", "Tahun", "Bulan", "Upah", "UMP", "Selisih"];

/// `Bulan` value that marks the synthetic total row.
pub const TOTAL_LABEL: &str = "Total";

/// One displayed row. Every column is already formatted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Employee name.
    #[serde(rename = "Nama")]
    pub nama: String,
    /// Year.
    #[serde(rename = "Tahun")]
    pub tahun: String,
    /// Month, or `Total` on the total row.
    #[serde(rename = "Bulan")]
    pub bulan: String,
    /// Reported wage.
    #[serde(rename = "Upah")]
    pub upah: String,
    /// Minimum wage.
    #[serde(rename = "UMP")]
    pub ump: String,
    /// Shortfall.
    #[serde(rename = "Selisih")]
    pub selisih: String,
}

impl TableRow {
    /// Returns true for the synthetic total row.
    pub fn is_total(&self) -> bool {
        self.bulan == TOTAL_LABEL
    }

    /// The cells in header order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.nama.as_str(),
            self.tahun.as_str(),
            self.bulan.as_str(),
            self.upah.as_str(),
            self.ump.as_str(),
            self.selisih.as_str(),
        ]
    }
}

/// Computed results laid out for display, ending in a total row.
///
/// Serializes as one flat list of rows, the same shape the exporters write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<TableRow>", try_from = "Vec<TableRow>")]
pub struct ShortfallTable {
    rows: Vec<TableRow>,
    total: TableRow,
}

impl ShortfallTable {
    /// Builds the table for a summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_shortfall::calculation::compute_batch;
    /// use wage_shortfall::config::ReferenceTable;
    /// use wage_shortfall::export::ShortfallTable;
    /// use wage_shortfall::models::{Month, WageRecord};
    ///
    /// let table = ReferenceTable::jakarta();
    /// let summary = compute_batch(
    ///     vec![WageRecord::new("A", 2023, Month::Januari, "4000000")],
    ///     &table,
    /// ).unwrap();
    /// let display = ShortfallTable::from_summary(&summary);
    /// assert_eq!(display.total_row().selisih, "-901.798");
    /// ```
    pub fn from_summary(summary: &ShortfallSummary) -> Self {
        let rows: Vec<TableRow> = summary
            .results
            .iter()
            .map(|r| TableRow {
                nama: r.name.clone(),
                tahun: r.year.to_string(),
                bulan: r.month.to_string(),
                upah: r.display_wage(),
                ump: r.display_minimum_wage(),
                selisih: r.display_deficit(),
            })
            .collect();

        let total = TableRow {
            bulan: TOTAL_LABEL.to_string(),
            selisih: summary.display_total(),
            ..TableRow::default()
        };

        Self { rows, total }
    }

    /// Every row, ending with the total row.
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().chain(std::iter::once(&self.total))
    }

    /// The record rows, without the total row.
    pub fn record_rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// The trailing total row.
    pub fn total_row(&self) -> &TableRow {
        &self.total
    }
}

impl From<ShortfallTable> for Vec<TableRow> {
    fn from(table: ShortfallTable) -> Self {
        let mut rows = table.rows;
        rows.push(table.total);
        rows
    }
}

impl TryFrom<Vec<TableRow>> for ShortfallTable {
    type Error = String;

    fn try_from(mut rows: Vec<TableRow>) -> Result<Self, Self::Error> {
        match rows.pop() {
            Some(total) if total.is_total() => Ok(Self { rows, total }),
            _ => Err(format!("table must end with a '{}' row", TOTAL_LABEL)),
        }
    }
}
