//! Manual entry rows.
//!
//! A [`ManualEntry`] is one row of the input form. Any field may be left
//! blank; [`ManualEntry::resolve`] fills in the same defaults the form shows
//! so that the calculator only ever sees a legal year and month.

use serde::{Deserialize, Serialize};

use crate::config::ReferenceTable;
use crate::error::{EngineError, EngineResult};

use super::{Month, WageRecord};

/// The most rows a single manual calculation accepts.
pub const MAX_MANUAL_ENTRIES: usize = 200;

/// One row of manually entered data, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntry {
    /// Employee name.
    #[serde(default)]
    pub name: Option<String>,
    /// Year; the table's default year when absent.
    #[serde(default)]
    pub year: Option<i32>,
    /// Month name; the first valid month of the year when absent or invalid.
    #[serde(default)]
    pub month: Option<String>,
    /// Reported wage text.
    #[serde(default)]
    pub wage: Option<String>,
}

impl ManualEntry {
    /// Creates a fully specified entry.
    pub fn new(
        name: impl Into<String>,
        year: i32,
        month: impl Into<String>,
        wage: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            year: Some(year),
            month: Some(month.into()),
            wage: Some(wage.into()),
        }
    }

    /// Applies form defaults and returns a typed record.
    ///
    /// A month that is missing, misspelled, or outside the year's valid
    /// months becomes the first valid month for that year.
    ///
    /// # Errors
    ///
    /// Returns `UnknownYear` if an explicit year is not in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_shortfall::config::ReferenceTable;
    /// use wage_shortfall::models::{ManualEntry, Month};
    ///
    /// let table = ReferenceTable::jakarta();
    /// let record = ManualEntry::new("Budi", 2011, "Januari", "1.000.000")
    ///     .resolve(&table)
    ///     .unwrap();
    /// assert_eq!(record.month, Month::September);
    /// ```
    pub fn resolve(&self, table: &ReferenceTable) -> EngineResult<WageRecord> {
        let year = self.year.unwrap_or_else(|| table.default_year());
        if !table.contains_year(year) {
            return Err(EngineError::UnknownYear { year });
        }

        let month = self
            .month
            .as_deref()
            .and_then(|m| m.trim().parse::<Month>().ok())
            .filter(|m| table.is_valid_month(year, *m))
            .or_else(|| table.valid_months(year).first().copied())
            .unwrap_or(Month::Januari);

        Ok(WageRecord {
            name: self.name.clone().unwrap_or_default(),
            year,
            month,
            reported_wage: self.wage.clone().unwrap_or_default(),
        })
    }
}
