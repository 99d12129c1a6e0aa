//! Wage record model.
//!
//! A [`WageRecord`] is one reported wage for one employee in one month. It
//! is the typed shape every path (import or manual entry) produces before
//! the shortfall calculation runs.

use serde::{Deserialize, Serialize};

use super::Month;

/// The identity of a wage record: lowercase trimmed name, year and month.
///
/// Two records with the same key describe the same employee-month.
pub type IdentityKey = (String, i32, Month);

/// A single reported wage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageRecord {
    /// Free-text employee name.
    pub name: String,
    /// The year the wage was paid in.
    pub year: i32,
    /// The month the wage was paid in.
    pub month: Month,
    /// The wage as entered, sanitized only when computed.
    pub reported_wage: String,
}

impl WageRecord {
    /// Creates a new wage record.
    pub fn new(
        name: impl Into<String>,
        year: i32,
        month: Month,
        reported_wage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            year,
            month,
            reported_wage: reported_wage.into(),
        }
    }

    /// Returns the identity key used to detect duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_shortfall::models::{Month, WageRecord};
    ///
    /// let a = WageRecord::new(" Budi ", 2023, Month::Maret, "1");
    /// let b = WageRecord::new("BUDI", 2023, Month::Maret, "2");
    /// assert_eq!(a.identity_key(), b.identity_key());
    /// ```
    pub fn identity_key(&self) -> IdentityKey {
        (normalize_name(&self.name), self.year, self.month)
    }
}

/// Lowercases and trims a name for identity comparison.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
