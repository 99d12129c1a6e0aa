//! Shortfall result models.
//!
//! This module contains the per-record [`ShortfallResult`] and the
//! [`ShortfallSummary`] that aggregates a batch.

use serde::{Deserialize, Serialize};

use super::Month;
use crate::calculation::format_with_dots;

/// Text shown in place of an amount when a record has no usable wage.
pub const NO_DATA: &str = "-";

/// The outcome of comparing one reported wage with the UMP.
///
/// # Example
///
/// ```
/// use wage_shortfall::models::{Month, ShortfallResult};
///
/// let result = ShortfallResult {
///     name: "Budi".to_string(),
///     year: 2023,
///     month: Month::Januari,
///     reported_wage: Some(4_000_000),
///     minimum_wage: 4_901_798,
///     deficit: -901_798,
/// };
/// assert_eq!(result.display_deficit(), "-901.798");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortfallResult {
    /// Employee name as entered.
    pub name: String,
    /// Year of the record.
    pub year: i32,
    /// Month of the record.
    pub month: Month,
    /// Sanitized reported wage, or `None` when the record has no data.
    pub reported_wage: Option<i64>,
    /// UMP for the record's year.
    pub minimum_wage: i64,
    /// Shortfall against the UMP; never positive.
    pub deficit: i64,
}

impl ShortfallResult {
    /// Returns true if the record had no usable wage.
    pub fn is_placeholder(&self) -> bool {
        self.reported_wage.is_none()
    }

    /// The reported wage for display, or `-` for a placeholder.
    pub fn display_wage(&self) -> String {
        self.reported_wage
            .map(format_with_dots)
            .unwrap_or_else(|| NO_DATA.to_string())
    }

    /// The UMP for display.
    pub fn display_minimum_wage(&self) -> String {
        format_with_dots(self.minimum_wage)
    }

    /// The shortfall for display, or `-` for a placeholder.
    pub fn display_deficit(&self) -> String {
        if self.is_placeholder() {
            NO_DATA.to_string()
        } else {
            format_with_dots(self.deficit)
        }
    }
}

/// Per-record results plus the aggregate shortfall for a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortfallSummary {
    /// One result per deduplicated record, in input order.
    pub results: Vec<ShortfallResult>,
    /// Sum of every deficit; never positive.
    pub total_deficit: i64,
}

impl ShortfallSummary {
    /// Returns true if there is nothing to display.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The aggregate shortfall for display.
    pub fn display_total(&self) -> String {
        format_with_dots(self.total_deficit)
    }

    /// Number of records that had no usable wage.
    pub fn placeholder_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_placeholder()).count()
    }
}
