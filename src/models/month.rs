//! Calendar month names as used on Indonesian payroll records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar month, named the way it appears in the `Bulan` column.
///
/// Parsing is exact: `"Januari"` is a month, `"januari"` and `"Jan"` are not.
///
/// # Example
///
/// ```
/// use wage_shortfall::models::Month;
///
/// let month: Month = "Oktober".parse().unwrap();
/// assert_eq!(month, Month::Oktober);
/// assert_eq!(month.to_string(), "Oktober");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    /// January.
    Januari,
    /// February.
    Februari,
    /// March.
    Maret,
    /// April.
    April,
    /// May.
    Mei,
    /// June.
    Juni,
    /// July.
    Juli,
    /// August.
    Agustus,
    /// September.
    September,
    /// October.
    Oktober,
    /// November.
    November,
    /// December.
    Desember,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Januari,
        Month::Februari,
        Month::Maret,
        Month::April,
        Month::Mei,
        Month::Juni,
        Month::Juli,
        Month::Agustus,
        Month::September,
        Month::Oktober,
        Month::November,
        Month::Desember,
    ];

    /// Returns the month name as written on payroll records.
    pub fn name(self) -> &'static str {
        match self {
            Month::Januari => "Januari",
            Month::Februari => "Februari",
            Month::Maret => "Maret",
            Month::April => "April",
            Month::Mei => "Mei",
            Month::Juni => "Juni",
            Month::Juli => "Juli",
            Month::Agustus => "Agustus",
            Month::September => "September",
            Month::Oktober => "Oktober",
            Month::November => "November",
            Month::Desember => "Desember",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when text is not one of the twelve month names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown month name: {0}")]
pub struct UnknownMonth(pub String);

impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMonth(s.to_string()))
    }
}
