//! Reference table types.
//!
//! This module contains the minimum wage reference table and the YAML
//! structure it can be loaded from.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Month;

/// The year a manual entry falls back to when none is chosen.
pub const DEFAULT_YEAR: i32 = 2023;

/// Reference table file structure.
///
/// ```yaml
/// region: DKI Jakarta
/// default_year: 2023
/// minimum_wages:
///   2011: 1290000
///   2012: 1529150
/// restricted_months:
///   2011: [September, Oktober, November, Desember]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceFile {
    /// The region the minimum wages apply to.
    pub region: String,
    /// The year offered first on a blank manual entry.
    #[serde(default = "default_year")]
    pub default_year: i32,
    /// Minimum wage per year, in whole rupiah.
    pub minimum_wages: BTreeMap<i32, i64>,
    /// Years for which only some months are valid.
    #[serde(default)]
    pub restricted_months: BTreeMap<i32, Vec<Month>>,
}

fn default_year() -> i32 {
    DEFAULT_YEAR
}

/// Minimum wage per year and the months each year covers.
///
/// The table is immutable once built. Every year has all twelve months
/// unless it appears in the restricted set.
///
/// # Example
///
/// ```
/// use wage_shortfall::config::ReferenceTable;
/// use wage_shortfall::models::Month;
///
/// let table = ReferenceTable::jakarta();
/// assert_eq!(table.minimum_wage(2023).unwrap(), 4_901_798);
/// assert_eq!(table.valid_months(2011)[0], Month::September);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable {
    region: String,
    default_year: i32,
    minimum_wages: BTreeMap<i32, i64>,
    restricted_months: BTreeMap<i32, Vec<Month>>,
}

impl ReferenceTable {
    /// Builds a table, checking that it is internally consistent.
    ///
    /// Fails with `InvalidReference` if the table is empty, has a negative
    /// amount, names a default year it does not contain, or restricts
    /// months for a year it does not contain.
    pub fn new(
        region: impl Into<String>,
        default_year: i32,
        minimum_wages: BTreeMap<i32, i64>,
        restricted_months: BTreeMap<i32, Vec<Month>>,
    ) -> EngineResult<Self> {
        if minimum_wages.is_empty() {
            return Err(invalid("no minimum wages defined"));
        }
        if let Some((year, amount)) = minimum_wages.iter().find(|(_, amount)| **amount < 0) {
            return Err(invalid(format!(
                "negative minimum wage {} for year {}",
                amount, year
            )));
        }
        if !minimum_wages.contains_key(&default_year) {
            return Err(invalid(format!(
                "default year {} has no minimum wage",
                default_year
            )));
        }
        for (year, months) in &restricted_months {
            if !minimum_wages.contains_key(year) {
                return Err(invalid(format!(
                    "restricted months given for unknown year {}",
                    year
                )));
            }
            if months.is_empty() {
                return Err(invalid(format!("year {} has no valid months", year)));
            }
        }

        let restricted_months = restricted_months
            .into_iter()
            .map(|(year, mut months)| {
                months.sort();
                months.dedup();
                (year, months)
            })
            .collect();

        Ok(Self {
            region: region.into(),
            default_year,
            minimum_wages,
            restricted_months,
        })
    }

    /// Builds a table from a parsed reference file.
    pub fn from_file(file: ReferenceFile) -> EngineResult<Self> {
        Self::new(
            file.region,
            file.default_year,
            file.minimum_wages,
            file.restricted_months,
        )
    }

    /// The built-in DKI Jakarta UMP table.
    ///
    /// UMP enforcement on these records starts in September 2011, so 2011
    /// only covers its final four months.
    pub fn jakarta() -> Self {
        let minimum_wages = BTreeMap::from([
            (2011, 1_290_000),
            (2012, 1_529_150),
            (2013, 2_200_000),
            (2014, 2_441_000),
            (2015, 2_700_000),
            (2016, 3_100_000),
            (2017, 3_355_750),
            (2018, 3_648_035),
            (2019, 3_940_973),
            (2020, 4_267_349),
            (2021, 4_416_187),
            (2022, 4_573_845),
            (2023, 4_901_798),
            (2024, 5_067_381),
            (2025, 5_396_761),
        ]);
        let restricted_months = BTreeMap::from([(
            2011,
            vec![
                Month::September,
                Month::Oktober,
                Month::November,
                Month::Desember,
            ],
        )]);

        Self {
            region: "DKI Jakarta".to_string(),
            default_year: DEFAULT_YEAR,
            minimum_wages,
            restricted_months,
        }
    }

    /// Returns the region the table applies to.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the year a blank manual entry starts on.
    pub fn default_year(&self) -> i32 {
        self.default_year
    }

    /// Returns every year in the table, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.minimum_wages.keys().copied()
    }

    /// Returns true if the table has a minimum wage for `year`.
    pub fn contains_year(&self, year: i32) -> bool {
        self.minimum_wages.contains_key(&year)
    }

    /// Returns the minimum wage for `year`.
    ///
    /// Fails with `UnknownYear` if the year is not in the table.
    pub fn minimum_wage(&self, year: i32) -> EngineResult<i64> {
        self.minimum_wages
            .get(&year)
            .copied()
            .ok_or(EngineError::UnknownYear { year })
    }

    /// Returns the months valid for `year`, in calendar order.
    ///
    /// Years without a restriction (including years not in the table) get
    /// all twelve months.
    pub fn valid_months(&self, year: i32) -> Vec<Month> {
        self.restricted_months
            .get(&year)
            .cloned()
            .unwrap_or_else(|| Month::ALL.to_vec())
    }

    /// Returns true if `month` is valid for `year`.
    pub fn is_valid_month(&self, year: i32, month: Month) -> bool {
        self.restricted_months
            .get(&year)
            .is_none_or(|months| months.contains(&month))
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::jakarta()
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidReference {
        message: message.into(),
    }
}
