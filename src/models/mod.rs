//! Core data models for the wage shortfall engine.

mod manual_entry;
mod month;
mod shortfall;
mod wage_record;

pub use manual_entry::{MAX_MANUAL_ENTRIES, ManualEntry};
pub use month::{Month, UnknownMonth};
pub use shortfall::{NO_DATA, ShortfallResult, ShortfallSummary};
pub use wage_record::{IdentityKey, WageRecord};

pub(crate) use wage_record::normalize_name;
