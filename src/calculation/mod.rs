//! Calculation logic for the wage shortfall engine.
//!
//! This module contains amount parsing and formatting, duplicate removal,
//! and the shortfall calculation itself, plus the manual-entry entry point
//! that ties them together.

mod dedupe;
mod manual;
mod number_format;
mod shortfall;

pub use dedupe::dedupe;
pub use manual::compute_manual;
pub use number_format::{format_with_dots, sanitize};
pub use shortfall::{compute_batch, compute_one};
