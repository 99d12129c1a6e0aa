//! Wage shortfall engine.
//!
//! This crate compares reported monthly wages with the statutory minimum
//! wage (UMP) for their year, validates imported wage tables, and lays the
//! results out for display and export.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
