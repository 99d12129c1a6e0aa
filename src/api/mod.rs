//! HTTP API module for the wage shortfall engine.
//!
//! This module provides the REST endpoints for reference data, import
//! validation, manual-entry calculation and export.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ImportRequest};
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, ImportProblem, ReferenceResponse,
    ReferenceYear,
};
pub use state::AppState;
