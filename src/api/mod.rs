//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for calculating fortnightly
//! pay and building the salary report document.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PayPeriodRequest};
pub use response::ApiError;
pub use state::AppState;
