//! HTTP API module for the CPC Salary Engine.
//!
//! This module provides the REST endpoints for calculating salaries and
//! listing the pay matrix and city tables behind the salary form.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MonthEntryRequest, SalaryRequest};
pub use response::{
    ApiError, ApiErrorResponse, BasicPayOptionsResponse, CitiesResponse, HraCityOption,
    PayLevelsResponse,
};
pub use state::AppState;
