//! HTTP request handlers for the CPC Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_salary, hra_percentage};
use crate::models::{SalaryInput, SalaryResults};
use crate::report::render_report;

use super::request::SalaryRequest;
use super::response::{
    ApiError, ApiErrorResponse, BasicPayOptionsResponse, CitiesResponse, HraCityOption,
    PayLevelsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/report", post(report_handler))
        .route("/pay-levels", get(pay_levels_handler))
        .route("/pay-levels/:level", get(basic_pay_options_handler))
        .route("/cities", get(cities_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Returns the structured salary result as JSON.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    match run_calculation(&state, payload) {
        Ok(results) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(results),
        )
            .into_response(),
        Err(api_error) => error_response(api_error),
    }
}

/// Handler for POST /calculate/report.
///
/// Returns the printable plain-text breakdown.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    match run_calculation(&state, payload) {
        Ok(results) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_report(&results),
        )
            .into_response(),
        Err(api_error) => error_response(api_error),
    }
}

/// Handler for GET /pay-levels.
async fn pay_levels_handler(State(state): State<AppState>) -> Json<PayLevelsResponse> {
    let tables = state.tables();
    Json(PayLevelsResponse {
        commission: tables.commission().name.clone(),
        levels: tables.pay_levels().into_iter().map(String::from).collect(),
    })
}

/// Handler for GET /pay-levels/:level.
async fn basic_pay_options_handler(
    State(state): State<AppState>,
    Path(level): Path<String>,
) -> Response {
    match state.tables().basic_pay_cells(&level) {
        Ok(cells) => Json(BasicPayOptionsResponse {
            level,
            basic_pays: cells.to_vec(),
        })
        .into_response(),
        Err(err) => {
            warn!(level = %level, "Pay level not found");
            error_response(err.into())
        }
    }
}

/// Handler for GET /cities.
async fn cities_handler(State(state): State<AppState>) -> Json<CitiesResponse> {
    let tables = state.tables();
    let hra_cities = tables
        .hra_city_options()
        .into_iter()
        .map(|city| HraCityOption {
            name: city.name.clone(),
            category: city.category,
            hra_percentage: hra_percentage(&city.name, tables.config()),
        })
        .collect();

    Json(CitiesResponse {
        hra_cities,
        ta_cities: tables.ta_city_options(),
    })
}

/// Parses the request body, calculates, and logs the outcome under a
/// correlation id.
fn run_calculation(
    state: &AppState,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Result<SalaryResults, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    let input: SalaryInput = request.into();
    let start_time = Instant::now();

    match calculate_salary(&input, state.tables().config()) {
        Ok(results) => {
            info!(
                correlation_id = %correlation_id,
                pay_level = %input.pay_level,
                months = results.monthly_results.len(),
                net_salary = %results.totals.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            Ok(results)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            Err(err.into())
        }
    }
}

fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
