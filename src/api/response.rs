//! Response types for the CPC Salary Engine API.
//!
//! This module defines the error response structures, the mapping from
//! engine errors to HTTP statuses, and the bodies of the lookup endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, FieldError};
use crate::models::CityCategory;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Per-field validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            field_errors: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a validation error response listing every failing field.
    pub fn invalid_input(errors: Vec<FieldError>) -> Self {
        Self {
            field_errors: errors,
            ..Self::validation_error("The salary input failed validation")
        }
    }

    /// Creates a pay level not found error response.
    pub fn pay_level_not_found(level: &str) -> Self {
        Self::with_details(
            "PAY_LEVEL_NOT_FOUND",
            format!("Pay level not found: {}", level),
            format!("The pay level '{}' is not part of the pay matrix", level),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::PayLevelNotFound { level } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::pay_level_not_found(&level),
            },
            EngineError::InvalidInput { errors } => {
                ApiErrorResponse::bad_request(ApiError::invalid_input(errors))
            }
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

/// Body of `GET /pay-levels`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayLevelsResponse {
    /// Name of the loaded pay commission.
    pub commission: String,
    /// Pay level identifiers in matrix order.
    pub levels: Vec<String>,
}

/// Body of `GET /pay-levels/:level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicPayOptionsResponse {
    /// The pay level.
    pub level: String,
    /// Admissible basic pays in ascending order.
    pub basic_pays: Vec<Decimal>,
}

/// An HRA city choice with its resolved percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HraCityOption {
    /// The city name.
    pub name: String,
    /// The HRA category of the city.
    pub category: CityCategory,
    /// HRA as a percentage of basic pay.
    pub hra_percentage: Decimal,
}

/// Body of `GET /cities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesResponse {
    /// HRA city choices, sorted, with the catch-all last.
    pub hra_cities: Vec<HraCityOption>,
    /// TA city choices, sorted.
    pub ta_cities: Vec<String>,
}
