//! HTTP request handlers for the pay breakdown API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{MonthLedger, StaticCalendar};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::Shift;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Records every shift of the request in a month ledger and returns the
/// worked days and the month total.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
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
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let started = Instant::now();
    let shifts_count = request.shifts.len();
    match perform_calculation(request, state.config()) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                year = response.year,
                month = response.month,
                shifts_count,
                worked_days = response.total.worked_days,
                total_hours = %response.total.totals.total_hours,
                duration_us = started.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Builds the month ledger for a request.
fn perform_calculation(
    request: CalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<CalculationResponse> {
    let calendar: StaticCalendar = request.static_calendar();
    let shifts = request.shifts.into_iter().map(Shift::from);
    let ledger = MonthLedger::with_shifts(
        request.year,
        request.month,
        config.config(),
        calendar,
        shifts,
    )?;

    Ok(CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        year: ledger.year(),
        month: ledger.month(),
        days: ledger.days().cloned().collect(),
        total: ledger.total().clone(),
    })
}
