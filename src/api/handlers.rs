//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ENGINE_VERSION;
use crate::calculation::{
    BONUS_RATE, SOCIAL_SECURITY_RATE, calculate_with_audit, dgii_schedule,
};
use crate::models::{AuditTrace, CalculationReport, PayrollInput};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, HealthResponse, RatesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts the two raw amounts and returns the salary breakdown with its
/// audit trace. Amounts that do not parse are treated as zero; only a body
/// that is not a JSON object of the expected shape is rejected.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
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
                    ApiError::with_details(
                        "MALFORMED_JSON",
                        "Request body does not match the expected shape",
                        body_text,
                    )
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
                    ApiError::missing_content_type()
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let input: PayrollInput = request.into();
    let report = build_report(correlation_id, &input);

    info!(
        correlation_id = %correlation_id,
        gross_salary = %report.result.gross_salary,
        net_salary = %report.result.net_salary,
        duration_us = report.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    (StatusCode::OK, Json(report)).into_response()
}

/// Runs the calculation and wraps it in a report.
fn build_report(calculation_id: Uuid, input: &PayrollInput) -> CalculationReport {
    let start_time = Instant::now();
    let audited = calculate_with_audit(input);
    let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);

    CalculationReport {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        result: audited.result,
        audit_trace: AuditTrace {
            steps: audited.audit_steps,
            duration_us,
        },
    }
}

/// Handler for GET /rates endpoint.
async fn rates_handler() -> Json<RatesResponse> {
    let schedule = dgii_schedule();
    Json(RatesResponse {
        social_security_rate: SOCIAL_SECURITY_RATE,
        bonus_rate: BONUS_RATE,
        isr_brackets: schedule.brackets().to_vec(),
        isr_boundary_gaps: schedule.boundary_gaps(),
    })
}

/// Handler for GET /health endpoint.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now() - state.started_at();
    Json(HealthResponse {
        status: "ok".to_string(),
        engine_version: ENGINE_VERSION.to_string(),
        listen_address: state.config().config().bind_address(),
        uptime_seconds: uptime.num_seconds(),
    })
}
