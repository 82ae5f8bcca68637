//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;

use super::request::{CompileRequest, EmployeeQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/compile", post(compile_handler))
        .route("/attendance/history", get(history_handler))
        .route("/analytics/metrics", get(metrics_handler))
        .route("/analytics/anomalies", get(anomalies_handler))
        .route("/analytics/leave-abuse", get(leave_abuse_handler))
        .route("/analytics/risk/:employee_id", get(risk_handler))
        .route("/analytics/performers", get(performers_handler))
        .with_state(state)
}

/// Handler for POST /attendance/compile.
async fn compile_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompileRequest>, JsonRejection>,
) -> Response {
    let started = Instant::now();
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compile request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => ApiError::malformed_json(err.body_text()),
                JsonRejection::JsonSyntaxError(err) => {
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            warn!(correlation_id = %correlation_id, error = %error.message, "Rejected compile request");
            return json_response(StatusCode::BAD_REQUEST, &error);
        }
    };

    let result = request
        .target_date()
        .and_then(|date| state.engine().compile(date));
    respond(started, correlation_id, "compile", result)
}

/// Handler for GET /attendance/history.
async fn history_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Response {
    let started = Instant::now();
    let correlation_id = Uuid::new_v4();
    let result = state.engine().history(query.employee_id.as_deref());
    respond(started, correlation_id, "history", result)
}

/// Handler for GET /analytics/metrics.
async fn metrics_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Response {
    let started = Instant::now();
    let correlation_id = Uuid::new_v4();
    let engine = state.engine();
    let employee_id = query.employee_id.as_deref();
    let result = engine
        .history(employee_id)
        .and_then(|window| engine.metrics(&window, employee_id));
    respond(started, correlation_id, "metrics", result)
}

/// Handler for GET /analytics/anomalies.
async fn anomalies_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Response {
    let started = Instant::now();
    let correlation_id = Uuid::new_v4();
    let engine = state.engine();
    let result = engine
        .history(query.employee_id.as_deref())
        .map(|window| engine.anomalies(&window));
    respond(started, correlation_id, "anomalies", result)
}

/// Handler for GET /analytics/leave-abuse.
async fn leave_abuse_handler(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let correlation_id = Uuid::new_v4();
    let result = state.engine().department_leave_abuse();
    respond(started, correlation_id, "leave_abuse", result)
}

/// Handler for GET /analytics/risk/:employee_id.
async fn risk_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let started = Instant::now();
    let correlation_id = Uuid::new_v4();
    let result = state.engine().predict_risk(&employee_id);
    respond(started, correlation_id, "risk", result)
}

/// Handler for GET /analytics/performers.
async fn performers_handler(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let correlation_id = Uuid::new_v4();
    let result = state.engine().performer_lists();
    respond(started, correlation_id, "performers", result)
}

/// Serializes an engine result, logging its outcome.
fn respond<T: Serialize>(
    started: Instant,
    correlation_id: Uuid,
    operation: &str,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            let response = json_response(StatusCode::OK, &body);
            info!(
                correlation_id = %correlation_id,
                operation,
                duration_us = started.elapsed().as_micros(),
                "Request completed successfully"
            );
            response
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Request failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, &api_error.error)
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
