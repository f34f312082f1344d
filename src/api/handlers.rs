//! HTTP request handlers for the HR dashboard API.
//!
//! This module contains the router and the handler functions for all API
//! endpoints. Every handler tags its log lines with a fresh correlation id.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{DashboardStats, DepartmentCount, Employee, StatusCount, UpcomingBirthday};

use super::request::{EmployeeQuery, EmployeeRequest};
use super::response::{
    ApiError, ApiErrorResponse, CreatedResponse, HealthResponse, MessageResponse,
    NextIdResponse, UpdatedResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/next-id", get(next_id_handler))
        .route("/stats", get(stats_handler))
        .route("/stats/departments", get(department_stats_handler))
        .route("/stats/statuses", get(status_stats_handler))
        .route("/birthdays", get(birthdays_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Logs a failed operation and converts it into an HTTP error.
fn reject(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error.into()
}

/// Unwraps a JSON body, mapping extractor rejections to 400 responses.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> ApiResult<T> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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

    Err(ApiErrorResponse::bad_request(error))
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for GET /employees.
///
/// Supports optional `department` and `status` filters; when both are given
/// an employee must match both.
async fn list_employees_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> ApiResult<Json<Vec<Employee>>> {
    let correlation_id = Uuid::new_v4();

    let status = query.status_filter().map_err(|message| {
        warn!(correlation_id = %correlation_id, error = %message, "Bad status filter");
        ApiErrorResponse::bad_request(ApiError::validation_error(message))
    })?;

    let repository = state.repository();
    let fetched = match (query.department.as_deref(), status) {
        (Some(department), _) => repository.fetch_by_department(department).await,
        (None, Some(status)) => repository.fetch_by_status(status).await,
        (None, None) => repository.fetch_all().await,
    };
    let mut employees = fetched.map_err(|err| reject(correlation_id, err))?;

    if let (Some(_), Some(status)) = (query.department.as_deref(), status) {
        employees.retain(|e| e.status == Some(status));
    }

    info!(
        correlation_id = %correlation_id,
        department = query.department.as_deref().unwrap_or("*"),
        status = query.status.as_deref().unwrap_or("*"),
        count = employees.len(),
        "Listed employees"
    );
    Ok(Json(employees))
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    let employee = state
        .repository()
        .fetch_by_id(&id)
        .await
        .map_err(|err| reject(correlation_id, err))?;

    Ok(Json(employee))
}

/// Handler for POST /employees.
///
/// Uses the id from the body when present, otherwise assigns the next id.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create request");

    let request = parse_payload(payload, correlation_id)?;
    let repository = state.repository();

    let requested_id = request.requested_id().map(str::to_string);
    let employee = request
        .into_employee(requested_id.clone().unwrap_or_default(), state.today())
        .map_err(|err| reject(correlation_id, err))?;

    let stored = match requested_id {
        Some(_) => repository.create(employee).await,
        None => repository.create_with_next_id(employee).await,
    }
    .map_err(|err| reject(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %stored.id,
        "Employee created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Employee created successfully".to_string(),
            id: stored.id.clone(),
            employee: stored,
        }),
    ))
}

/// Handler for PUT /employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<UpdatedResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing update request");

    let request = parse_payload(payload, correlation_id)?;
    if let Some(body_id) = request.requested_id() {
        if body_id != id {
            return Err(reject(
                correlation_id,
                EngineError::invalid_employee(
                    "id",
                    format!("body id '{}' does not match path id '{}'", body_id, id),
                ),
            ));
        }
    }

    let employee = request
        .into_employee(id, state.today())
        .map_err(|err| reject(correlation_id, err))?;
    let stored = state
        .repository()
        .update(employee)
        .await
        .map_err(|err| reject(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %stored.id,
        "Employee updated"
    );
    Ok(Json(UpdatedResponse {
        message: "Employee updated successfully".to_string(),
        employee: stored,
    }))
}

/// Handler for DELETE /employees/:id.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let correlation_id = Uuid::new_v4();
    state
        .repository()
        .delete(&id)
        .await
        .map_err(|err| reject(correlation_id, err))?;

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee deleted");
    Ok(Json(MessageResponse {
        message: "Employee deleted successfully".to_string(),
    }))
}

/// Handler for GET /next-id.
async fn next_id_handler(State(state): State<AppState>) -> ApiResult<Json<NextIdResponse>> {
    let correlation_id = Uuid::new_v4();
    let next_id = state
        .repository()
        .next_id()
        .await
        .map_err(|err| reject(correlation_id, err))?;

    Ok(Json(NextIdResponse { next_id }))
}

/// Fetches the full employee list for the statistics endpoints.
async fn snapshot(state: &AppState, correlation_id: Uuid) -> ApiResult<Vec<Employee>> {
    state
        .repository()
        .fetch_all()
        .await
        .map_err(|err| reject(correlation_id, err))
}

/// Handler for GET /stats.
async fn stats_handler(State(state): State<AppState>) -> ApiResult<Json<DashboardStats>> {
    let correlation_id = Uuid::new_v4();
    let employees = snapshot(&state, correlation_id).await?;

    let start_time = Instant::now();
    let stats = state.engine().dashboard(&employees);
    info!(
        correlation_id = %correlation_id,
        employees = stats.total_employees,
        departments = stats.departments.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Dashboard statistics computed"
    );

    Ok(Json(stats))
}

/// Handler for GET /stats/departments.
async fn department_stats_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentCount>>> {
    let correlation_id = Uuid::new_v4();
    let employees = snapshot(&state, correlation_id).await?;
    Ok(Json(state.engine().department_distribution(&employees)))
}

/// Handler for GET /stats/statuses.
async fn status_stats_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<StatusCount>>> {
    let correlation_id = Uuid::new_v4();
    let employees = snapshot(&state, correlation_id).await?;
    Ok(Json(state.engine().status_distribution(&employees)))
}

/// Handler for GET /birthdays.
async fn birthdays_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UpcomingBirthday>>> {
    let correlation_id = Uuid::new_v4();
    let employees = snapshot(&state, correlation_id).await?;
    let today = state.today();

    let upcoming = state.engine().upcoming_birthdays(&employees, today);
    info!(
        correlation_id = %correlation_id,
        today = %today,
        count = upcoming.len(),
        "Upcoming birthdays computed"
    );
    Ok(Json(upcoming))
}
