use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::BearerAuth;
use crate::api::AppState;
use crate::domain::employee::{Employee, EmploymentPeriod};

/// Request body for creating an employee
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub surname: String,
    pub position: String,
    pub team_id: Uuid,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Employee representation returned by the API
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub position: String,
    pub team_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id(),
            name: employee.name().to_string(),
            surname: employee.surname().to_string(),
            position: employee.position().to_string(),
            team_id: employee.team_id(),
            created_at: employee.created_at(),
            start_date: employee.start_date(),
            end_date: employee.end_date(),
        }
    }
}

/// Request body for deleting several employees at once
#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub employee_ids: Vec<Uuid>,
}

/// Confirmation body for delete operations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List all employees
///
/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
    _auth: BearerAuth,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = state
        .employees
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let responses = employees.iter().map(EmployeeResponse::from).collect();

    Ok(Json(responses))
}

/// Create a new employee
///
/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    _auth: BearerAuth,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    // Create employee domain entity
    let period = EmploymentPeriod::new(req.start_date, req.end_date)
        .map_err(|e| ApiError::bad_request(e))?;

    let (employee, _events) = Employee::new(req.name, req.surname, req.position, req.team_id, period)
        .map_err(|e| ApiError::bad_request(e))?;

    // Save to the store; the team reference is checked there, not here
    state.employees.save(&employee).await.map_err(|e| {
        if e.contains("team") {
            ApiError::bad_request("Referenced team does not exist")
        } else {
            ApiError::internal_server_error(format!("Failed to save employee: {}", e))
        }
    })?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(&employee))))
}

/// Get an employee by ID
///
/// GET /employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    _auth: BearerAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state
        .employees
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Employee not found"))?;

    Ok(Json(EmployeeResponse::from(&employee)))
}

/// Update an employee
///
/// PUT /employees/:id
///
/// Accepted but not implemented: returns 204 without touching the store.
/// TODO: apply field updates through EmployeeRepository::save once the
/// update payload shape is settled.
pub async fn update_employee(
    State(_state): State<AppState>,
    _auth: BearerAuth,
    Path(_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    Ok(StatusCode::NO_CONTENT)
}

/// Delete an employee
///
/// DELETE /employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    _auth: BearerAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    // Read first so a miss never reaches the delete
    state
        .employees
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Employee not found"))?;

    state
        .employees
        .delete(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete employee: {}", e)))?;

    Ok(Json(MessageResponse {
        message: "Employee deleted successfully".to_string(),
    }))
}

/// Delete several employees in one request
///
/// POST /employees/bulk-delete
///
/// Best-effort: ids without a record are skipped, and the confirmation
/// reports the requested count.
pub async fn bulk_delete_employees(
    State(state): State<AppState>,
    _auth: BearerAuth,
    Json(req): Json<BulkDeleteRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if req.employee_ids.is_empty() {
        return Err(ApiError::bad_request("No employee IDs provided"));
    }

    state
        .employees
        .delete_many(&req.employee_ids)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete employees: {}", e)))?;

    Ok(Json(MessageResponse {
        message: format!("Deleted {} employees successfully", req.employee_ids.len()),
    }))
}
