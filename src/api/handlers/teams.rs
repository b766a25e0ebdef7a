use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employees::EmployeeResponse;
use crate::api::errors::ApiError;
use crate::api::middleware::auth::BearerAuth;
use crate::api::AppState;
use crate::domain::team::Team;

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub parent_team_id: Option<Uuid>,
}

/// Team representation returned by the API
///
/// Teams are returned as a flat list with their employees embedded;
/// clients assemble the hierarchy from `parent_team_id`.
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub parent_team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub employees: Vec<EmployeeResponse>,
}

impl TeamResponse {
    fn from_team(team: &Team, employees: Vec<EmployeeResponse>) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            parent_team_id: team.parent_team_id(),
            created_at: team.created_at(),
            employees,
        }
    }
}

/// List all teams with their employees
///
/// GET /teams
pub async fn list_teams(
    State(state): State<AppState>,
    _auth: BearerAuth,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state
        .teams
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let employees = state
        .employees
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    // Group employees under their team
    let mut by_team: HashMap<Uuid, Vec<EmployeeResponse>> = HashMap::new();
    for employee in &employees {
        by_team
            .entry(employee.team_id())
            .or_default()
            .push(EmployeeResponse::from(employee));
    }

    let responses = teams
        .iter()
        .map(|team| {
            let members = by_team.remove(&team.id()).unwrap_or_default();
            TeamResponse::from_team(team, members)
        })
        .collect();

    Ok(Json(responses))
}

/// Create a new team
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    _auth: BearerAuth,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    // A nested team must point at an existing parent
    if let Some(parent_id) = req.parent_team_id {
        state
            .teams
            .find_by_id(parent_id)
            .await
            .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
            .ok_or_else(|| ApiError::bad_request("Parent team does not exist"))?;
    }

    // Create team domain entity
    let (team, _events) =
        Team::new(req.name, req.parent_team_id).map_err(|e| ApiError::bad_request(e))?;

    // Save to the store
    state
        .teams
        .save(&team)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save team: {}", e)))?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from_team(&team, Vec::new()))))
}
