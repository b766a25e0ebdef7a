// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::domain::repositories::{EmployeeRepository, TeamRepository};

/// Shared application state handed to every handler
///
/// Holds the repository capabilities behind trait objects so the concrete
/// persistence implementation is chosen once, at construction time.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeRepository>,
    pub teams: Arc<dyn TeamRepository>,
}

impl AppState {
    /// Creates application state from injected repository implementations
    pub fn new(employees: Arc<dyn EmployeeRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { employees, teams }
    }
}

/// Builds the application router
///
/// Used by both the binary and the integration tests so the two always
/// agree on the route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Employee routes
        .route("/employees", get(handlers::employees::list_employees))
        .route("/employees", post(handlers::employees::create_employee))
        .route("/employees/:id", get(handlers::employees::get_employee))
        .route("/employees/:id", put(handlers::employees::update_employee))
        .route("/employees/:id", delete(handlers::employees::delete_employee))
        .route(
            "/employees/bulk-delete",
            post(handlers::employees::bulk_delete_employees),
        )
        // Team routes
        .route("/teams", get(handlers::teams::list_teams))
        .route("/teams", post(handlers::teams::create_team))
        // Shared state
        .with_state(state)
}
