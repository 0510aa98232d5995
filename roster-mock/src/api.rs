//! Employee API handlers

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use shared::Employee;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::MockState;
use crate::error::{MockError, MockResult};

/// Employee router
pub fn router() -> Router<Arc<MockState>> {
    Router::new()
        .route("/employees", get(list).post(create))
        .route(
            "/employees/{id}",
            get(get_by_id).put(update).delete(delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// List all employees
pub async fn list(State(state): State<Arc<MockState>>) -> Json<Vec<Employee>> {
    Json(state.list().await)
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
) -> MockResult<Json<Employee>> {
    state.get(id).await.map(Json).ok_or(MockError::NotFound)
}

/// Create a new employee
pub async fn create(
    State(state): State<Arc<MockState>>,
    Json(payload): Json<Employee>,
) -> MockResult<String> {
    let payload = payload.normalized();
    payload.validate_fields().map_err(MockError::Validation)?;
    let employee = state.insert(payload).await;
    tracing::info!(id = employee.id, "Employee created");
    Ok("Employee created successfully".to_string())
}

/// Update an employee
pub async fn update(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(payload): Json<Employee>,
) -> MockResult<String> {
    let payload = payload.normalized();
    payload.validate_fields().map_err(MockError::Validation)?;
    state.replace(id, payload).await.ok_or(MockError::NotFound)?;
    tracing::info!(id, "Employee updated");
    Ok("Employee updated successfully".to_string())
}

/// Delete an employee
///
/// A missing id is still a 200, with a text body saying so.
pub async fn delete(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> String {
    match state.remove(id).await {
        Some(_) => {
            tracing::info!(id, "Employee deleted");
            "Employee deleted successfully".to_string()
        }
        None => "Employee not found".to_string(),
    }
}
