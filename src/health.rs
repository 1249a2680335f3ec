use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

/// Liveness probe. Deliberately touches nothing: it answers 200 whether or
/// not the database is reachable.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Employee API is running",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
