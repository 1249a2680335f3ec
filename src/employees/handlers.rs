use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{info, instrument, warn};

use crate::error::{AppError, AppJson};
use crate::state::AppState;

use super::dto::{
    CreateEmployeeRequest, CreateEmployeeResponse, EmployeeListResponse, EmployeeResponse,
};
use super::repo::Employee;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/:id", get(get_employee))
}

#[instrument(skip(state, payload))]
pub async fn create_employee(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<CreateEmployeeResponse>), AppError> {
    let new = payload.validate().map_err(|e| {
        warn!(error = %e, "create employee rejected");
        e
    })?;

    let id = Employee::insert(&state.db, &new).await.map_err(|e| {
        if e.as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation())
        {
            warn!(email = %new.email, "duplicate email");
            AppError::Conflict("Email already exists".into())
        } else {
            AppError::Database(e)
        }
    })?;

    // Re-read so the response carries the DB-assigned timestamps.
    let employee = Employee::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;

    info!(employee_id = id, "employee added");
    Ok((
        StatusCode::CREATED,
        Json(CreateEmployeeResponse {
            message: "Employee added successfully",
            employee,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = Employee::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".into()))?;

    info!(employee_id = id, "employee retrieved");
    Ok(Json(EmployeeResponse { employee }))
}

#[instrument(skip(state))]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<EmployeeListResponse>, AppError> {
    let employees = Employee::list_all(&state.db).await?;
    let count = employees.len();

    info!(count, "employees retrieved");
    Ok(Json(EmployeeListResponse { employees, count }))
}
