use crate::error::{ApiError, ApiResult};
use crate::models::{CreateEmployeeRequest, EmployeeDto};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shared::EmployeeId;
use tracing::debug;

/// GET /api/v1/employees
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All existing employee records", body = [EmployeeDto]),
        (status = 500, description = "Store failure", body = ApiError),
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<EmployeeDto>>> {
    debug!("listing all employees");

    let employees = state.employees.list().await?;
    Ok(Json(employees.into_iter().map(EmployeeDto::from).collect()))
}

/// GET /api/v1/employees/{id}
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    params(
        ("id" = u64, Path, description = "Employee id"),
    ),
    responses(
        (status = 200, description = "The employee record for the given id", body = EmployeeDto),
        (status = 404, description = "No employee record for the given id", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError),
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> ApiResult<Json<EmployeeDto>> {
    debug!(id, "fetching employee");

    let employee = state.employees.get(id).await?;
    Ok(Json(employee.into()))
}

/// POST /api/v1/employees
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee record created"),
        (status = 409, description = "An employee record already exists for the given id", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError),
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> ApiResult<StatusCode> {
    debug!(id = req.id, "saving employee");

    let employee = state.employees.create(req.into()).await?;
    debug!(id = employee.id, "employee record added");
    Ok(StatusCode::CREATED)
}

/// PUT /api/v1/employees/{id}
#[utoipa::path(
    put,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    params(
        ("id" = u64, Path, description = "Employee id"),
    ),
    request_body = EmployeeDto,
    responses(
        (status = 204, description = "Employee record updated"),
        (status = 400, description = "Payload id does not match the path id", body = ApiError),
        (status = 404, description = "No employee record for the given id", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError),
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    Json(req): Json<EmployeeDto>,
) -> ApiResult<StatusCode> {
    debug!(id, "updating employee");

    state.employees.update(id, req.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/employees/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    params(
        ("id" = u64, Path, description = "Employee id"),
    ),
    responses(
        (status = 200, description = "Employee record deleted"),
        (status = 404, description = "No employee record for the given id", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError),
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> ApiResult<StatusCode> {
    debug!(id, "deleting employee");

    state.employees.delete(id).await?;
    Ok(StatusCode::OK)
}
