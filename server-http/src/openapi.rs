//! OpenAPI document for the employee API, generated from the route
//! annotations and served through Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode};
use crate::handlers::{employees, health};
use crate::models::{CreateEmployeeRequest, EmployeeDto, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "CRUD service for employee records with a process-local cache",
        license(name = "MIT")
    ),
    tags(
        (name = "Employees", description = "Employee record management"),
        (name = "Health", description = "Service liveness")
    ),
    paths(
        employees::list_employees,
        employees::get_employee,
        employees::create_employee,
        employees::update_employee,
        employees::delete_employee,
        health::health_check,
    ),
    components(schemas(
        EmployeeDto,
        CreateEmployeeRequest,
        HealthResponse,
        ApiError,
        ErrorCode,
    ))
)]
pub struct ApiDoc;
