use roster::domain::{Employee, EmployeeDraft};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// === Employee Models ===

/// Employee record as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Grace Hopper")]
    pub name: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 4200.0)]
    pub salary: f64,
}

/// POST payload. `id` may be omitted to let the store assign one.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub department: String,
    pub salary: f64,
}

// === Health Models ===

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            department: employee.department,
            salary: employee.salary,
        }
    }
}

impl From<EmployeeDto> for Employee {
    fn from(dto: EmployeeDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            department: dto.department,
            salary: dto.salary,
        }
    }
}

impl From<CreateEmployeeRequest> for EmployeeDraft {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            department: req.department,
            salary: req.salary,
        }
    }
}
