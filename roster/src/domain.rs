use serde::{Deserialize, Serialize};
use shared::EmployeeId;

/// A single employee row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub salary: f64,
}

/// Creation payload. The record store assigns the next free id when `id`
/// is `None`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub id: Option<EmployeeId>,
    pub name: String,
    pub department: String,
    pub salary: f64,
}

impl EmployeeDraft {
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            department: self.department,
            salary: self.salary,
        }
    }
}

/// Keys for the employee cache: one entry per id plus a single entry for
/// the full listing.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum CacheKey {
    All,
    Id(EmployeeId),
}

#[derive(Clone, Debug)]
pub enum CacheEntry {
    Listing(Vec<Employee>),
    Single(Employee),
}
