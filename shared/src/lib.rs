// shared/src/lib.rs

pub mod config;

/// Unique identifier for an employee row. Assigned by the record store on
/// insert and immutable afterwards.
pub type EmployeeId = u64;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no employee record for id {0}")]
    NotFound(EmployeeId),
    #[error("employee record already exists for id {0}")]
    Conflict(EmployeeId),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
