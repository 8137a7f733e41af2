#![deny(clippy::all)]

use crate::domain::{Employee, EmployeeDraft};
use async_trait::async_trait;
use shared::EmployeeId;

// Ports are the pluggable extension points for the record store and cache
// backends.

/// Failures surfacing from a record store backend. The service layer wraps
/// these into `shared::Error::Internal`; they never cross the HTTP boundary
/// in raw form.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("storage backend: {0}")]
    Backend(#[from] sled::Error),
    #[error("row codec: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("employee id space exhausted")]
    IdsExhausted,
}

/// Port for the employee record store.
#[async_trait]
pub trait EmployeeStore: Send + Sync + 'static {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;
    /// Insert a new row, assigning the next id when the draft has none.
    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, StoreError>;
    /// Overwrite the row matching `employee.id` with the full payload.
    async fn update(&self, employee: Employee) -> Result<Employee, StoreError>;
    /// Remove the row for `id`, reporting whether it existed.
    async fn remove(&self, id: EmployeeId) -> Result<bool, StoreError>;
}

/// Port for cache implementations. The cache is process-local, so the
/// operations are infallible by contract; a miss is `None`, not an error.
#[async_trait]
pub trait CacheStore<K, V>: Send + Sync + 'static {
    async fn get(&self, key: &K) -> Option<V>;
    async fn put(&self, key: K, val: V);
    async fn remove(&self, key: &K);
}
