use roster::domain::{CacheEntry, CacheKey};
use roster::persistence::SledEmployeeStore;
use roster::ports::StoreError;
use roster::service::EmployeeService;
use std::path::Path;
use std::sync::Arc;
use storage_engine::MokaCache;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
}

impl AppState {
    /// Wire the employee service to a sled store under `data_dir` and a
    /// fresh unbounded cache. The cache is owned by this state and lives
    /// exactly as long as it; nothing survives a restart.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Arc::new(SledEmployeeStore::new(
            data_dir.as_ref().join("employees.sled"),
        )?);
        let cache: Arc<MokaCache<CacheKey, CacheEntry>> = Arc::new(MokaCache::new_unbounded());

        Ok(Self {
            employees: EmployeeService::new(store, cache),
        })
    }
}
