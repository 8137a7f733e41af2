use crate::domain::{CacheEntry, CacheKey, Employee, EmployeeDraft};
use crate::ports::{CacheStore, EmployeeStore, StoreError};
use shared::{EmployeeId, Error, Result};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Orchestrates the record store and the cache layer, and owns the CRUD
/// invariants: an id must exist before update/delete and must not already
/// exist before create.
///
/// The cache is cache-aside: entries are written after a successful store
/// operation and evicted on delete. A read racing a concurrent delete can
/// momentarily serve a stale entry; last writer wins.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
    cache: Arc<dyn CacheStore<CacheKey, CacheEntry>>,
}

impl EmployeeService {
    pub fn new(
        store: Arc<dyn EmployeeStore>,
        cache: Arc<dyn CacheStore<CacheKey, CacheEntry>>,
    ) -> Self {
        Self { store, cache }
    }

    /// All employee records, read through the listing cache entry.
    /// An empty store is an empty listing, not an error.
    pub async fn list(&self) -> Result<Vec<Employee>> {
        if let Some(CacheEntry::Listing(employees)) = self.cache.get(&CacheKey::All).await {
            debug!("serving employee listing from cache");
            return Ok(employees);
        }

        let employees = self
            .store
            .find_all()
            .await
            .map_err(|e| internal("list", e))?;
        if employees.is_empty() {
            warn!("no employee records found");
        }

        self.cache
            .put(CacheKey::All, CacheEntry::Listing(employees.clone()))
            .await;
        Ok(employees)
    }

    /// The employee for `id`, or `Error::NotFound`.
    pub async fn get(&self, id: EmployeeId) -> Result<Employee> {
        if let Some(CacheEntry::Single(employee)) = self.cache.get(&CacheKey::Id(id)).await {
            debug!(id, "serving employee from cache");
            return Ok(employee);
        }

        let employee = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| internal("get", e))?
            .ok_or(Error::NotFound(id))?;

        self.cache
            .put(CacheKey::Id(id), CacheEntry::Single(employee.clone()))
            .await;
        Ok(employee)
    }

    /// Insert a new record. Fails with `Error::Conflict` when the draft
    /// carries an id that is already taken; the store assigns one when the
    /// draft has none.
    pub async fn create(&self, draft: EmployeeDraft) -> Result<Employee> {
        if let Some(id) = draft.id {
            let existing = self
                .store
                .find_by_id(id)
                .await
                .map_err(|e| internal("create", e))?;
            if existing.is_some() {
                return Err(Error::Conflict(id));
            }
        }

        let employee = self
            .store
            .insert(draft)
            .await
            .map_err(|e| internal("create", e))?;
        info!(id = employee.id, "employee record created");

        self.cache
            .put(
                CacheKey::Id(employee.id),
                CacheEntry::Single(employee.clone()),
            )
            .await;
        // A cached listing would now be missing the new row.
        self.cache.remove(&CacheKey::All).await;

        Ok(employee)
    }

    /// Persist the full incoming payload for an existing record. Fails with
    /// `Error::BadRequest` when the payload's embedded id does not match
    /// `id` (checked before any store access), and `Error::NotFound` when
    /// no record exists for `id`.
    pub async fn update(&self, id: EmployeeId, employee: Employee) -> Result<Employee> {
        if employee.id != id {
            return Err(Error::BadRequest(format!(
                "payload id {} does not match path id {id}",
                employee.id
            )));
        }

        let existing = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| internal("update", e))?;
        if existing.is_none() {
            return Err(Error::NotFound(id));
        }

        let employee = self
            .store
            .update(employee)
            .await
            .map_err(|e| internal("update", e))?;
        info!(id, "employee record updated");

        // Cache reflects post-write state.
        self.cache
            .put(CacheKey::Id(id), CacheEntry::Single(employee.clone()))
            .await;
        self.cache.remove(&CacheKey::All).await;

        Ok(employee)
    }

    /// Remove the record for `id`, or fail with `Error::NotFound`.
    pub async fn delete(&self, id: EmployeeId) -> Result<()> {
        let removed = self
            .store
            .remove(id)
            .await
            .map_err(|e| internal("delete", e))?;
        if !removed {
            return Err(Error::NotFound(id));
        }
        info!(id, "employee record deleted");

        self.cache.remove(&CacheKey::Id(id)).await;
        self.cache.remove(&CacheKey::All).await;

        Ok(())
    }
}

/// Store failures are logged once, here, and normalized into `Internal`.
/// Domain errors never pass through this path.
fn internal(op: &str, err: StoreError) -> Error {
    error!("employee store failure during {op}: {err}");
    Error::Internal(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::SledEmployeeStore;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Plain map-backed cache so tests can assert on exact contents.
    #[derive(Default)]
    struct MemoryCache {
        entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    }

    impl MemoryCache {
        fn contains(&self, key: &CacheKey) -> bool {
            self.entries.lock().unwrap().contains_key(key)
        }

        fn single(&self, id: EmployeeId) -> Option<Employee> {
            match self.entries.lock().unwrap().get(&CacheKey::Id(id)) {
                Some(CacheEntry::Single(e)) => Some(e.clone()),
                _ => None,
            }
        }
    }

    #[async_trait]
    impl CacheStore<CacheKey, CacheEntry> for MemoryCache {
        async fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        async fn put(&self, key: CacheKey, val: CacheEntry) {
            self.entries.lock().unwrap().insert(key, val);
        }

        async fn remove(&self, key: &CacheKey) {
            self.entries.lock().unwrap().remove(key);
        }
    }

    /// Store double whose every operation fails, for exercising error
    /// normalization.
    struct FailingStore;

    fn backend_down() -> StoreError {
        StoreError::Io(std::io::Error::other("backend down"))
    }

    // `super::*` brings the one-parameter `shared::Result` alias into
    // scope, so these signatures spell out the std form.
    #[async_trait]
    impl EmployeeStore for FailingStore {
        async fn find_by_id(
            &self,
            _id: EmployeeId,
        ) -> std::result::Result<Option<Employee>, StoreError> {
            Err(backend_down())
        }

        async fn find_all(&self) -> std::result::Result<Vec<Employee>, StoreError> {
            Err(backend_down())
        }

        async fn insert(&self, _draft: EmployeeDraft) -> std::result::Result<Employee, StoreError> {
            Err(backend_down())
        }

        async fn update(&self, _employee: Employee) -> std::result::Result<Employee, StoreError> {
            Err(backend_down())
        }

        async fn remove(&self, _id: EmployeeId) -> std::result::Result<bool, StoreError> {
            Err(backend_down())
        }
    }

    fn service() -> (EmployeeService, Arc<MemoryCache>, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = Arc::new(SledEmployeeStore::new(temp_dir.path().join("employees.sled")).unwrap());
        let cache = Arc::new(MemoryCache::default());
        (
            EmployeeService::new(store, cache.clone()),
            cache,
            temp_dir,
        )
    }

    fn draft(id: Option<EmployeeId>, name: &str) -> EmployeeDraft {
        EmployeeDraft {
            id,
            name: name.to_string(),
            department: "Engineering".to_string(),
            salary: 1000.0,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equivalent_record() {
        let (service, _cache, _dir) = service();

        let created = service.create(draft(Some(1), "A")).await.unwrap();
        let fetched = service.get(1).await.unwrap();

        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let (service, _cache, _dir) = service();

        let err = service.get(99).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(99)));
    }

    #[tokio::test]
    async fn create_assigns_id_when_draft_has_none() {
        let (service, cache, _dir) = service();

        let created = service.create(draft(None, "A")).await.unwrap();

        assert_eq!(created.id, 1);
        // The per-id entry is established on create.
        assert_eq!(cache.single(1), Some(created));
    }

    #[tokio::test]
    async fn duplicate_create_is_conflict_and_leaves_record_unchanged() {
        let (service, _cache, _dir) = service();

        let original = service.create(draft(Some(1), "A")).await.unwrap();
        let err = service.create(draft(Some(1), "B")).await.unwrap_err();

        assert!(matches!(err, Error::Conflict(1)));
        assert_eq!(service.get(1).await.unwrap(), original);
    }

    #[tokio::test]
    async fn update_with_mismatched_id_is_bad_request_without_mutation() {
        let (service, _cache, _dir) = service();

        let original = service.create(draft(Some(2), "A")).await.unwrap();
        let payload = Employee {
            id: 3,
            name: "B".to_string(),
            department: "Sales".to_string(),
            salary: 2000.0,
        };

        let err = service.update(2, payload).await.unwrap_err();

        assert!(matches!(err, Error::BadRequest(_)));
        assert_eq!(service.get(2).await.unwrap(), original);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let (service, _cache, _dir) = service();

        let payload = Employee {
            id: 5,
            name: "B".to_string(),
            department: "Sales".to_string(),
            salary: 2000.0,
        };
        let err = service.update(5, payload).await.unwrap_err();

        assert!(matches!(err, Error::NotFound(5)));
    }

    #[tokio::test]
    async fn update_persists_full_payload_and_refreshes_cache() {
        let (service, cache, _dir) = service();

        service.create(draft(Some(1), "A")).await.unwrap();
        let payload = Employee {
            id: 1,
            name: "A2".to_string(),
            department: "Sales".to_string(),
            salary: 2500.0,
        };

        let updated = service.update(1, payload.clone()).await.unwrap();

        assert_eq!(updated, payload);
        assert_eq!(cache.single(1), Some(payload.clone()));
        assert_eq!(service.get(1).await.unwrap(), payload);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (service, cache, _dir) = service();

        service.create(draft(Some(1), "A")).await.unwrap();
        service.delete(1).await.unwrap();

        assert!(!cache.contains(&CacheKey::Id(1)));
        let err = service.get(1).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(1)));
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let (service, _cache, _dir) = service();

        let err = service.delete(99).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(99)));
    }

    #[tokio::test]
    async fn empty_store_lists_as_empty_collection() {
        let (service, _cache, _dir) = service();

        let employees = service.list().await.unwrap();
        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn list_is_served_from_cache_once_populated() {
        let (service, cache, _dir) = service();

        service.create(draft(Some(1), "A")).await.unwrap();
        let first = service.list().await.unwrap();
        assert!(cache.contains(&CacheKey::All));

        // Poison the listing entry; a second list must come from the cache.
        cache
            .put(CacheKey::All, CacheEntry::Listing(Vec::new()))
            .await;
        let second = service.list().await.unwrap();

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn writes_evict_the_listing_entry() {
        let (service, cache, _dir) = service();

        service.create(draft(Some(1), "A")).await.unwrap();
        service.list().await.unwrap();
        assert!(cache.contains(&CacheKey::All));

        service.create(draft(Some(2), "B")).await.unwrap();
        assert!(!cache.contains(&CacheKey::All));

        // The refreshed listing reflects both rows.
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn store_failures_are_normalized_to_internal() {
        let cache = Arc::new(MemoryCache::default());
        let service = EmployeeService::new(Arc::new(FailingStore), cache);

        assert!(matches!(service.list().await.unwrap_err(), Error::Internal(_)));
        assert!(matches!(service.get(1).await.unwrap_err(), Error::Internal(_)));
        assert!(matches!(
            service.create(draft(Some(1), "A")).await.unwrap_err(),
            Error::Internal(_)
        ));
        assert!(matches!(
            service.delete(1).await.unwrap_err(),
            Error::Internal(_)
        ));
    }
}
