use async_trait::async_trait;
use moka::future::Cache;
use roster::ports::CacheStore;
use std::fmt::Debug;
use std::hash::Hash;

/// Moka-based cache implementation.
/// Lock-free and concurrent; unbounded with no TTL, which is acceptable for
/// the single-process, small-record-count scope. Eviction is explicit and
/// driven by the caller.
pub struct MokaCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    cache: Cache<K, V>,
}

impl<K, V> MokaCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a new unbounded Moka cache.
    pub fn new_unbounded() -> Self {
        Self {
            cache: Cache::builder().build(),
        }
    }
}

#[async_trait]
impl<K, V> CacheStore<K, V> for MokaCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        self.cache.get(key).await
    }

    async fn put(&self, key: K, val: V) {
        self.cache.insert(key, val).await;
    }

    async fn remove(&self, key: &K) {
        self.cache.remove(key).await;
    }
}

impl<K, V> Debug for MokaCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCache")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}
