use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use ahash::RandomState;
use dashmap::DashMap;
use tracing::debug;

use crate::document::Document;
use crate::error::Result;
use crate::index::{build_index_with, IndexConfig, RankerHandle};

// fixed seeds so a fingerprint is stable for the life of the process and across instances
const FINGERPRINT_SEEDS: (u64, u64, u64, u64) = (
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
);

/// Content hash of an ordered document collection
pub fn corpus_fingerprint<K: Hash>(documents: &[Document<K>]) -> u64 {
    let (a, b, c, d) = FINGERPRINT_SEEDS;
    BuildHasher::hash_one(&RandomState::with_seeds(a, b, c, d), documents)
}

/// Memoizes `build_index_with` by corpus content.
///
/// A changed corpus hashes differently and gets its own handle, so stale
/// results are never served for new data. Thread-safe.
#[derive(Debug)]
pub struct IndexCache<K>
where
    K: Clone + Eq + Hash,
{
    config: IndexConfig,
    entries: DashMap<u64, Arc<RankerHandle<K>>, RandomState>,
}

impl<K> IndexCache<K>
where
    K: Clone + Eq + Hash + Debug + Send + Sync,
{
    pub fn new(config: IndexConfig) -> Self {
        Self {
            config,
            entries: DashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Cached handle for `documents`, building it on first request.
    /// Build errors are returned and nothing is cached.
    pub fn get_or_build(&self, documents: &[Document<K>]) -> Result<Arc<RankerHandle<K>>> {
        let key = corpus_fingerprint(documents);
        if let Some(handle) = self.entries.get(&key) {
            debug!(fingerprint = key, "Index cache hit");
            return Ok(Arc::clone(handle.value()));
        }

        let built = Arc::new(build_index_with(documents, &self.config)?);
        // another thread may have raced us; keep whichever landed first
        let handle = self.entries.entry(key).or_insert(built);
        Ok(Arc::clone(handle.value()))
    }

    /// Drop the handle built for `documents`, if any
    pub fn invalidate(&self, documents: &[Document<K>]) -> bool {
        self.entries.remove(&corpus_fingerprint(documents)).is_some()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K> Default for IndexCache<K>
where
    K: Clone + Eq + Hash + Debug + Send + Sync,
{
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}
