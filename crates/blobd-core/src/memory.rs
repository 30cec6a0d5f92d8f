//! The in-memory storage engine.

use std::collections::HashMap;

use bytes::Bytes;
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::storage::{ObjectStorage, PutOutcome};

/// A single bucket: an object table behind its own read-write lock.
#[derive(Debug, Default)]
struct Bucket {
    objects: RwLock<HashMap<String, Bytes>>,
}

/// In-memory object store.
///
/// Buckets live in a sharded concurrent map keyed by name; each bucket
/// guards its object table with its own lock, so operations on
/// different buckets never contend. Lock order is always the bucket
/// map first, then the bucket lock.
///
/// Buckets are created implicitly by the first put that addresses them
/// and are never removed, not even when their last object is deleted.
///
/// The store holds no global state: construct one and share it behind
/// an `Arc`.
#[derive(Default)]
pub struct InMemoryStorage {
    buckets: DashMap<String, Bucket>,
}

impl std::fmt::Debug for InMemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStorage")
            .field("bucket_count", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl InMemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buckets created so far.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Whether a bucket has been created.
    #[must_use]
    pub fn bucket_exists(&self, bucket: &str) -> bool {
        self.buckets.contains_key(bucket)
    }

    /// Number of objects in a bucket, or `None` if the bucket does not
    /// exist.
    #[must_use]
    pub fn object_count(&self, bucket: &str) -> Option<usize> {
        self.buckets
            .get(bucket)
            .map(|bucket_ref| bucket_ref.objects.read().len())
    }
}

impl ObjectStorage for InMemoryStorage {
    fn put(&self, bucket: &str, object_id: &str, data: Bytes) -> StoreResult<PutOutcome> {
        // or_insert_with runs under the shard lock, so the creation log
        // fires exactly once per bucket.
        let bucket_ref = self.buckets.entry(bucket.to_owned()).or_insert_with(|| {
            debug!(bucket = %bucket, "bucket created");
            Bucket::default()
        });

        // Compare and mutate under one write lock: racing puts of
        // different content can never interleave.
        let mut objects = bucket_ref.objects.write();
        let outcome = match objects.get(object_id) {
            Some(existing) if *existing == data => PutOutcome::Deduplicated,
            Some(_) => PutOutcome::Overwritten,
            None => PutOutcome::Created,
        };
        if outcome.changed() {
            objects.insert(object_id.to_owned(), data);
        }
        debug!(bucket = %bucket, object_id = %object_id, outcome = ?outcome, "put object");
        Ok(outcome)
    }

    fn get(&self, bucket: &str, object_id: &str) -> StoreResult<Bytes> {
        let bucket_ref = self
            .buckets
            .get(bucket)
            .ok_or_else(|| StoreError::not_found(bucket, object_id))?;
        let objects = bucket_ref.objects.read();
        objects
            .get(object_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(bucket, object_id))
    }

    fn delete(&self, bucket: &str, object_id: &str) -> StoreResult<()> {
        let bucket_ref = self
            .buckets
            .get(bucket)
            .ok_or_else(|| StoreError::not_found(bucket, object_id))?;
        let mut objects = bucket_ref.objects.write();
        if objects.remove(object_id).is_none() {
            return Err(StoreError::not_found(bucket, object_id));
        }
        debug!(bucket = %bucket, object_id = %object_id, "deleted object");
        Ok(())
    }
}
