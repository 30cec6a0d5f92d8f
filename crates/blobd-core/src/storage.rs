//! The object storage contract.

use bytes::Bytes;

use crate::error::StoreResult;

/// What a put did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// The object did not exist and was created.
    Created,
    /// The object existed with different content and was replaced.
    Overwritten,
    /// The object existed with byte-identical content; nothing was written.
    Deduplicated,
}

impl PutOutcome {
    /// Whether the put mutated the store.
    ///
    /// `false` only for [`PutOutcome::Deduplicated`]; creation and
    /// replacement both count as a change.
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Self::Deduplicated)
    }
}

/// Contract implemented by object store backends.
///
/// Implementations must be safe to share across threads behind an
/// `Arc`: reads of the same bucket may run concurrently, while each
/// write observes and mutates the bucket atomically. In particular the
/// content comparison a put performs and the mutation it decides on
/// happen in one critical section, so two racing puts of different
/// content can never interleave into a torn object.
pub trait ObjectStorage: Send + Sync + 'static {
    /// Store `data` under `(bucket, object_id)`.
    ///
    /// The bucket is created if it does not exist yet. If the object
    /// already holds byte-identical content the call is a no-op and
    /// reports [`PutOutcome::Deduplicated`]; otherwise the content is
    /// created or replaced.
    ///
    /// # Errors
    ///
    /// Backend-specific. The in-memory engine never fails a put.
    fn put(&self, bucket: &str, object_id: &str, data: Bytes) -> StoreResult<PutOutcome>;

    /// Fetch the content stored under `(bucket, object_id)`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) when the
    /// bucket or the object does not exist.
    fn get(&self, bucket: &str, object_id: &str) -> StoreResult<Bytes>;

    /// Remove the object stored under `(bucket, object_id)`.
    ///
    /// The bucket itself survives, even when its last object is
    /// removed.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) when the
    /// bucket or the object does not exist.
    fn delete(&self, bucket: &str, object_id: &str) -> StoreResult<()>;
}
