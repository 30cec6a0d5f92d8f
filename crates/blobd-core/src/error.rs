//! Error types for store operations.

/// Errors produced by object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The addressed object does not exist.
    ///
    /// Returned by get and delete when either the bucket or the object
    /// within it is missing; callers cannot distinguish the two cases.
    #[error("object not found: {bucket}/{object_id}")]
    NotFound {
        /// Bucket that was addressed.
        bucket: String,
        /// Object ID that was addressed.
        object_id: String,
    },

    /// An object with this ID already exists in the bucket.
    ///
    /// Reserved for backends that refuse to overwrite. The in-memory
    /// engine never produces it: its put deduplicates identical content
    /// and replaces differing content instead of failing.
    #[error("object already exists: {bucket}/{object_id}")]
    AlreadyExists {
        /// Bucket that was addressed.
        bucket: String,
        /// Object ID that already exists.
        object_id: String,
    },
}

impl StoreError {
    /// Create a [`StoreError::NotFound`] for the given address.
    #[must_use]
    pub fn not_found(bucket: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self::NotFound {
            bucket: bucket.into(),
            object_id: object_id.into(),
        }
    }

    /// Create a [`StoreError::AlreadyExists`] for the given address.
    #[must_use]
    pub fn already_exists(bucket: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            bucket: bucket.into(),
            object_id: object_id.into(),
        }
    }
}

/// Convenience result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
