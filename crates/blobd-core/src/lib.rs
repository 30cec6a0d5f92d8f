//! In-memory object storage engine for blobd.
//!
//! This crate owns the storage contract and its single in-process
//! implementation. Objects are opaque byte payloads addressed by a
//! `(bucket, object ID)` pair; buckets spring into existence on first
//! write and are never removed.
//!
//! # Architecture
//!
//! ```text
//! callers (HTTP adapter, tests)
//!          |
//!          v
//!   ObjectStorage (trait)
//!          |
//!          v
//!   InMemoryStorage
//!     DashMap<String, Bucket>          sharded bucket map
//!          |
//!          v
//!   Bucket
//!     RwLock<HashMap<String, Bytes>>   per-bucket object table
//! ```
//!
//! Reads on a bucket run concurrently; writes are exclusive per bucket.
//! A put that finds byte-identical content already stored is a no-op,
//! reported as [`PutOutcome::Deduplicated`].

mod error;
mod memory;
mod storage;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStorage;
pub use storage::{ObjectStorage, PutOutcome};
