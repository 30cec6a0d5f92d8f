//! HTTP adapter for the blobd object store.
//!
//! This crate turns HTTP traffic into [`blobd_core::ObjectStorage`]
//! calls and store results back into wire responses. It owns routing,
//! response and error serialization, and the hyper service that ties
//! them together; it does not bind sockets or run an accept loop (the
//! server binary does that).
//!
//! # Architecture
//!
//! ```text
//!   hyper connection
//!          |
//!          v
//!   HttpService<S>            per-request UUID, common headers
//!          |
//!          v
//!   resolve_route()           method + path -> Route
//!          |
//!          v
//!   store dispatch            ObjectStorage::{put, get, delete}
//!     |            |
//!     v            v
//!   response.rs  error.rs     success bodies / JSON error bodies
//! ```
//!
//! # Routes
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | PUT | `/objects/{bucket}/{objectID}` | 201, `{"id": "<objectID>"}` |
//! | GET | `/objects/{bucket}/{objectID}` | 200, stored payload |
//! | DELETE | `/objects/{bucket}/{objectID}` | 200, empty |
//! | GET | `/health` | 200, health document |
//! | GET | `/docs/openapi.json` | 200, OpenAPI document |

pub mod body;
pub mod docs;
pub mod error;
pub mod health;
pub mod response;
pub mod router;
pub mod service;

pub use body::ResponseBody;
pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use health::HealthStatus;
pub use router::{Route, resolve_route};
pub use service::{HttpConfig, HttpService};
