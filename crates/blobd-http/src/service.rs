//! The main HTTP service implementing hyper's `Service` trait.
//!
//! [`HttpService`] ties together routing, store dispatch, and response
//! serialization into a single hyper-compatible service. Per request it
//! handles:
//!
//! 1. Request ID generation (UUID v4)
//! 2. Route resolution via [`resolve_route`]
//! 3. Built-in documents (`/health`, `/docs/openapi.json`)
//! 4. Request body collection (put only)
//! 5. Store dispatch to the [`ObjectStorage`] backend
//! 6. Common response headers (`x-request-id`, `Server`)
//! 7. Error response formatting

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use blobd_core::ObjectStorage;
use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::service::Service;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::body::ResponseBody;
use crate::docs::docs_response;
use crate::error::ApiError;
use crate::health::health_response;
use crate::response::{
    delete_object_response, error_to_response, get_object_response, put_object_response,
};
use crate::router::{Route, resolve_route};

/// Configuration for the HTTP service.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Service name reported in health and documentation responses.
    pub service_name: String,
    /// Service version reported in health and documentation responses.
    pub service_version: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            service_name: "blobd".to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

/// The HTTP service that implements hyper's `Service` trait.
///
/// Holds a shared handle to the storage backend; cloning the service
/// clones the handle, not the store, so every connection served from
/// clones of one service observes the same objects.
///
/// # Type Parameters
///
/// - `S`: The storage backend implementing [`ObjectStorage`].
#[derive(Debug)]
pub struct HttpService<S: ObjectStorage> {
    store: Arc<S>,
    config: Arc<HttpConfig>,
}

impl<S: ObjectStorage> HttpService<S> {
    /// Create a new HTTP service owning the given store.
    #[must_use]
    pub fn new(store: S, config: HttpConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Create a new HTTP service from an already shared store.
    #[must_use]
    pub fn from_shared(store: Arc<S>, config: HttpConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

impl<S: ObjectStorage> Clone for HttpService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: ObjectStorage> Service<http::Request<Incoming>> for HttpService<S> {
    type Response = http::Response<ResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let store = Arc::clone(&self.store);
        let config = Arc::clone(&self.config);

        Box::pin(async move {
            let request_id = Uuid::new_v4().to_string();

            let response = process_request(req, store.as_ref(), &config, &request_id).await;
            let response = add_common_headers(response, &request_id);

            Ok(response)
        })
    }
}

/// Process an incoming HTTP request through the full pipeline.
async fn process_request<S, B>(
    req: http::Request<B>,
    store: &S,
    config: &HttpConfig,
    request_id: &str,
) -> http::Response<ResponseBody>
where
    S: ObjectStorage,
    B: http_body::Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let uri = req.uri().clone();
    debug!(%method, %uri, request_id, "processing request");

    let route = match resolve_route(&method, uri.path()) {
        Ok(route) => route,
        Err(err) => {
            warn!(%method, %uri, error = %err, request_id, "failed to route request");
            return error_to_response(&err);
        }
    };

    match route {
        Route::Health => health_response(config),
        Route::ApiDocs => docs_response(config),
        Route::PutObject { bucket, object_id } => {
            put_object(req, store, &bucket, &object_id, request_id).await
        }
        Route::GetObject { bucket, object_id } => {
            get_object(store, &bucket, &object_id, request_id)
        }
        Route::DeleteObject { bucket, object_id } => {
            delete_object(store, &bucket, &object_id, request_id)
        }
    }
}

/// Handle `PUT /objects/{bucket}/{objectID}`.
async fn put_object<S, B>(
    req: http::Request<B>,
    store: &S,
    bucket: &str,
    object_id: &str,
    request_id: &str,
) -> http::Response<ResponseBody>
where
    S: ObjectStorage,
    B: http_body::Body,
    B::Error: std::fmt::Display,
{
    let body = match collect_body(req.into_body()).await {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, request_id, "failed to collect request body");
            return error_to_response(&ApiError::invalid_request("failed to read request body"));
        }
    };

    match store.put(bucket, object_id, body) {
        Ok(outcome) => {
            info!(
                bucket = %bucket,
                object_id = %object_id,
                outcome = ?outcome,
                request_id,
                "stored object"
            );
            put_object_response(object_id).unwrap_or_else(|err| error_to_response(&err))
        }
        Err(err) => {
            error!(
                bucket = %bucket,
                object_id = %object_id,
                error = %err,
                request_id,
                "failed to store object"
            );
            error_to_response(&ApiError::from(err))
        }
    }
}

/// Handle `GET /objects/{bucket}/{objectID}`.
fn get_object<S: ObjectStorage>(
    store: &S,
    bucket: &str,
    object_id: &str,
    request_id: &str,
) -> http::Response<ResponseBody> {
    match store.get(bucket, object_id) {
        Ok(data) => {
            debug!(
                bucket = %bucket,
                object_id = %object_id,
                size = data.len(),
                request_id,
                "read object"
            );
            get_object_response(data).unwrap_or_else(|err| error_to_response(&err))
        }
        Err(err) => {
            debug!(bucket = %bucket, object_id = %object_id, error = %err, request_id, "read failed");
            error_to_response(&ApiError::from(err))
        }
    }
}

/// Handle `DELETE /objects/{bucket}/{objectID}`.
fn delete_object<S: ObjectStorage>(
    store: &S,
    bucket: &str,
    object_id: &str,
    request_id: &str,
) -> http::Response<ResponseBody> {
    match store.delete(bucket, object_id) {
        Ok(()) => {
            info!(bucket = %bucket, object_id = %object_id, request_id, "deleted object");
            delete_object_response().unwrap_or_else(|err| error_to_response(&err))
        }
        Err(err) => {
            debug!(bucket = %bucket, object_id = %object_id, error = %err, request_id, "delete failed");
            error_to_response(&ApiError::from(err))
        }
    }
}

/// Collect the full request body into `Bytes`.
async fn collect_body<B>(body: B) -> Result<Bytes, B::Error>
where
    B: http_body::Body,
{
    let collected = body.collect().await?;
    Ok(collected.to_bytes())
}

/// Add common response headers to every response.
fn add_common_headers(
    mut response: http::Response<ResponseBody>,
    request_id: &str,
) -> http::Response<ResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::header::HeaderValue::from_str(request_id) {
        headers.insert("x-request-id", hv);
    }
    headers.insert("Server", http::header::HeaderValue::from_static("blobd"));

    response
}
