//! Store results to HTTP response serialization.
//!
//! Success responses:
//! - **Put**: 201 Created with a small JSON body naming the stored ID.
//! - **Get**: 200 OK with the payload as `application/octet-stream`.
//! - **Delete**: 200 OK with an empty body.
//!
//! Error responses carry a JSON `{code, message}` body; the status code
//! comes from the [`ApiError`] itself.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::body::ResponseBody;
use crate::error::{ApiError, ApiResult};

/// JSON body returned by a successful put.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutObjectBody {
    /// The object ID the payload was stored under.
    pub id: String,
}

/// JSON body carried by error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Wire-level error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Build the 201 Created response for a stored object.
///
/// # Errors
///
/// Returns an `ApiError` if the response cannot be constructed.
pub fn put_object_response(object_id: &str) -> ApiResult<http::Response<ResponseBody>> {
    let body = serde_json::to_vec(&PutObjectBody {
        id: object_id.to_owned(),
    })
    .map_err(|e| ApiError::internal_error(format!("failed to serialize response body: {e}")))?;

    let builder = http::Response::builder()
        .status(http::StatusCode::CREATED)
        .header("Content-Type", "application/json");
    build_response(builder, ResponseBody::from_bytes(body))
}

/// Build the 200 OK response carrying stored object content.
///
/// # Errors
///
/// Returns an `ApiError` if the response cannot be constructed.
pub fn get_object_response(data: Bytes) -> ApiResult<http::Response<ResponseBody>> {
    let builder = http::Response::builder()
        .status(http::StatusCode::OK)
        .header("Content-Type", "application/octet-stream");
    build_response(builder, ResponseBody::from_bytes(data))
}

/// Build the 200 OK response confirming a delete.
///
/// # Errors
///
/// Returns an `ApiError` if the response cannot be constructed.
pub fn delete_object_response() -> ApiResult<http::Response<ResponseBody>> {
    build_response(
        http::Response::builder().status(http::StatusCode::OK),
        ResponseBody::empty(),
    )
}

/// Build a response from a builder, converting build errors to `ApiError`.
fn build_response(
    builder: http::response::Builder,
    body: ResponseBody,
) -> ApiResult<http::Response<ResponseBody>> {
    builder
        .body(body)
        .map_err(|e| ApiError::internal_error(format!("failed to build HTTP response: {e}")))
}

/// Convert an `ApiError` into an HTTP error response with a JSON body.
#[must_use]
pub fn error_to_response(err: &ApiError) -> http::Response<ResponseBody> {
    let body = match serde_json::to_vec(&ErrorBody {
        code: err.code.as_str().to_owned(),
        message: err.message.clone(),
    }) {
        Ok(bytes) => ResponseBody::from_bytes(bytes),
        Err(_) => ResponseBody::empty(),
    };
    json_response(err.status_code, body)
}

/// Build a JSON response, falling back to an empty 500 if construction
/// fails.
pub(crate) fn json_response(
    status: http::StatusCode,
    body: ResponseBody,
) -> http::Response<ResponseBody> {
    http::Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(body)
        .unwrap_or_else(|_| {
            http::Response::builder()
                .status(http::StatusCode::INTERNAL_SERVER_ERROR)
                .body(ResponseBody::empty())
                .expect("static response should be valid")
        })
}
