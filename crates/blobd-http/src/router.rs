//! Request routing: mapping method and path onto API routes.
//!
//! Object routes take the shape `/objects/{bucket}/{objectID}` with
//! exactly one segment per identifier. Segments are percent-decoded
//! before they reach the store, so IDs may contain spaces, slashes, or
//! any other encoded byte. Empty identifiers do not route.

use http::Method;
use percent_encoding::percent_decode_str;

use crate::error::{ApiError, ApiResult};

/// A resolved route with its percent-decoded path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `PUT /objects/{bucket}/{objectID}`: store the request payload.
    PutObject {
        /// Percent-decoded bucket name.
        bucket: String,
        /// Percent-decoded object ID.
        object_id: String,
    },
    /// `GET /objects/{bucket}/{objectID}`: fetch the stored payload.
    GetObject {
        /// Percent-decoded bucket name.
        bucket: String,
        /// Percent-decoded object ID.
        object_id: String,
    },
    /// `DELETE /objects/{bucket}/{objectID}`: remove the object.
    DeleteObject {
        /// Percent-decoded bucket name.
        bucket: String,
        /// Percent-decoded object ID.
        object_id: String,
    },
    /// `GET /health`: liveness document.
    Health,
    /// `GET /docs/openapi.json`: API description.
    ApiDocs,
}

/// Resolve a request line into a [`Route`].
///
/// # Errors
///
/// [`ApiErrorCode::NotFound`](crate::ApiErrorCode::NotFound) when the
/// path names no known resource,
/// [`ApiErrorCode::MethodNotAllowed`](crate::ApiErrorCode::MethodNotAllowed)
/// when the path is known but the method is not supported for it.
pub fn resolve_route(method: &Method, path: &str) -> ApiResult<Route> {
    match path {
        "/health" => {
            return if *method == Method::GET {
                Ok(Route::Health)
            } else {
                Err(ApiError::method_not_allowed(method, path))
            };
        }
        "/docs/openapi.json" => {
            return if *method == Method::GET {
                Ok(Route::ApiDocs)
            } else {
                Err(ApiError::method_not_allowed(method, path))
            };
        }
        _ => {}
    }

    let segments: Vec<&str> = path.strip_prefix('/').unwrap_or(path).split('/').collect();
    if segments.len() == 3 && segments[0] == "objects" {
        let bucket = decode_uri_component(segments[1]);
        let object_id = decode_uri_component(segments[2]);
        if bucket.is_empty() || object_id.is_empty() {
            return Err(ApiError::not_found(path));
        }
        return match *method {
            Method::PUT => Ok(Route::PutObject { bucket, object_id }),
            Method::GET => Ok(Route::GetObject { bucket, object_id }),
            Method::DELETE => Ok(Route::DeleteObject { bucket, object_id }),
            _ => Err(ApiError::method_not_allowed(method, path)),
        };
    }

    Err(ApiError::not_found(path))
}

/// Percent-decode a path segment, tolerating invalid UTF-8.
fn decode_uri_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use crate::error::ApiErrorCode;

    use super::*;

    #[test]
    fn test_should_route_put_object() {
        let route = resolve_route(&Method::PUT, "/objects/photos/cat.png")
            .expect("route should resolve");
        assert_eq!(
            route,
            Route::PutObject {
                bucket: "photos".to_owned(),
                object_id: "cat.png".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_route_get_object() {
        let route = resolve_route(&Method::GET, "/objects/photos/cat.png")
            .expect("route should resolve");
        assert_eq!(
            route,
            Route::GetObject {
                bucket: "photos".to_owned(),
                object_id: "cat.png".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_route_delete_object() {
        let route = resolve_route(&Method::DELETE, "/objects/photos/cat.png")
            .expect("route should resolve");
        assert_eq!(
            route,
            Route::DeleteObject {
                bucket: "photos".to_owned(),
                object_id: "cat.png".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_route_health_check() {
        let route = resolve_route(&Method::GET, "/health").expect("route should resolve");
        assert_eq!(route, Route::Health);
    }

    #[test]
    fn test_should_route_api_docs() {
        let route =
            resolve_route(&Method::GET, "/docs/openapi.json").expect("route should resolve");
        assert_eq!(route, Route::ApiDocs);
    }

    #[test]
    fn test_should_decode_percent_encoded_segments() {
        let route = resolve_route(&Method::GET, "/objects/my%20bucket/r%C3%A9sum%C3%A9.pdf")
            .expect("route should resolve");
        assert_eq!(
            route,
            Route::GetObject {
                bucket: "my bucket".to_owned(),
                object_id: "résumé.pdf".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_reject_unknown_paths_with_not_found() {
        for path in ["/", "/objects", "/objects/only-bucket", "/objects/a/b/c", "/docs"] {
            let err = resolve_route(&Method::GET, path).expect_err("path should not route");
            assert_eq!(err.code, ApiErrorCode::NotFound, "path: {path}");
        }
    }

    #[test]
    fn test_should_reject_empty_identifiers() {
        for path in ["/objects//cat.png", "/objects/photos/", "/objects//"] {
            let err = resolve_route(&Method::PUT, path).expect_err("path should not route");
            assert_eq!(err.code, ApiErrorCode::NotFound, "path: {path}");
        }
    }

    #[test]
    fn test_should_reject_trailing_slash_on_object_path() {
        let err = resolve_route(&Method::GET, "/objects/photos/cat.png/")
            .expect_err("path should not route");
        assert_eq!(err.code, ApiErrorCode::NotFound);
    }

    #[test]
    fn test_should_reject_unsupported_method_on_object_path() {
        for method in [Method::POST, Method::HEAD, Method::PATCH] {
            let err = resolve_route(&method, "/objects/photos/cat.png")
                .expect_err("method should not route");
            assert_eq!(err.code, ApiErrorCode::MethodNotAllowed, "method: {method}");
        }
    }

    #[test]
    fn test_should_reject_unsupported_method_on_health() {
        let err = resolve_route(&Method::POST, "/health").expect_err("method should not route");
        assert_eq!(err.code, ApiErrorCode::MethodNotAllowed);
    }
}
