//! Wire-level error types for the HTTP API.

use std::fmt;

use blobd_core::StoreError;
use http::StatusCode;

/// Well-known API error codes, serialized into JSON error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ApiErrorCode {
    /// The addressed object does not exist.
    NoSuchObject,
    /// The request is malformed or its body could not be read.
    InvalidRequest,
    /// The method is not supported for the addressed resource.
    MethodNotAllowed,
    /// The path does not name a known resource.
    NotFound,
    /// An unexpected server-side failure.
    #[default]
    InternalError,
}

impl ApiErrorCode {
    /// The code string used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoSuchObject => "NoSuchObject",
            Self::InvalidRequest => "InvalidRequest",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::NotFound => "NotFound",
            Self::InternalError => "InternalError",
        }
    }

    /// The HTTP status this code maps to.
    #[must_use]
    pub fn default_status_code(&self) -> StatusCode {
        match self {
            Self::NoSuchObject | Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The human-readable message used when the caller supplies none.
    #[must_use]
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NoSuchObject => "The specified object does not exist.",
            Self::InvalidRequest => "The request is malformed.",
            Self::MethodNotAllowed => "The method is not allowed for this resource.",
            Self::NotFound => "The requested resource was not found.",
            Self::InternalError => "An internal error occurred.",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API error carrying everything needed to render a response.
#[derive(Debug)]
pub struct ApiError {
    /// Wire-level error code.
    pub code: ApiErrorCode,
    /// Human-readable message, serialized into the error body.
    pub message: String,
    /// The resource the error refers to, for logs only.
    pub resource: Option<String>,
    /// Status of the rendered response.
    pub status_code: StatusCode,
}

impl ApiError {
    /// Create an error with the code's default message and status.
    #[must_use]
    pub fn new(code: ApiErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_owned(),
            resource: None,
            status_code: code.default_status_code(),
        }
    }

    /// Create an error with a custom message.
    #[must_use]
    pub fn with_message(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::new(code)
        }
    }

    /// Attach the resource the error refers to.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// The addressed object does not exist.
    #[must_use]
    pub fn no_such_object(bucket: &str, object_id: &str) -> Self {
        Self::new(ApiErrorCode::NoSuchObject).with_resource(format!("{bucket}/{object_id}"))
    }

    /// The request is malformed.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::InvalidRequest, message)
    }

    /// The method is not supported for the addressed resource.
    #[must_use]
    pub fn method_not_allowed(method: &http::Method, path: &str) -> Self {
        Self::with_message(
            ApiErrorCode::MethodNotAllowed,
            format!("method {method} is not allowed for this resource"),
        )
        .with_resource(path)
    }

    /// The path does not name a known resource.
    #[must_use]
    pub fn not_found(path: &str) -> Self {
        Self::new(ApiErrorCode::NotFound).with_resource(path)
    }

    /// An unexpected server-side failure.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::InternalError, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(resource) = &self.resource {
            write!(f, " (resource: {resource})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { bucket, object_id } => {
                Self::no_such_object(&bucket, &object_id)
            }
            // Covers the reserved variants the in-memory engine never
            // produces; any of them reaching the adapter is a bug.
            other => Self::with_message(ApiErrorCode::InternalError, other.to_string()),
        }
    }
}

/// Convenience result type for adapter operations.
pub type ApiResult<T> = Result<T, ApiError>;
