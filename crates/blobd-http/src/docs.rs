//! OpenAPI description of the HTTP surface, served at `/docs/openapi.json`.

use serde_json::{Value, json};

use crate::body::ResponseBody;
use crate::response::json_response;
use crate::service::HttpConfig;

/// Assemble the OpenAPI 3 document describing the API.
#[must_use]
pub fn openapi_document(config: &HttpConfig) -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": config.service_name,
            "description": "A minimal HTTP object store.",
            "version": config.service_version
        },
        "paths": {
            "/objects/{bucket}/{objectID}": {
                "parameters": [
                    {
                        "name": "bucket",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string" }
                    },
                    {
                        "name": "objectID",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string" }
                    }
                ],
                "put": {
                    "summary": "Store an object",
                    "description": "Creates the object, replaces differing content, or deduplicates byte-identical content. The bucket is created implicitly.",
                    "requestBody": {
                        "content": {
                            "application/octet-stream": {
                                "schema": { "type": "string", "format": "binary" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Object stored",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/PutObjectBody" }
                                }
                            }
                        },
                        "400": { "description": "Request body could not be read" }
                    }
                },
                "get": {
                    "summary": "Fetch an object",
                    "responses": {
                        "200": {
                            "description": "Stored payload",
                            "content": { "application/octet-stream": {} }
                        },
                        "404": { "description": "Object does not exist" }
                    }
                },
                "delete": {
                    "summary": "Delete an object",
                    "responses": {
                        "200": { "description": "Object deleted" },
                        "404": { "description": "Object does not exist" }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Liveness report",
                    "responses": {
                        "200": {
                            "description": "Service is healthy",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/HealthStatus" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "PutObjectBody": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" }
                    },
                    "required": ["id"]
                },
                "HealthStatus": {
                    "type": "object",
                    "properties": {
                        "status": { "type": "string" },
                        "timestamp": { "type": "string", "format": "date-time" },
                        "service": { "type": "string" },
                        "version": { "type": "string" }
                    },
                    "required": ["status", "timestamp", "service", "version"]
                },
                "ErrorBody": {
                    "type": "object",
                    "properties": {
                        "code": { "type": "string" },
                        "message": { "type": "string" }
                    },
                    "required": ["code", "message"]
                }
            }
        }
    })
}

/// Build the `/docs/openapi.json` response.
#[must_use]
pub fn docs_response(config: &HttpConfig) -> http::Response<ResponseBody> {
    let body = match serde_json::to_vec(&openapi_document(config)) {
        Ok(bytes) => ResponseBody::from_bytes(bytes),
        Err(_) => ResponseBody::empty(),
    };
    json_response(http::StatusCode::OK, body)
}
