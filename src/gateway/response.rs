use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::{HeaderName, HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

use crate::error::{AppError, Result};

const CORS_ALLOW_ORIGIN: &str = "*";
const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const CORS_ALLOW_HEADERS: &str = "Content-Type, X-User-Id, X-Auth-Token";
const CORS_MAX_AGE: &str = "86400";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl GatewayResponse {
    /// Fixed answer to a CORS preflight.
    pub fn preflight() -> Self {
        let headers = BTreeMap::from([
            ("Access-Control-Allow-Origin".to_string(), CORS_ALLOW_ORIGIN.to_string()),
            ("Access-Control-Allow-Methods".to_string(), CORS_ALLOW_METHODS.to_string()),
            ("Access-Control-Allow-Headers".to_string(), CORS_ALLOW_HEADERS.to_string()),
            ("Access-Control-Max-Age".to_string(), CORS_MAX_AGE.to_string()),
        ]);

        Self {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    pub fn json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Result<Self> {
        let body = serde_json::to_string(payload)
            .map_err(|e| AppError::InternalError(format!("Failed to encode response: {}", e)))?;

        Ok(Self::with_json_body(status, body))
    }

    pub fn error(status: StatusCode, message: &str) -> Self {
        Self::with_json_body(status, json!({ "error": message }).to_string())
    }

    pub fn message(status: StatusCode, message: &str) -> Self {
        Self::with_json_body(status, json!({ "message": message }).to_string())
    }

    pub fn method_not_allowed() -> Self {
        Self::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    fn with_json_body(status: StatusCode, body: String) -> Self {
        let headers = BTreeMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), CORS_ALLOW_ORIGIN.to_string()),
        ]);

        Self {
            status_code: status.as_u16(),
            headers,
            body,
            is_base64_encoded: false,
        }
    }
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!("Dropping invalid response header {}", name),
            }
        }

        response
    }
}
