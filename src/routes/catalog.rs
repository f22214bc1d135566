use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
};
use http::{HeaderMap, Method, StatusCode};
use std::collections::HashMap;

use crate::{
    error::{AppError, Result},
    gateway::{GatewayRequest, GatewayResponse},
    handlers, AppState,
};

type QueryParams = std::result::Result<Query<HashMap<String, String>>, QueryRejection>;
type RawBody = std::result::Result<Bytes, BytesRejection>;

// Body and query rejections are taken as values so that a preflight is
// answered regardless, and every other failure keeps the JSON/CORS shape.

pub async fn products(
    State(state): State<AppState>,
    method: Method,
    params: QueryParams,
    headers: HeaderMap,
    body: RawBody,
) -> Result<GatewayResponse> {
    let request = to_gateway_request(&method, params, &headers, body)?;
    handlers::products::handle(state.connector.as_ref(), &request).await
}

pub async fn stores(
    State(state): State<AppState>,
    method: Method,
    params: QueryParams,
    headers: HeaderMap,
    body: RawBody,
) -> Result<GatewayResponse> {
    let request = to_gateway_request(&method, params, &headers, body)?;
    handlers::stores::handle(state.connector.as_ref(), &request).await
}

fn to_gateway_request(
    method: &Method,
    params: QueryParams,
    headers: &HeaderMap,
    body: RawBody,
) -> Result<GatewayRequest> {
    let headers: HashMap<String, String> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();

    // A preflight carries nothing the handler reads.
    let (params, body) = if *method == Method::OPTIONS {
        (HashMap::new(), None)
    } else {
        (read_query(params)?, read_body(body)?)
    };

    Ok(GatewayRequest {
        http_method: Some(method.as_str().to_string()),
        body,
        query_string_parameters: (!params.is_empty()).then_some(params),
        headers: (!headers.is_empty()).then_some(headers),
    })
}

fn read_query(params: QueryParams) -> Result<HashMap<String, String>> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn read_body(body: RawBody) -> Result<Option<String>> {
    let bytes = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge("Request body is too large".to_string())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    })?;

    if bytes.is_empty() {
        return Ok(None);
    }

    String::from_utf8(bytes.to_vec())
        .map(Some)
        .map_err(|_| AppError::BadRequest("Request body is not valid UTF-8".to_string()))
}
