//! Stand-in for the remote REST proxy, used by integration tests.
//!
//! Every `/v1/{endpoint}` request behind a bearer token is echoed back as
//! JSON — method, query, auth and content-type headers, raw body — so tests
//! can assert on exactly what a client sent. `/v1/media/stats` instead
//! serves a canned payload whose counters exceed `i64`, for exercising
//! big-integer-safe decoding. Requests without a bearer token get a 401
//! JSON error body.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

/// What the echo endpoint saw of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Echo {
    pub endpoint: String,
    pub method: String,
    pub query: HashMap<String, String>,
    pub authorization: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Canned reply for `media/stats`; `play_count` does not fit in an `i64`.
pub const STATS_BODY: &str = r#"{"status_code":0,"aweme_detail":{"aweme_id":"7130965749890911494","statistics":{"play_count":92233720368547758070000,"digg_count":1024,"comment_count":512}}}"#;

pub fn app() -> Router {
    Router::new()
        .route("/v1/media/stats", get(stats))
        .route("/v1/{*endpoint}", any(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    Path(endpoint): Path<String>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let Some(authorization) = bearer(&headers) else {
        return unauthorized();
    };
    Json(Echo {
        endpoint,
        method: method.to_string(),
        query,
        authorization,
        content_type: header_value(&headers, header::CONTENT_TYPE),
        body,
    })
    .into_response()
}

async fn stats(headers: HeaderMap) -> Response {
    if bearer(&headers).is_none() {
        return unauthorized();
    }
    (
        [(header::CONTENT_TYPE, "application/json")],
        STATS_BODY,
    )
        .into_response()
}

/// The full `Authorization` header value, if it carries a non-empty bearer
/// token.
fn bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        return None;
    }
    Some(value.to_string())
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status_code": 401, "status_msg": "invalid access key"})),
    )
        .into_response()
}
