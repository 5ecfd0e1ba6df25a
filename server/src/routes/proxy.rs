//! `/api/*` forwarding to the REST backend.
//!
//! Method, query string, body, and the `Authorization` / `Content-Type` /
//! `Accept` headers are passed through. The backend's status, content type,
//! and body come back unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};

const FORWARDED_HEADERS: [axum::http::HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

#[derive(Clone)]
pub struct ProxyState {
    backend: String,
    http: reqwest::Client,
}

impl ProxyState {
    pub fn new(backend: String) -> Self {
        Self { backend, http: reqwest::Client::new() }
    }
}

/// Backend URL for `rest` (the path after `/api/`) and the raw query string.
pub fn upstream_url(backend: &str, rest: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", backend.trim_end_matches('/'), rest.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

pub async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    Path(rest): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.backend, &rest, query.as_deref());
    let mut request = state.http.request(method.clone(), &url).body(body);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "backend request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "backend response read failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}
