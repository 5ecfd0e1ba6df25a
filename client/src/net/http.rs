//! Configured HTTP client shared by every API module.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR) and unit tests: every send returns
//! `ApiError::Unavailable`, so callers exercise the same error path they
//! would see for a network failure.
//!
//! The bearer token is attached only when a `Credential` is passed in; this
//! module never looks up session state on its own.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use crate::config::ClientConfig;
use crate::state::session::Credential;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// File part of a multipart body.
#[derive(Clone, Debug)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    #[cfg(feature = "hydrate")]
    pub blob: web_sys::Blob,
}

#[derive(Clone, Debug)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FilePart>),
}

impl Body {
    /// Serialize `payload` into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `payload` cannot be represented as JSON.
    pub fn json<B: Serialize>(payload: &B) -> ApiResult<Self> {
        serde_json::to_value(payload)
            .map(Self::Json)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `members/join`.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Send a request and return the raw response text on 2xx.
    ///
    /// # Errors
    ///
    /// `Transport` when no response arrives, `Unauthorized` on 401, `Status`
    /// for any other non-2xx, `Unavailable` outside the browser.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        credential: Option<&Credential>,
        body: Body,
    ) -> ApiResult<String> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::RequestBuilder;

            let url = self.url(path);
            let mut builder = RequestBuilder::new(&url).method(gloo_method(method));
            if let Some(credential) = credential {
                builder = builder.header("Authorization", &bearer_header(&credential.access_token));
            }
            let request = match body {
                Body::Empty => builder.build(),
                Body::Json(value) => builder.json(&value),
                Body::Multipart(parts) => builder.body(multipart_form(&parts)?),
            }
            .map_err(|e| ApiError::Encode(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            classify_response(status, text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, credential, body);
            Err(ApiError::Unavailable)
        }
    }

    /// Send and decode a JSON response body.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::send`], plus `Decode` on a schema mismatch.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        credential: Option<&Credential>,
        body: Body,
    ) -> ApiResult<T> {
        let text = self.send(method, path, credential, body).await?;
        decode_json(&text)
    }

    /// Send and discard the response body.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::send`].
    pub async fn send_unit(
        &self,
        method: Method,
        path: &str,
        credential: Option<&Credential>,
        body: Body,
    ) -> ApiResult<()> {
        self.send(method, path, credential, body).await.map(|_| ())
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::send_json`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, credential: Option<&Credential>) -> ApiResult<T> {
        self.send_json(Method::Get, path, credential, Body::Empty).await
    }
}

/// Join `base` and `path` with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Append `params` to `path` as a URL-encoded query string.
pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_owned();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}{query}")
}

/// Map an HTTP status and body onto the API result.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_response(status: u16, body: String) -> ApiResult<String> {
    match status {
        200..=299 => Ok(body),
        401 => Err(ApiError::Unauthorized),
        _ => Err(ApiError::Status { status, body }),
    }
}

pub(crate) fn decode_json<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    use gloo_net::http::Method as M;
    match method {
        Method::Get => M::GET,
        Method::Post => M::POST,
        Method::Put => M::PUT,
        Method::Delete => M::DELETE,
    }
}

#[cfg(feature = "hydrate")]
fn multipart_form(parts: &[FilePart]) -> ApiResult<web_sys::FormData> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{e:?}")))?;
    for part in parts {
        form.append_with_blob_and_filename(&part.field, &part.blob, &part.file_name)
            .map_err(|e| ApiError::Encode(format!("{e:?}")))?;
    }
    Ok(form)
}
