//! Perfume catalogue and like endpoints.

#[cfg(test)]
#[path = "perfume_test.rs"]
mod perfume_test;

use super::error::ApiResult;
use super::http::{Body, HttpClient, Method, with_query};
use super::profile::page_params;
use super::types::{PerfumeDetail, PerfumeLikeResponse, PerfumeListResponse};
use crate::state::session::Credential;

const PERFUMES_PATH: &str = "perfumes";
const IMAGE_HOST: &str = "https://fimgs.net/mdimg/perfume/375x500.";

pub(crate) fn perfume_path(perfume_id: i64) -> String {
    format!("perfumes/{perfume_id}")
}

pub(crate) fn like_path(perfume_id: i64) -> String {
    format!("auth/perfumes/likes/{perfume_id}")
}

/// Full image URL for a perfume `image` field such as `o.12345.jpg`.
///
/// The backend stores the CDN key behind a two-character prefix.
pub fn perfume_image_url(image: &str) -> String {
    let key: String = image.chars().skip(2).collect();
    format!("{IMAGE_HOST}{key}")
}

/// Fetch one page of the catalogue via `GET perfumes`.
///
/// # Errors
///
/// Returns the transport, status, or decode error from the backend.
pub async fn list_perfumes(client: &HttpClient, page: u32, size: u32) -> ApiResult<PerfumeListResponse> {
    client
        .get_json(&with_query(PERFUMES_PATH, &page_params(page, size)), None)
        .await
}

/// Fetch a single perfume via `GET perfumes/{id}`.
///
/// # Errors
///
/// Returns the transport, status, or decode error from the backend.
pub async fn get_perfume(client: &HttpClient, perfume_id: i64) -> ApiResult<PerfumeDetail> {
    client.get_json(&perfume_path(perfume_id), None).await
}

/// Whether the signed-in member likes `perfume_id`.
///
/// # Errors
///
/// Returns the transport, status, or decode error from the backend.
pub async fn is_liked(client: &HttpClient, credential: &Credential, perfume_id: i64) -> ApiResult<bool> {
    let resp: PerfumeLikeResponse = client.get_json(&like_path(perfume_id), Some(credential)).await?;
    Ok(resp.is_like)
}

/// Like `perfume_id`, or withdraw the like when `liked` is false.
///
/// # Errors
///
/// Returns the transport or status error from the backend.
pub async fn set_liked(client: &HttpClient, credential: &Credential, perfume_id: i64, liked: bool) -> ApiResult<()> {
    let method = if liked { Method::Post } else { Method::Delete };
    client
        .send_unit(method, &like_path(perfume_id), Some(credential), Body::Empty)
        .await
}
