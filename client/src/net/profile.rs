//! Signed-in member profile endpoints.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::error::ApiResult;
use super::http::{Body, FilePart, HttpClient, Method, with_query};
use super::types::{MemberInfo, PerfumeListResponse};
use crate::state::session::Credential;

const MEMBER_PATH: &str = "auth/members";
const AVATAR_PATH: &str = "auth/members/img";
const FAVORITES_PATH: &str = "auth/perfumes/likes/my-favorite";

/// Multipart part name the avatar upload expects.
pub const AVATAR_FIELD: &str = "image";

/// Query path for a favorites page. `page` is 1-based; the backend pages from 0.
pub(crate) fn favorites_path(page: u32, size: u32) -> String {
    with_query(FAVORITES_PATH, &page_params(page, size))
}

pub(crate) fn page_params(page: u32, size: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.saturating_sub(1).to_string()), ("size", size.to_string())]
}

/// Fetch the signed-in member via `GET auth/members`.
///
/// # Errors
///
/// Returns the transport, status, or decode error from the backend.
pub async fn get_user_info(client: &HttpClient, credential: &Credential) -> ApiResult<MemberInfo> {
    client.get_json(MEMBER_PATH, Some(credential)).await
}

/// Fetch one page of liked perfumes via `GET auth/perfumes/likes/my-favorite`.
///
/// # Errors
///
/// Returns the transport, status, or decode error from the backend.
pub async fn get_favorites(
    client: &HttpClient,
    credential: &Credential,
    page: u32,
    size: u32,
) -> ApiResult<PerfumeListResponse> {
    client.get_json(&favorites_path(page, size), Some(credential)).await
}

/// Upload a new avatar via multipart `POST auth/members/img`.
///
/// # Errors
///
/// Returns the encode, transport, or status error.
pub async fn set_user_image(client: &HttpClient, credential: &Credential, image: FilePart) -> ApiResult<()> {
    client
        .send_unit(Method::Post, AVATAR_PATH, Some(credential), Body::Multipart(vec![image]))
        .await
}

/// Wrap a picked file as the avatar multipart part.
#[cfg(feature = "hydrate")]
pub fn avatar_part(file: web_sys::File) -> FilePart {
    FilePart { field: AVATAR_FIELD.to_owned(), file_name: file.name(), blob: file.into() }
}
