//! Community board listing.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use super::error::ApiResult;
use super::http::{HttpClient, with_query};
use super::profile::page_params;
use super::types::{ArticleListResponse, ArticleSubject};
use crate::state::session::Credential;

const ARTICLES_PATH: &str = "articles";

pub(crate) fn articles_path(page: u32, size: u32, subject: Option<ArticleSubject>) -> String {
    let mut params = page_params(page, size);
    if let Some(subject) = subject {
        params.push(("subject", subject.as_str().to_owned()));
    }
    with_query(ARTICLES_PATH, &params)
}

/// Fetch one page of articles via `GET articles`, optionally filtered by subject.
///
/// The credential is attached when present so the backend can mark the
/// reader's own posts.
///
/// # Errors
///
/// Returns the transport, status, or decode error from the backend.
pub async fn list_articles(
    client: &HttpClient,
    credential: Option<&Credential>,
    page: u32,
    size: u32,
    subject: Option<ArticleSubject>,
) -> ApiResult<ArticleListResponse> {
    client.get_json(&articles_path(page, size, subject), credential).await
}
