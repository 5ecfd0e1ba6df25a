//! Recommendation endpoints: survey-based and like-based.

#[cfg(test)]
#[path = "recommend_test.rs"]
mod recommend_test;

use super::error::ApiResult;
use super::http::{HttpClient, with_query};
use super::types::RecommendResponse;
use crate::state::recommend::SurveyAnswers;
use crate::state::session::Credential;

const SURVEY_PATH: &str = "recommend/survey";

pub(crate) fn survey_path(answers: &SurveyAnswers) -> String {
    with_query(SURVEY_PATH, &answers.query_params())
}

pub(crate) fn like_based_path(member_id: i64) -> String {
    format!("recommend/likes/{member_id}")
}

/// Recommend perfumes from five survey answers via `GET recommend/survey`.
///
/// # Errors
///
/// Returns the transport, status, or decode error from the backend.
pub async fn survey_recommend(client: &HttpClient, answers: &SurveyAnswers) -> ApiResult<RecommendResponse> {
    client.get_json(&survey_path(answers), None).await
}

/// Recommend perfumes from a member's likes via `GET recommend/likes/{member_id}`.
///
/// # Errors
///
/// Returns the transport, status, or decode error from the backend.
pub async fn like_based_recommend(
    client: &HttpClient,
    credential: &Credential,
    member_id: i64,
) -> ApiResult<RecommendResponse> {
    client.get_json(&like_based_path(member_id), Some(credential)).await
}
