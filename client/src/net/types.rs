//! Request and response DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's snake_case JSON. Optional or late-added
//! fields carry `#[serde(default)]` so older responses still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Access token issued by `members/login` and `members/reissue`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub index: Option<i64>,
    /// Token lifetime in seconds, when the backend reports it.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReissueRequest {
    pub index: i64,
    pub access_token: String,
}

/// Single-value payload used by the uniqueness check and recovery-code check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValueRequest {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FindPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangePasswordRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExistResponse {
    pub result: bool,
}

/// Profile of the signed-in member from `GET auth/members`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub member_id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub brand_id: i64,
    pub brand_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accord {
    pub accord_id: i64,
    pub kor_name: String,
    pub eng_name: String,
}

/// Perfume as shown in list and card views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerfumeSummary {
    pub perfume_id: i64,
    pub perfume_name: String,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub average_grade: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerfumeDetail {
    pub perfume_id: i64,
    pub perfume_name: String,
    pub brand: Brand,
    pub image: String,
    #[serde(default)]
    pub launch_year: Option<i32>,
    #[serde(default)]
    pub average_grade: f64,
    #[serde(default)]
    pub top_notes: Option<String>,
    #[serde(default)]
    pub middle_notes: Option<String>,
    #[serde(default)]
    pub base_notes: Option<String>,
    #[serde(default)]
    pub total_survey: i64,
    #[serde(default)]
    pub longevity: Option<String>,
    #[serde(default)]
    pub sillage: Option<String>,
    #[serde(default)]
    pub accords: Vec<Accord>,
    #[serde(default)]
    pub similar_perfume: Vec<PerfumeSummary>,
}

/// One page of perfumes. Page counts are 1-based.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerfumeListResponse {
    #[serde(default)]
    pub perfume_list: Vec<PerfumeSummary>,
    #[serde(default)]
    pub total_page_count: u32,
    #[serde(default)]
    pub current_page_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PerfumeLikeResponse {
    #[serde(alias = "like")]
    pub is_like: bool,
}

/// Community board subject ("말머리").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleSubject {
    Talk,
    Recommend,
    Review,
}

impl ArticleSubject {
    pub const ALL: [Self; 3] = [Self::Talk, Self::Recommend, Self::Review];

    /// Wire name used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Talk => "TALK",
            Self::Recommend => "RECOMMEND",
            Self::Review => "REVIEW",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Talk => "잡담",
            Self::Recommend => "추천",
            Self::Review => "후기",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub article_id: i64,
    pub member_id: i64,
    pub member_name: String,
    pub subject: ArticleSubject,
    pub title: String,
    #[serde(default, alias = "createAt")]
    pub created_at: String,
    #[serde(default)]
    pub views: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleListResponse {
    #[serde(default, alias = "articleList")]
    pub article_list: Vec<ArticleSummary>,
    #[serde(default)]
    pub total_page_count: u32,
    #[serde(default)]
    pub current_page_count: u32,
}

/// Recommendation payload rendered on the result page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub perfume_list: Vec<PerfumeSummary>,
    #[serde(default)]
    pub accords: Vec<Accord>,
}
