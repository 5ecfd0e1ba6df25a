//! Survey progress and recommendation source resolution.
//!
//! DESIGN
//! ======
//! Survey answers travel in the query string (`a1`..`a5`) so each question is
//! a plain route and a refresh keeps progress. The loading page resolves the
//! query into a `RecommendSource` before any request goes out.

#[cfg(test)]
#[path = "recommend_test.rs"]
mod recommend_test;

use crate::net::types::RecommendResponse;

pub const QUESTION_COUNT: usize = 5;

pub struct SurveyQuestion {
    pub title: &'static str,
    pub options: &'static [&'static str],
}

pub const SURVEY_QUESTIONS: [SurveyQuestion; QUESTION_COUNT] = [
    SurveyQuestion { title: "어떤 계절에 주로 사용하실 건가요?", options: &["봄", "여름", "가을", "겨울"] },
    SurveyQuestion { title: "원하는 향의 분위기는?", options: &["상큼한", "달콤한", "차분한", "관능적인"] },
    SurveyQuestion { title: "향이 얼마나 오래 지속되길 원하나요?", options: &["가볍게", "적당히", "오래"] },
    SurveyQuestion { title: "선호하는 계열을 골라주세요.", options: &["시트러스", "플로럴", "우디", "머스크"] },
    SurveyQuestion { title: "주로 언제 뿌리시나요?", options: &["데일리", "데이트", "출근", "특별한 날"] },
];

/// Five 1-based option indices, one per question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurveyAnswers([i32; QUESTION_COUNT]);

impl SurveyAnswers {
    pub fn new(answers: [i32; QUESTION_COUNT]) -> Self {
        Self(answers)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// `a1=..&a5=` pairs in question order.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        ANSWER_KEYS.iter().zip(self.0).map(|(k, v)| (*k, v.to_string())).collect()
    }
}

const ANSWER_KEYS: [&str; QUESTION_COUNT] = ["a1", "a2", "a3", "a4", "a5"];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecommendError {
    #[error("survey answer {key} is missing or not a number")]
    InvalidAnswer { key: &'static str },
    #[error("sign in to get recommendations from your likes")]
    NotSignedIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecommendSource {
    Survey(SurveyAnswers),
    LikeBased { member_id: i64 },
}

impl RecommendSource {
    /// Survey-based when `a1` is present, like-based for a signed-in member otherwise.
    ///
    /// # Errors
    ///
    /// `InvalidAnswer` when `a1` is present but any of `a1..a5` does not parse;
    /// `NotSignedIn` when there are no answers and no member.
    pub fn resolve<L>(lookup: L, member_id: Option<i64>) -> Result<Self, RecommendError>
    where
        L: Fn(&str) -> Option<String>,
    {
        if lookup(ANSWER_KEYS[0]).is_none() {
            return member_id.map(|member_id| Self::LikeBased { member_id }).ok_or(RecommendError::NotSignedIn);
        }
        let mut answers = [0; QUESTION_COUNT];
        for (slot, key) in answers.iter_mut().zip(ANSWER_KEYS) {
            *slot = lookup(key)
                .and_then(|raw| raw.trim().parse().ok())
                .ok_or(RecommendError::InvalidAnswer { key })?;
        }
        Ok(Self::Survey(SurveyAnswers(answers)))
    }
}

/// Question number (1-based) from the `page` query value.
pub fn survey_page(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|p| p.trim().parse::<usize>().ok())
        .filter(|p| (1..=QUESTION_COUNT).contains(p))
}

/// Location to visit after answering question `page` with option `choice`.
///
/// Answers to earlier questions are read through `lookup` and carried along.
/// After the last question the survey hands off to `/survey/loading`.
pub fn next_survey_location<L>(lookup: L, page: usize, choice: i32) -> String
where
    L: Fn(&str) -> Option<String>,
{
    let mut pairs: Vec<String> = Vec::with_capacity(QUESTION_COUNT + 1);
    let done = page >= QUESTION_COUNT;
    if !done {
        pairs.push(format!("page={}", page + 1));
    }
    for (i, key) in ANSWER_KEYS.iter().enumerate().take(page.min(QUESTION_COUNT)) {
        let value = if i + 1 == page { Some(choice.to_string()) } else { lookup(key) };
        if let Some(value) = value {
            pairs.push(format!("{key}={value}"));
        }
    }
    let route = if done { "/survey/loading" } else { "/survey" };
    format!("{route}?{}", pairs.join("&"))
}

/// Last recommendation, kept until logout or the next survey.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendState {
    pub result: Option<RecommendResponse>,
    pub error: Option<String>,
    pub loading: bool,
}
