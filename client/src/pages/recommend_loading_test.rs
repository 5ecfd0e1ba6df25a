use super::*;
use crate::net::types::MemberInfo;
use crate::state::recommend::SurveyAnswers;

fn answers(key: &str) -> Option<String> {
    match key {
        "a1" => Some("1".to_owned()),
        "a2" => Some("2".to_owned()),
        "a3" => Some("3".to_owned()),
        "a4" => Some("4".to_owned()),
        "a5" => Some("1".to_owned()),
        _ => None,
    }
}

fn no_answers(_: &str) -> Option<String> {
    None
}

fn signed_in(user: bool) -> SessionState {
    SessionState {
        credential: Some(Credential::new("t", i64::MAX)),
        user: user.then(|| MemberInfo {
            member_id: 9,
            email: "a@b.com".to_owned(),
            username: "user1".to_owned(),
            image_url: None,
        }),
        loading: false,
    }
}

#[test]
fn survey_answers_resolve_without_waiting_for_session() {
    let session = SessionState { loading: true, ..SessionState::default() };
    assert_eq!(
        resolve_when_ready(answers, &session),
        Some(Ok(RecommendSource::Survey(SurveyAnswers::new([1, 2, 3, 4, 1]))))
    );
}

#[test]
fn like_based_waits_for_session_and_profile() {
    let loading = SessionState { loading: true, ..SessionState::default() };
    assert_eq!(resolve_when_ready(no_answers, &loading), None);
    assert_eq!(resolve_when_ready(no_answers, &signed_in(false)), None);
    assert_eq!(
        resolve_when_ready(no_answers, &signed_in(true)),
        Some(Ok(RecommendSource::LikeBased { member_id: 9 }))
    );
}

#[test]
fn signed_out_visitor_without_answers_gets_an_error() {
    assert_eq!(
        resolve_when_ready(no_answers, &SessionState::default()),
        Some(Err(RecommendError::NotSignedIn))
    );
}
