use super::*;

#[test]
fn status_reports_http_code() {
    assert_eq!(ApiError::Unauthorized.status(), Some(401));
    assert_eq!(ApiError::Status { status: 409, body: String::new() }.status(), Some(409));
    assert_eq!(ApiError::Transport("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn user_message_prefers_backend_message() {
    let err = ApiError::Status {
        status: 400,
        body: r#"{"message":"이미 존재하는 이메일입니다."}"#.to_owned(),
    };
    assert_eq!(err.user_message(), "이미 존재하는 이메일입니다.");
}

#[test]
fn user_message_falls_back_to_display() {
    let err = ApiError::Status { status: 500, body: "<html>oops</html>".to_owned() };
    assert_eq!(err.user_message(), "request rejected: status 500");
    assert_eq!(ApiError::Unauthorized.user_message(), "session expired, please sign in again");
}
