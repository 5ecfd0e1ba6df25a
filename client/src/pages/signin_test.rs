use super::*;
use crate::form::SubmitDecision;

fn token(access_token: &str) -> TokenResponse {
    TokenResponse { access_token: access_token.to_owned(), index: Some(7), expires_in: None }
}

#[test]
fn empty_signin_flags_both_fields() {
    let mut form = signin_form();
    let SubmitDecision::Rejected(errors) = form.begin_submit() else {
        panic!("empty form must not submit");
    };
    assert_eq!(errors.get("email").map(String::as_str), Some(EMAIL_ERROR));
    assert_eq!(errors.get("password").map(String::as_str), Some(PASSWORD_ERROR));
}

#[test]
fn signin_does_not_apply_signup_password_rules() {
    let mut form = signin_form();
    form.handle_change("email", "a@b.com");
    form.handle_change("password", "short");
    assert!(matches!(form.begin_submit(), SubmitDecision::Proceed(_)));
}

#[test]
fn signin_request_trims_email_only() {
    let values = FormState::from([
        ("email".to_owned(), " a@b.com ".to_owned()),
        ("password".to_owned(), " pw ".to_owned()),
    ]);
    let request = signin_request(&values);
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.password, " pw ");
}

#[test]
fn login_token_becomes_credential_with_default_ttl() {
    let credential = credential_from_login(&token("tok"), 1_000, 60).unwrap();
    assert_eq!(credential.access_token, "tok");
    assert_eq!(credential.expires_at_ms, 61_000);
    assert_eq!(credential.index, Some(7));
}

#[test]
fn blank_login_token_is_a_decode_error() {
    let err = credential_from_login(&token("  "), 0, 60).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
