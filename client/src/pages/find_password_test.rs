use super::*;
use crate::form::SubmitDecision;

#[test]
fn steps_only_move_forward_and_carry_the_email() {
    let step = RecoveryStep::RequestCode.advance(" a@b.com ");
    assert_eq!(step, RecoveryStep::VerifyCode { email: "a@b.com".to_owned() });
    assert_eq!(step.email(), Some("a@b.com"));

    let step = step.advance("ignored@b.com");
    assert_eq!(step, RecoveryStep::ChangePassword { email: "a@b.com".to_owned() });

    assert_eq!(step.advance("").advance(""), RecoveryStep::Done);
}

#[test]
fn request_step_requires_an_email() {
    let mut form = request_form();
    form.handle_change("email", "not-an-email");
    let SubmitDecision::Rejected(errors) = form.begin_submit() else {
        panic!("bad email must not submit");
    };
    assert_eq!(errors.get("email").map(String::as_str), Some(EMAIL_ERROR));
}

#[test]
fn code_step_accepts_six_digits_only() {
    let mut form = code_form();
    form.handle_change("code", "12345");
    assert!(matches!(form.begin_submit(), SubmitDecision::Rejected(_)));

    form.handle_change("code", "123456");
    assert_eq!(form.error("code"), None);
    assert!(matches!(form.begin_submit(), SubmitDecision::Proceed(_)));
}

#[test]
fn new_password_must_match_confirmation() {
    let mut form = password_form();
    form.handle_change("password", "Aa1!aaaa");
    form.handle_change("confirm", "Aa1!aaab");

    let SubmitDecision::Rejected(errors) = form.begin_submit() else {
        panic!("mismatched passwords must not submit");
    };
    assert_eq!(errors.get("confirm").map(String::as_str), Some(CONFIRM_ERROR));
    assert!(!errors.contains_key("password"));

    form.handle_change("confirm", "Aa1!aaaa");
    assert!(matches!(form.begin_submit(), SubmitDecision::Proceed(_)));
}

#[test]
fn weak_new_password_is_rejected() {
    let values = FormState::from([
        ("password".to_owned(), "weakpass".to_owned()),
        ("confirm".to_owned(), "weakpass".to_owned()),
    ]);
    let errors = validate_new_password(&values);
    assert_eq!(errors.get("password").map(String::as_str), Some(PASSWORD_ERROR));
}
