use super::*;

#[test]
fn email_requires_local_part_domain_and_dot() {
    assert!(validate_email_form("a@b.com"));
    assert!(validate_email_form("first.last@mail.co.kr"));
    assert!(!validate_email_form(""));
    assert!(!validate_email_form("a@b"));
    assert!(!validate_email_form("a b@c.com"));
    assert!(!validate_email_form("a@@b.com"));
}

#[test]
fn username_is_trimmed_and_bounded() {
    assert!(validate_username("user1"));
    assert!(validate_username("향수좋아"));
    assert!(!validate_username("   "));
    assert!(!validate_username(&"x".repeat(USERNAME_MAX_CHARS + 1)));
}

#[test]
fn password_needs_length_uppercase_and_special() {
    assert!(validate_password("Aa1!aaaa"));
    assert!(!validate_password("Aa1!aaa"));
    assert!(!validate_password("aa1!aaaa"));
    assert!(!validate_password("Aa1aaaaa"));
}

#[test]
fn recovery_code_is_six_digits() {
    assert!(validate_recovery_code("012345"));
    assert!(!validate_recovery_code("12345"));
    assert!(!validate_recovery_code("12a456"));
}
