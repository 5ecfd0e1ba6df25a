//! Field validators for account forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const USERNAME_MAX_CHARS: usize = 20;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn validate_email_form(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Non-blank and at most [`USERNAME_MAX_CHARS`] characters.
pub fn validate_username(username: &str) -> bool {
    let trimmed = username.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= USERNAME_MAX_CHARS
}

/// At least [`PASSWORD_MIN_CHARS`] characters including one uppercase letter
/// and one special character.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_CHARS
        && password.chars().any(char::is_uppercase)
        && password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

/// Six ASCII digits, as sent in the recovery email.
pub fn validate_recovery_code(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit())
}
