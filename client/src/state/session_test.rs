use super::*;

fn token(access_token: &str, expires_in: Option<u64>) -> TokenResponse {
    TokenResponse { access_token: access_token.to_owned(), index: Some(3), expires_in }
}

fn member() -> MemberInfo {
    MemberInfo {
        member_id: 7,
        email: "a@b.com".to_owned(),
        username: "user1".to_owned(),
        image_url: None,
    }
}

#[test]
fn from_token_response_uses_default_ttl() {
    let cred = Credential::from_token_response(&token("jwt", None), 1_000, 60).unwrap();
    assert_eq!(cred.access_token, "jwt");
    assert_eq!(cred.expires_at_ms, 61_000);
    assert_eq!(cred.index, Some(3));
}

#[test]
fn from_token_response_prefers_backend_expiry() {
    let cred = Credential::from_token_response(&token("jwt", Some(5)), 0, 60).unwrap();
    assert_eq!(cred.expires_at_ms, 5_000);
}

#[test]
fn from_token_response_rejects_blank_token() {
    assert!(Credential::from_token_response(&token("  ", None), 0, 60).is_none());
}

#[test]
fn remaining_secs_saturates_at_zero() {
    let cred = Credential::new("t", 10_000);
    assert_eq!(cred.remaining_secs(4_500), 5);
    assert_eq!(cred.remaining_secs(20_000), 0);
    assert!(cred.is_expired(10_000));
    assert!(!cred.is_expired(9_999));
}

#[test]
fn sign_in_replaces_user_and_clears_loading() {
    let mut state = SessionState { credential: None, user: Some(member()), loading: true };
    state.sign_in(Credential::new("t", 100));
    assert!(state.is_signed_in());
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn active_credential_evicts_expired_session() {
    let mut state = SessionState::default();
    state.sign_in(Credential::new("t", 100));
    state.user = Some(member());
    assert_eq!(state.active_credential(50).map(|c| c.access_token), Some("t".to_owned()));
    assert!(state.active_credential(100).is_none());
    assert!(!state.is_signed_in());
    assert!(state.user.is_none());
}

#[test]
fn member_id_reads_loaded_profile() {
    let mut state = SessionState::default();
    assert_eq!(state.member_id(), None);
    state.user = Some(member());
    assert_eq!(state.member_id(), Some(7));
}
