use std::cell::Cell;

use futures::executor::block_on;

use super::*;

fn client() -> HttpClient {
    HttpClient::new("/api/")
}

#[test]
fn exist_path_formats_field_name() {
    assert_eq!(exist_path(DuplicateField::Email), "members/exist-email");
    assert_eq!(exist_path(DuplicateField::Username), "members/exist-username");
}

#[test]
fn duplicate_field_only_maps_checkable_fields() {
    assert_eq!(DuplicateField::from_field("email"), Some(DuplicateField::Email));
    assert_eq!(DuplicateField::from_field("username"), Some(DuplicateField::Username));
    assert_eq!(DuplicateField::from_field("password"), None);
}

#[test]
fn reissue_without_index_is_unauthorized() {
    let cred = Credential::new("jwt", i64::MAX);
    assert_eq!(block_on(reissue(&client(), &cred)), Err(ApiError::Unauthorized));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn account_calls_report_unavailable_off_browser() {
    let c = client();
    let req = SignupRequest {
        email: "a@b.com".to_owned(),
        password: "Aa1!aaaa".to_owned(),
        username: "user1".to_owned(),
    };
    assert_eq!(block_on(signup(&c, &req)), Err(ApiError::Unavailable));
    assert_eq!(block_on(is_exist(&c, DuplicateField::Email, "a@b.com")), Err(ApiError::Unavailable));
    assert_eq!(block_on(find_password(&c, "a@b.com")), Err(ApiError::Unavailable));
    assert_eq!(block_on(check_code(&c, "123456")), Err(ApiError::Unavailable));
    assert_eq!(
        block_on(delete_account(&c, &Credential::new("jwt", i64::MAX))),
        Err(ApiError::Unavailable)
    );
}

#[test]
fn with_reissue_passes_through_success_and_keeps_credential() {
    let calls = Cell::new(0);
    let cred = Credential::new("jwt", i64::MAX);
    let result = block_on(with_reissue(&client(), cred.clone(), 0, 60, |c| {
        calls.set(calls.get() + 1);
        async move { Ok::<_, ApiError>(c.access_token.len()) }
    }));
    assert_eq!(result, Ok((3, cred)));
    assert_eq!(calls.get(), 1);
}

#[test]
fn with_reissue_does_not_retry_other_errors() {
    let calls = Cell::new(0);
    let result = block_on(with_reissue(&client(), Credential::new("jwt", i64::MAX), 0, 60, |_| {
        calls.set(calls.get() + 1);
        async { Err::<(), _>(ApiError::Status { status: 500, body: String::new() }) }
    }));
    assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    assert_eq!(calls.get(), 1);
}

#[test]
fn with_reissue_surfaces_failed_refresh() {
    let calls = Cell::new(0);
    let result = block_on(with_reissue(&client(), Credential::new("jwt", i64::MAX), 0, 60, |_| {
        calls.set(calls.get() + 1);
        async { Err::<(), _>(ApiError::Unauthorized) }
    }));
    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(calls.get(), 1);
}
