use super::*;

#[test]
fn credential_cookie_value_round_trips_with_index() {
    let cred = Credential { access_token: "eyJ.a.b".to_owned(), expires_at_ms: 1_700_000_000_000, index: Some(4) };
    let encoded = encode_credential(&cred);
    assert!(!encoded.contains(';'));
    assert_eq!(decode_credential(&encoded), Some(cred));
}

#[test]
fn credential_cookie_value_without_index() {
    let cred = Credential::new("tok", 99);
    assert_eq!(decode_credential(&encode_credential(&cred)), Some(cred));
}

#[test]
fn decode_rejects_malformed_values() {
    assert_eq!(decode_credential(""), None);
    assert_eq!(decode_credential("notanumber%3Atok"), None);
    assert_eq!(decode_credential("99%3A"), None);
}

#[test]
fn set_cookie_string_scopes_to_root_with_max_age() {
    assert_eq!(set_cookie_string("v", 60), "access_token=v; path=/; max-age=60; SameSite=Lax");
}

#[test]
fn find_cookie_picks_named_pair() {
    let header = "theme=dark; access_token=abc; other=1";
    assert_eq!(find_cookie(header, "access_token"), Some("abc"));
    assert_eq!(find_cookie(header, "missing"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_is_empty_off_browser() {
    save(&Credential::new("tok", i64::MAX), 0);
    assert_eq!(load(0), None);
    clear();
}
