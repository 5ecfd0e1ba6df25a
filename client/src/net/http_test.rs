use super::*;

#[test]
fn join_url_collapses_duplicate_slashes() {
    assert_eq!(join_url("/api/", "members/join"), "/api/members/join");
    assert_eq!(join_url("/api", "/members/join"), "/api/members/join");
    assert_eq!(
        join_url("https://api.perfumism.dev/api/", "auth/members"),
        "https://api.perfumism.dev/api/auth/members"
    );
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn with_query_encodes_values() {
    assert_eq!(with_query("perfumes", &[]), "perfumes");
    assert_eq!(
        with_query("perfumes", &[("page", "2".to_owned()), ("size", "10".to_owned())]),
        "perfumes?page=2&size=10"
    );
    assert_eq!(with_query("articles?page=1", &[("subject", "a b&c".to_owned())]), "articles?page=1&subject=a+b%26c");
}

#[test]
fn classify_response_maps_statuses() {
    assert_eq!(classify_response(200, "{}".to_owned()), Ok("{}".to_owned()));
    assert_eq!(classify_response(204, String::new()), Ok(String::new()));
    assert_eq!(classify_response(401, "denied".to_owned()), Err(ApiError::Unauthorized));
    assert_eq!(
        classify_response(409, "dup".to_owned()),
        Err(ApiError::Status { status: 409, body: "dup".to_owned() })
    );
}

#[test]
fn decode_json_reports_schema_mismatch() {
    let ok: ApiResult<serde_json::Value> = decode_json(r#"{"result":true}"#);
    assert!(ok.is_ok());
    let bad: ApiResult<crate::net::types::ExistResponse> = decode_json(r#"{"nope":1}"#);
    assert!(matches!(bad, Err(ApiError::Decode(_))));
}

#[test]
fn client_url_uses_configured_base() {
    let client = HttpClient::from_config(&ClientConfig::default());
    assert_eq!(client.base_url(), "/api/");
    assert_eq!(client.url("members/login"), "/api/members/login");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_is_unavailable_outside_browser() {
    let client = HttpClient::new("/api/");
    let result = futures::executor::block_on(client.send(Method::Get, "perfumes", None, Body::Empty));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn body_json_wraps_serialized_value() {
    let body = Body::json(&serde_json::json!({ "value": "x" })).unwrap();
    assert!(matches!(body, Body::Json(v) if v["value"] == "x"));
}
