use super::*;

#[test]
fn upstream_url_joins_backend_and_path() {
    assert_eq!(upstream_url("https://api.test", "members/login", None), "https://api.test/members/login");
    assert_eq!(upstream_url("https://api.test/", "/perfumes/3", None), "https://api.test/perfumes/3");
}

#[test]
fn upstream_url_keeps_raw_query() {
    assert_eq!(
        upstream_url("https://api.test", "recommend/survey", Some("a1=1&a2=2")),
        "https://api.test/recommend/survey?a1=1&a2=2"
    );
    assert_eq!(upstream_url("https://api.test", "perfumes", Some("")), "https://api.test/perfumes");
}
