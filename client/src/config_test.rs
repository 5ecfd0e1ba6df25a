use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, "/api/");
    assert_eq!(cfg.page_size, 10);
}

#[test]
fn from_values_appends_trailing_slash_to_base_url() {
    let cfg = ClientConfig::from_values(Some("https://api.perfumism.dev/api"), None).unwrap();
    assert_eq!(cfg.api_base_url, "https://api.perfumism.dev/api/");
}

#[test]
fn from_values_treats_blank_as_unset() {
    let cfg = ClientConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.credential_ttl_secs, DEFAULT_CREDENTIAL_TTL_SECS);
}

#[test]
fn from_values_parses_ttl() {
    let cfg = ClientConfig::from_values(None, Some("600")).unwrap();
    assert_eq!(cfg.credential_ttl_secs, 600);
}

#[test]
fn from_values_rejects_zero_or_garbage_ttl() {
    assert_eq!(
        ClientConfig::from_values(None, Some("0")),
        Err(ConfigError::Invalid { var: "PERFUMISM_CREDENTIAL_TTL_SECS", value: "0".to_owned() })
    );
    assert!(ClientConfig::from_values(None, Some("soon")).is_err());
}
