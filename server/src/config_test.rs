use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_values(None, None, None).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, None);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some(" "), Some(""), Some("  ")).unwrap();
    assert_eq!(cfg, ServerConfig::from_values(None, None, None).unwrap());
}

#[test]
fn port_must_be_a_nonzero_u16() {
    assert_eq!(ServerConfig::from_values(None, Some("8080"), None).unwrap().port, 8080);
    assert_eq!(
        ServerConfig::from_values(None, Some("0"), None),
        Err(ConfigError::Invalid { var: "PORT", value: "0".to_owned() })
    );
    assert!(ServerConfig::from_values(None, Some("70000"), None).is_err());
    assert!(ServerConfig::from_values(None, Some("http"), None).is_err());
}

#[test]
fn backend_url_is_normalized_without_trailing_slash() {
    let cfg = ServerConfig::from_values(None, None, Some("https://api.example.com/")).unwrap();
    assert_eq!(cfg.backend_url.as_deref(), Some("https://api.example.com"));
}

#[test]
fn backend_url_must_be_absolute_http() {
    assert_eq!(
        ServerConfig::from_values(None, None, Some("api.example.com")),
        Err(ConfigError::Invalid { var: "PERFUMISM_BACKEND_URL", value: "api.example.com".to_owned() })
    );
}
