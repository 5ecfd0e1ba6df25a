//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so values are
//! captured with `option_env!` when the crate is compiled and parsed here.
//! The SSR host compiles the same crate, so both sides agree on the base URL.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api/";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_CREDENTIAL_TTL_SECS: u64 = 30 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined onto. Always ends with `/`.
    pub api_base_url: String,
    /// Page size sent with every paginated request.
    pub page_size: u32,
    /// Lifetime assumed for an access token when the backend does not send one.
    pub credential_ttl_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            credential_ttl_secs: DEFAULT_CREDENTIAL_TTL_SECS,
        }
    }
}

impl ClientConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `PERFUMISM_API_BASE_URL`: default `/api/`
    /// - `PERFUMISM_CREDENTIAL_TTL_SECS`: default 1800
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("PERFUMISM_API_BASE_URL"),
            option_env!("PERFUMISM_CREDENTIAL_TTL_SECS"),
        )
    }

    /// Like [`ClientConfig::from_build_env`], falling back to defaults and
    /// logging when a captured value is malformed.
    pub fn resolve() -> Self {
        Self::from_build_env().unwrap_or_else(|e| {
            leptos::logging::warn!("client config: {e}; using defaults");
            Self::default()
        })
    }

    pub fn from_values(base_url: Option<&str>, ttl_secs: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = match base_url.map(str::trim) {
            None | Some("") => DEFAULT_API_BASE_URL.to_owned(),
            Some(raw) => normalize_base_url(raw),
        };
        let credential_ttl_secs = match ttl_secs.map(str::trim) {
            None | Some("") => DEFAULT_CREDENTIAL_TTL_SECS,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "PERFUMISM_CREDENTIAL_TTL_SECS",
                        value: raw.to_owned(),
                    });
                }
            },
        };
        Ok(Self { api_base_url, page_size: DEFAULT_PAGE_SIZE, credential_ttl_secs })
    }
}

fn normalize_base_url(raw: &str) -> String {
    if raw.ends_with('/') {
        raw.to_owned()
    } else {
        format!("{raw}/")
    }
}
