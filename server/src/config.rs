//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// REST backend that `/api/*` is forwarded to. `None` disables the proxy.
    pub backend_url: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `PERFUMISM_BACKEND_URL`: absolute `http(s)://` base URL of the REST backend
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
            std::env::var("PERFUMISM_BACKEND_URL").ok().as_deref(),
        )
    }

    pub fn from_values(host: Option<&str>, port: Option<&str>, backend_url: Option<&str>) -> Result<Self, ConfigError> {
        let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST).to_owned();
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or_else(|| ConfigError::Invalid { var: "PORT", value: raw.to_owned() })?,
        };
        let backend_url = match backend_url.map(str::trim).filter(|u| !u.is_empty()) {
            None => None,
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                Some(raw.trim_end_matches('/').to_owned())
            }
            Some(raw) => return Err(ConfigError::Invalid { var: "PERFUMISM_BACKEND_URL", value: raw.to_owned() }),
        };
        Ok(Self { host, port, backend_url })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
