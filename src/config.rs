//! Startup configuration read from the environment.
//!
//! - `PORT` - listen port (default: `8080`)
//! - `LEADS_API_URL` - base URL of the leads backend (default: `http://127.0.0.1:5000`)
//! - `LEADS_API_TIMEOUT_MS` - per-request timeout in milliseconds (default: `10000`)
//! - `NOTICE_THEME` - `tailwind` or `bootstrap` (default: `tailwind`)
//! - `RUST_LOG` - log filter (default: `info`)

use crate::notice::NoticeTheme;
use std::{env, time::Duration};
use url::Url;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_url: Url,
    pub request_timeout: Duration,
    pub theme: NoticeTheme,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|err| invalid("PORT", err))?,
            None => DEFAULT_PORT,
        };

        let api_url = lookup("LEADS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(api_url.trim()).map_err(|err| invalid("LEADS_API_URL", err))?;
        if api_url.cannot_be_a_base() {
            return Err(invalid("LEADS_API_URL", "not a base url"));
        }

        let timeout_ms = match lookup("LEADS_API_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|err| invalid("LEADS_API_TIMEOUT_MS", err))?,
            None => DEFAULT_TIMEOUT_MS,
        };
        if timeout_ms == 0 {
            return Err(invalid("LEADS_API_TIMEOUT_MS", "must be positive"));
        }

        let theme = match lookup("NOTICE_THEME") {
            Some(raw) => raw
                .parse::<NoticeTheme>()
                .map_err(|err| invalid("NOTICE_THEME", err))?,
            None => NoticeTheme::default(),
        };

        Ok(Self {
            port,
            api_url,
            request_timeout: Duration::from_millis(timeout_ms),
            theme,
        })
    }
}

fn invalid(name: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        reason: reason.to_string(),
    }
}
