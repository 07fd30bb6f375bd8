use std::{env, net::IpAddr, path::PathBuf, time::Duration};

use url::Url;

use crate::errors::ConfigError;

pub const DEFAULT_GITHUB_USERNAME: &str = "octocat";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub github_username: String,
    pub github_token: Option<String>,
    pub github_api_url: Url,
    pub github_timeout: Duration,
    pub cache_repositories: bool,
    pub contact_admin_token: Option<String>,
    pub static_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            github_username: DEFAULT_GITHUB_USERNAME.to_string(),
            github_token: None,
            github_api_url: Url::parse(DEFAULT_GITHUB_API_URL).expect("static url parses"),
            github_timeout: Duration::from_secs(10),
            cache_repositories: false,
            contact_admin_token: None,
            static_dir: None,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = match get("HOST") {
            Some(v) => v.trim().parse().map_err(|e| invalid("HOST", e))?,
            None => defaults.host,
        };
        let port = match get("PORT") {
            Some(v) => v.trim().parse().map_err(|e| invalid("PORT", e))?,
            None => defaults.port,
        };
        let github_api_url = match get("GITHUB_API_URL") {
            Some(v) => Url::parse(v.trim()).map_err(|e| invalid("GITHUB_API_URL", e))?,
            None => defaults.github_api_url,
        };
        let github_timeout = match get("GITHUB_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.trim()
                    .parse()
                    .map_err(|e| invalid("GITHUB_TIMEOUT_SECS", e))?,
            ),
            None => defaults.github_timeout,
        };
        let cache_repositories = match get("GITHUB_CACHE_REPOS") {
            Some(v) => parse_flag(&v).ok_or_else(|| invalid("GITHUB_CACHE_REPOS", v))?,
            None => defaults.cache_repositories,
        };

        Ok(Self {
            host,
            port,
            github_username: get("GITHUB_USERNAME").unwrap_or(defaults.github_username),
            github_token: get("GITHUB_TOKEN"),
            github_api_url,
            github_timeout,
            cache_repositories,
            contact_admin_token: get("CONTACT_ADMIN_TOKEN"),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(name: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        name,
        reason: reason.to_string(),
    }
}
