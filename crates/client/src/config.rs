use std::time::Duration;

use histdom_core::error::CoreError;
use histdom_core::pagination::DEFAULT_PAGE_SIZE;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "HISTDOM_API_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "HISTDOM_REQUEST_TIMEOUT_SECS";
pub const PAGE_SIZE_ENV: &str = "HISTDOM_PAGE_SIZE";

/// Base URL used when neither the runtime nor the build environment sets one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Value of `HISTDOM_API_URL` when the crate was compiled, if any.
const BUILD_API_URL: Option<&str> = option_env!("HISTDOM_API_URL");

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub base_url: String,
    /// Per-request timeout. `None` keeps the HTTP client default.
    pub request_timeout: Option<Duration>,
    /// Default page size for paginated listings.
    pub page_size: usize,
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with every other value at its
    /// default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            request_timeout: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// Call `dotenvy::dotenv().ok()` first to pick up a local `.env` file.
    ///
    /// | Env Var                        | Default                                      |
    /// |--------------------------------|----------------------------------------------|
    /// | `HISTDOM_API_URL`              | build-time `HISTDOM_API_URL`, else `http://localhost:8000` |
    /// | `HISTDOM_REQUEST_TIMEOUT_SECS` | unset (client default)                       |
    /// | `HISTDOM_PAGE_SIZE`            | `10`                                         |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), with `api_url` (a command-line
    /// flag, say) taking the place of `HISTDOM_API_URL` when given.
    pub fn from_env_with_url(api_url: Option<&str>) -> Result<Self, CoreError> {
        Self::from_lookup_with_url(|name| std::env::var(name).ok(), api_url)
    }

    pub fn from_lookup_with_url<F>(lookup: F, api_url: Option<&str>) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|name| match (name, api_url) {
            (API_URL_ENV, Some(url)) => Some(url.to_string()),
            _ => lookup(name),
        })
    }

    /// Same as [`from_env`](Self::from_env) but reading variables through
    /// `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .or_else(|| BUILD_API_URL.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CoreError::Config(format!(
                "{API_URL_ENV} must be an http(s) URL, got '{base_url}'"
            )));
        }

        let request_timeout = match lookup(REQUEST_TIMEOUT_ENV) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    CoreError::Config(format!("{REQUEST_TIMEOUT_ENV} must be a valid u64"))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let page_size = match lookup(PAGE_SIZE_ENV) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(CoreError::Config(format!(
                        "{PAGE_SIZE_ENV} must be a positive integer"
                    )))
                }
            },
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            request_timeout,
            page_size,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(BUILD_API_URL.unwrap_or(DEFAULT_API_URL))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
