use std::{path::PathBuf, time::Duration};

use crate::deepseek;

mod env {
    pub const DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";
    pub const API_PORT: &str = "AIDESK_API_PORT";
    pub const UPSTREAM_URL: &str = "AIDESK_UPSTREAM_URL";
    pub const PUBLIC_DIR: &str = "AIDESK_PUBLIC_DIR";
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MODEL: &str = "deepseek-coder";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-wide configuration, resolved once at startup and handed to the
/// router constructor. A missing api key is a soft configuration error that
/// gets reported per-request, never a startup failure.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub upstream_url: String,
    pub model: String,
    pub request_timeout: Duration,
    pub port: u16,
    pub public_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = std::env::var(env::API_PORT).ok();
        let port = port.and_then(|x| x.parse().ok()).unwrap_or(DEFAULT_PORT);

        Self {
            api_key: std::env::var(env::DEEPSEEK_API_KEY).unwrap_or_default(),
            upstream_url: std::env::var(env::UPSTREAM_URL)
                .unwrap_or_else(|_| deepseek::DEEPSEEK_API_URL.to_string()),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            port,
            public_dir: std::env::var(env::PUBLIC_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            upstream_url: deepseek::DEEPSEEK_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            port: DEFAULT_PORT,
            public_dir: PathBuf::from("public"),
        }
    }
}
