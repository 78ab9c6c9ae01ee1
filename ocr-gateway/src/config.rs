use serde::{Deserialize, Serialize};
use std::env;

/// Fallback for `OLLAMA_API_URL` when the environment does not provide one.
pub const DEFAULT_OLLAMA_API_URL: &str = "http://localhost:11434/v1/chat/completions";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// `APP_ENV=development` turns on verbose defaults.
pub fn dev_mode_from_env() -> bool {
    env::var("APP_ENV").map(|v| v == "development").unwrap_or(false)
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Set when `APP_ENV=development`; only affects the default log filter.
    pub dev_mode: bool,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub engine: String,
    pub languages: String,
    pub data_path: Option<String>,
    /// Upper bound on how long one request may wait for recognition, queueing
    /// for the engine included. A request that runs out while still queued
    /// never reaches the engine. `0` waits forever.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parse_env_or("PORT", 5000),
                dev_mode: dev_mode_from_env(),
                max_body_bytes: parse_env_or("OCR_MAX_BODY_BYTES", 25 * 1024 * 1024),
            },
            ocr: OcrConfig {
                engine: env::var("OCR_ENGINE").unwrap_or_else(|_| "tesseract".to_string()),
                languages: env::var("OCR_LANGUAGES").unwrap_or_else(|_| "tur".to_string()),
                data_path: env::var("OCR_DATA_PATH").ok(),
                timeout_secs: parse_env_or("OCR_TIMEOUT", 60),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

impl ServerConfig {
    /// The URL this server is reachable at when bound as configured.
    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Endpoints handed to the browser client by `GET /config`.
///
/// Unlike [`Config`], these are resolved against the live process environment
/// every time, so an operator can repoint clients without a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClientEndpoints {
    #[serde(rename = "OCR_SERVER_URL")]
    pub ocr_server_url: String,
    #[serde(rename = "OLLAMA_API_URL")]
    pub ollama_api_url: String,
}

impl ClientEndpoints {
    pub fn resolve(server: &ServerConfig) -> Self {
        Self::resolve_with(server, |var| env::var(var).ok())
    }

    pub fn resolve_with<F>(server: &ServerConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            ocr_server_url: lookup("OCR_SERVER_URL").unwrap_or_else(|| server.public_url()),
            ollama_api_url: lookup("OLLAMA_API_URL")
                .unwrap_or_else(|| DEFAULT_OLLAMA_API_URL.to_string()),
        }
    }
}
