//! Configuration sections and defaulting accessors.

use crate::loader::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

const DEFAULT_LLM_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_GITHUB_RAW_URL: &str = "https://raw.githubusercontent.com";

/// Top-level repolens configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Relay server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// LLM provider settings.
    #[serde(default)]
    pub llm: LlmConfig,
    /// GitHub API settings.
    #[serde(default)]
    pub github: GithubConfig,
}

impl Config {
    /// Base URL of the relay server implied by the server section, used by
    /// the client-side components to reach `/api/explain` and `/api/summary`.
    pub fn relay_url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }
}

/// Bind address for the relay server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// LLM provider settings. The API credential is server-held and never
/// exposed to clients of the relay endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Chat-completion endpoint base URL (OpenAI-compatible).
    pub endpoint: Option<String>,
    /// Chat model name.
    pub model: Option<String>,
    /// API key. Usually left unset here and provided via `OPENAI_API_KEY`.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl LlmConfig {
    /// The endpoint, falling back to the OpenAI default.
    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_LLM_ENDPOINT.to_string())
    }

    /// The chat model, falling back to the default.
    pub fn model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string())
    }

    /// Request timeout in seconds, falling back to the default.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// The API key from the config file or the `OPENAI_API_KEY` environment
    /// variable.
    pub fn api_key(&self) -> ConfigResult<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        std::env::var("OPENAI_API_KEY").map_err(|_| ConfigError::MissingCredential {
            name: "OPENAI_API_KEY",
        })
    }
}

/// GitHub API settings. The token is optional; unauthenticated requests
/// work with lower rate limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubConfig {
    /// REST API base URL.
    pub api_url: Option<String>,
    /// Raw content base URL.
    pub raw_url: Option<String>,
    /// Access token. Usually left unset here and provided via `GITHUB_TOKEN`.
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl GithubConfig {
    /// The REST API base URL, falling back to api.github.com.
    pub fn api_url(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string())
    }

    /// The raw content base URL, falling back to raw.githubusercontent.com.
    pub fn raw_url(&self) -> String {
        self.raw_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GITHUB_RAW_URL.to_string())
    }

    /// The token from the config file or the `GITHUB_TOKEN` environment
    /// variable, if either is set.
    pub fn token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
    }

    /// Request timeout in seconds, falling back to the default.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}
