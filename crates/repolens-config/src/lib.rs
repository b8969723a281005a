//! # Repolens Configuration
//!
//! Typed configuration for the repolens server, LLM provider, and GitHub
//! client. Configuration is an explicitly constructed object handed to
//! components at startup; nothing reads hidden global state after load.
//!
//! Settings come from a TOML file (`--config`, `./repolens.toml`, or the
//! user config directory) with credentials overridable from the
//! environment (`OPENAI_API_KEY`, `GITHUB_TOKEN`).

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod loader;

pub use config::{Config, GithubConfig, LlmConfig, ServerConfig};
pub use loader::{ConfigError, ConfigResult};
