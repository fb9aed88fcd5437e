//! Shared configuration for HeadlineHub.
//!
//! Loads all tunables from environment variables (with `.env` support via
//! `dotenvy`). The parsing logic is decoupled from the process environment so
//! it can be tested with a plain map lookup.

mod app_config;
mod config;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
