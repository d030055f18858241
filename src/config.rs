//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! export LISTEN="0.0.0.0:8080"
//! export PUBLIC_BASE_URL="https://sho.rt"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://urls.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `PUBLIC_BASE_URL` - Prefix for rendered short URLs (default: `http://{LISTEN}`)
//! - `CHARSET` - Alphabet for generated codes (default: `a-z`)
//! - `CODE_LENGTH` - Length of generated codes (default: 6, max: 32)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)

use anyhow::{Context, Result};
use std::env;

use crate::utils::code_generator::{DEFAULT_ALPHABET, DEFAULT_CODE_LENGTH};

/// Longest generated code the service accepts.
const MAX_CODE_LENGTH: usize = 32;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Scheme and host used when rendering short URLs back to callers.
    pub public_base_url: String,
    /// Alphabet for generated codes (`CHARSET`).
    pub charset: String,
    pub code_length: usize,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://urls.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| format!("http://{}", listen_addr));
        let charset = env::var("CHARSET").unwrap_or_else(|_| DEFAULT_ALPHABET.to_string());

        let code_length = match env::var("CODE_LENGTH") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("CODE_LENGTH must be a positive integer, got '{}'", v))?,
            Err(_) => DEFAULT_CODE_LENGTH,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            listen_addr,
            public_base_url,
            charset,
            code_length,
            log_level,
            log_format,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - `charset` is empty or `code_length` is out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let valid_listen = self
            .listen_addr
            .rsplit_once(':')
            .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());
        if !valid_listen {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.public_base_url.starts_with("http://")
            && !self.public_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "PUBLIC_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.public_base_url
            );
        }

        if self.charset.is_empty() {
            anyhow::bail!("CHARSET must not be empty");
        }

        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "CODE_LENGTH must be between 1 and {}, got {}",
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Number of distinct codes the generator can produce, saturating at `u128::MAX`.
    pub fn code_space(&self) -> u128 {
        let mut distinct: Vec<char> = self.charset.chars().collect();
        distinct.sort_unstable();
        distinct.dedup();

        (distinct.len() as u128).saturating_pow(self.code_length as u32)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Public base URL: {}", self.public_base_url);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!(
            "  Codes: length {} over {} characters ({} combinations)",
            self.code_length,
            self.charset.chars().count(),
            self.code_space()
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if parsing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
