//! Environment-driven configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial token, prefix, redis, relay and logging settings

use anyhow::{anyhow, bail, Context, Result};

pub const DEFAULT_COMMAND_PREFIX: &str = "/";
pub const DEFAULT_REDIS_HOST: &str = "redis";
pub const DEFAULT_REDIS_PORT: u16 = 6379;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "combined.log";
pub const DEFAULT_ERROR_LOG_FILE: &str = "error.log";

/// Deployment mode. Development additionally mirrors logs to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "production" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub command_prefix: String,
    pub redis_host: String,
    pub redis_port: u16,
    pub relay_enabled: bool,
    pub log_level: String,
    pub log_file: String,
    pub error_log_file: String,
    pub environment: Environment,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow!("DISCORD_TOKEN is not set"))?;

        let command_prefix =
            lookup("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());
        // The command registry strips exactly one leading character.
        if command_prefix.chars().count() != 1 {
            bail!("COMMAND_PREFIX must be a single character, got {command_prefix:?}");
        }

        let redis_host = lookup("REDIS_HOST").unwrap_or_else(|| DEFAULT_REDIS_HOST.to_string());
        let redis_port = match lookup("REDIS_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("REDIS_PORT is not a valid port: {port:?}"))?,
            None => DEFAULT_REDIS_PORT,
        };

        let relay_enabled = match lookup("RELAY_ENABLED") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| anyhow!("RELAY_ENABLED is not a boolean: {value:?}"))?,
            None => true,
        };

        Ok(Config {
            discord_token,
            command_prefix,
            redis_host,
            redis_port,
            relay_enabled,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_file: lookup("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            error_log_file: lookup("ERROR_LOG_FILE")
                .unwrap_or_else(|| DEFAULT_ERROR_LOG_FILE.to_string()),
            environment: Environment::parse(
                lookup("ENVIRONMENT").or_else(|| lookup("NODE_ENV")).as_deref(),
            ),
        })
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, self.redis_port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
