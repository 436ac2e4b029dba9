// src/config.rs
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5001";
pub const DEFAULT_MAX_WORKERS: usize = 8;
pub const DEFAULT_API_BASE: &str = "https://www.microburbs.com.au/report_generator/api";
// The Microburbs sandbox accepts this token.
pub const DEFAULT_API_TOKEN: &str = "test";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 20;

/// Application configuration, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub api_base: String,
    pub api_token: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address like 127.0.0.1:5001")?;

        let max_workers = match lookup("MAX_WORKERS") {
            Some(raw) => raw
                .parse::<NonZeroUsize>()
                .context("MAX_WORKERS must be a positive integer")?
                .get(),
            None => DEFAULT_MAX_WORKERS,
        };

        let api_base = lookup("MICROBURBS_API_BASE")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        Url::parse(&api_base).context("MICROBURBS_API_BASE must be an absolute URL")?;

        let api_token = lookup("MICROBURBS_TOKEN").unwrap_or_else(|| DEFAULT_API_TOKEN.to_string());

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            max_workers,
            api_base,
            api_token,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
