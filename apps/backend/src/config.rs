//! Server configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

/// Runtime settings for the quiz server.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Countdown length in ticks.
    pub time_limit: u32,
    /// Wall-clock length of one countdown tick.
    pub tick_period: Duration,
    /// Question bank file; the built-in bank is used when unset.
    pub bank_path: Option<PathBuf>,
    /// How long a finished session stays readable before it is evicted.
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            time_limit: 60,
            tick_period: Duration::from_millis(1000),
            bank_path: None,
            session_ttl: Duration::from_secs(300),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Env vars:
    /// - HOST (default 0.0.0.0)
    /// - PORT (default 3000)
    /// - QUIZ_TIME_LIMIT: countdown ticks (default 60)
    /// - QUIZ_TICK_MILLIS: tick length in milliseconds (default 1000)
    /// - QUIZ_BANK_PATH: question bank file (optional)
    /// - QUIZ_SESSION_TTL_SECS: seconds a finished session is kept (default 300)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => parse_number("PORT", value)?,
            None => defaults.port,
        };
        let time_limit = match lookup("QUIZ_TIME_LIMIT") {
            Some(value) => parse_number("QUIZ_TIME_LIMIT", value)?,
            None => defaults.time_limit,
        };
        let tick_period = match lookup("QUIZ_TICK_MILLIS") {
            Some(value) => {
                let millis: u64 = parse_number("QUIZ_TICK_MILLIS", value)?;
                if millis == 0 {
                    return Err(ConfigError::Zero {
                        name: "QUIZ_TICK_MILLIS",
                    });
                }
                Duration::from_millis(millis)
            }
            None => defaults.tick_period,
        };
        let session_ttl = match lookup("QUIZ_SESSION_TTL_SECS") {
            Some(value) => Duration::from_secs(parse_number("QUIZ_SESSION_TTL_SECS", value)?),
            None => defaults.session_ttl,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            time_limit,
            tick_period,
            bank_path: lookup("QUIZ_BANK_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            session_ttl,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}
