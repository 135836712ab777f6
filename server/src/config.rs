//! Configuration management for the todo summary server.
//!
//! Loads configuration from environment variables (optionally seeded from a
//! `.env` file). Backend choices are explicit: an unknown value or a missing
//! credential for the chosen backend fails startup instead of silently
//! picking another implementation.

use std::env;
use std::fmt;
use thiserror::Error;
use todo_summary_anthropic::{DEFAULT_API_URL, DEFAULT_MODEL};
use todo_summary_core::LlmSummary;

/// Configuration errors, reported before the server binds.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable required by the selected backend is unset or blank.
    #[error("{var} must be set when {reason}")]
    Missing {
        /// Variable name
        var: &'static str,
        /// Which setting requires it
        reason: &'static str,
    },

    /// A variable has a value outside its allowed set.
    #[error("{var}={value:?} is invalid, expected {expected}")]
    Invalid {
        /// Variable name
        var: &'static str,
        /// Value found
        value: String,
        /// Allowed values
        expected: &'static str,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Record store backend
    pub store: StoreConfig,
    /// Summary strategy
    pub summary: SummaryConfig,
    /// Summary delivery
    pub notifier: NotifierConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Deployment environment reported by `/health`
    pub environment: String,
}

impl ServerConfig {
    /// `host:port` for the listener.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where todos are persisted.
#[derive(Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// `PostgreSQL` via `DATABASE_URL`
    Postgres {
        /// Connection URL
        url: String,
        /// Pool size
        max_connections: u32,
    },
    /// Process memory; contents are lost on restart
    Memory,
}

/// How summaries are composed.
#[derive(Clone, PartialEq, Eq)]
pub enum SummaryConfig {
    /// Deterministic template
    Template,
    /// Anthropic Messages API
    Llm {
        /// API key
        api_key: String,
        /// Model id
        model: String,
        /// API root
        base_url: String,
        /// Completion budget per summary
        max_tokens: u32,
    },
}

/// Where summaries are delivered.
#[derive(Clone, PartialEq, Eq)]
pub enum NotifierConfig {
    /// Slack incoming webhook
    Slack {
        /// Webhook URL
        webhook_url: String,
    },
    /// Application log
    Log,
}

// Connection strings, API keys and webhook URLs carry credentials.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres {
                max_connections, ..
            } => f
                .debug_struct("Postgres")
                .field("max_connections", max_connections)
                .finish_non_exhaustive(),
            Self::Memory => f.write_str("Memory"),
        }
    }
}

impl fmt::Debug for SummaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template => f.write_str("Template"),
            Self::Llm {
                model,
                base_url,
                max_tokens,
                ..
            } => f
                .debug_struct("Llm")
                .field("model", model)
                .field("base_url", base_url)
                .field("max_tokens", max_tokens)
                .finish_non_exhaustive(),
        }
    }
}

impl fmt::Debug for NotifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slack { .. } => f.debug_struct("Slack").finish_non_exhaustive(),
            Self::Log => f.write_str("Log"),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for missing credentials or invalid values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for missing credentials or invalid values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let server = ServerConfig {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", var("PORT"), 5000)?,
            environment: var("APP_ENV").unwrap_or_else(|| "development".to_string()),
        };

        let store = match var("STORE_BACKEND").as_deref().unwrap_or("postgres") {
            "postgres" => StoreConfig::Postgres {
                url: var("DATABASE_URL").ok_or(ConfigError::Missing {
                    var: "DATABASE_URL",
                    reason: "STORE_BACKEND=postgres",
                })?,
                max_connections: parse_or(
                    "DATABASE_MAX_CONNECTIONS",
                    var("DATABASE_MAX_CONNECTIONS"),
                    10,
                )?,
            },
            "memory" => StoreConfig::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    var: "STORE_BACKEND",
                    value: other.to_string(),
                    expected: "postgres or memory",
                });
            }
        };

        let summary = match var("SUMMARY_STRATEGY").as_deref().unwrap_or("template") {
            "template" => SummaryConfig::Template,
            "llm" => SummaryConfig::Llm {
                api_key: var("ANTHROPIC_API_KEY").ok_or(ConfigError::Missing {
                    var: "ANTHROPIC_API_KEY",
                    reason: "SUMMARY_STRATEGY=llm",
                })?,
                model: var("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: var("ANTHROPIC_BASE_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                max_tokens: positive_or(
                    "ANTHROPIC_MAX_TOKENS",
                    var("ANTHROPIC_MAX_TOKENS"),
                    LlmSummary::DEFAULT_MAX_TOKENS,
                )?,
            },
            other => {
                return Err(ConfigError::Invalid {
                    var: "SUMMARY_STRATEGY",
                    value: other.to_string(),
                    expected: "template or llm",
                });
            }
        };

        let notifier = match var("NOTIFIER").as_deref().unwrap_or("slack") {
            "slack" => NotifierConfig::Slack {
                webhook_url: var("SLACK_WEBHOOK_URL").ok_or(ConfigError::Missing {
                    var: "SLACK_WEBHOOK_URL",
                    reason: "NOTIFIER=slack",
                })?,
            },
            "log" => NotifierConfig::Log,
            other => {
                return Err(ConfigError::Invalid {
                    var: "NOTIFIER",
                    value: other.to_string(),
                    expected: "slack or log",
                });
            }
        };

        Ok(Self {
            server,
            store,
            summary,
            notifier,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            var,
            value: raw,
            expected: "a positive integer",
        }),
    }
}

fn positive_or(var: &'static str, value: Option<String>, default: u32) -> Result<u32, ConfigError> {
    match parse_or(var, value, default)? {
        0 => Err(ConfigError::Invalid {
            var,
            value: "0".to_string(),
            expected: "a positive integer",
        }),
        n => Ok(n),
    }
}
