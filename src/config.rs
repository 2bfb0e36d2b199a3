use std::time::Duration;

use crate::error::{EngineError, Result};

/// Which record store backs the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Seeded in-memory store with optional simulated latency
    Memory,
    /// Remote record API over HTTP
    Api,
}

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    /// Base URL of the remote record API (required for `Backend::Api`)
    pub api_url: Option<String>,
    /// Artificial delay applied to every mock-store operation
    pub mock_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            api_url: None,
            mock_latency: Duration::ZERO,
        }
    }
}

impl Config {
    /// Read configuration from `SCOUT_BACKEND`, `SCOUT_API_URL` and
    /// `SCOUT_MOCK_LATENCY_MS`. Unset variables fall back to the in-memory
    /// backend with no latency.
    pub fn from_env() -> Result<Self> {
        let backend = match std::env::var("SCOUT_BACKEND") {
            Ok(value) => match value.to_lowercase().as_str() {
                "memory" => Backend::Memory,
                "api" => Backend::Api,
                other => {
                    return Err(EngineError::Config(format!(
                        "unknown SCOUT_BACKEND '{other}', expected 'memory' or 'api'"
                    )))
                }
            },
            Err(_) => Backend::Memory,
        };

        let api_url = std::env::var("SCOUT_API_URL").ok();

        let mock_latency = match std::env::var("SCOUT_MOCK_LATENCY_MS") {
            Ok(value) => {
                let ms: u64 = value.parse().map_err(|_| {
                    EngineError::Config(format!("SCOUT_MOCK_LATENCY_MS '{value}' is not a number"))
                })?;
                Duration::from_millis(ms)
            }
            Err(_) => Duration::ZERO,
        };

        Ok(Self {
            backend,
            api_url,
            mock_latency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_memory_backend() {
        let config = Config::default();
        assert_eq!(config.backend, Backend::Memory);
        assert!(config.api_url.is_none());
        assert_eq!(config.mock_latency, Duration::ZERO);
    }
}
