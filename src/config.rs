// Server configuration - read from the environment at startup
//
//   PORT                  listen port (default 5000)
//   SIMULATE_LATENCY      1/true/yes/on enables the demo delays (1000ms list, 800ms search)
//   SIMULATED_LATENCY_MS  fixed delay for list and search, overrides SIMULATE_LATENCY

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    #[error("invalid SIMULATED_LATENCY_MS value: {0:?}")]
    InvalidLatency(String),
}

/// Artificial response delays for the UI's loading-state demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatencyProfile {
    pub list: Duration,
    pub search: Duration,
}

impl LatencyProfile {
    pub fn off() -> Self {
        Self::default()
    }

    /// The delays the demo frontend was built against
    pub fn demo() -> Self {
        LatencyProfile {
            list: Duration::from_millis(1000),
            search: Duration::from_millis(800),
        }
    }

    pub fn uniform(delay: Duration) -> Self {
        LatencyProfile {
            list: delay,
            search: delay,
        }
    }

    pub fn is_off(&self) -> bool {
        self.list.is_zero() && self.search.is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub latency: LatencyProfile,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            latency: LatencyProfile::off(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            _ => DEFAULT_PORT,
        };

        let latency = match lookup("SIMULATED_LATENCY_MS") {
            Some(raw) if !raw.trim().is_empty() => {
                let ms = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidLatency(raw.clone()))?;
                LatencyProfile::uniform(Duration::from_millis(ms))
            }
            _ => match lookup("SIMULATE_LATENCY") {
                Some(flag) if is_truthy(&flag) => LatencyProfile::demo(),
                _ => LatencyProfile::off(),
            },
        };

        Ok(ServerConfig { port, latency })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
