//! Application configuration management.

use serde::Deserialize;

use crate::error::PageResult;
use crate::types::{LabelOverrides, Labels, PaginationConfig};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pagination input settings.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Label overrides merged over the default label set.
    #[serde(default)]
    pub labels: LabelOverrides,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "pagekit=debug".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> PageResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PAGEKIT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Returns the default label set with the configured overrides applied.
    #[must_use]
    pub fn labels(&self) -> Labels {
        Labels::default().merge(self.labels.clone())
    }
}
