use contracts::dashboards::d100_sales_overview::DashboardFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::dashboards::d100_sales_overview::SnapshotSettings;
use crate::domain::a001_order::generator::MAX_HISTORY_DAYS;
use crate::domain::a001_order::GeneratorSettings;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub order_count: usize,
    pub customer_pool: u32,
    pub order_id_prefix: String,
    pub first_sequence: u64,
    pub history_days: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub date_range_days: i64,
    pub category: String,
    pub top_products_limit: usize,
    pub trend_points: usize,
}

/// Invalid configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("generator.order_count must be positive")]
    EmptyDataset,

    #[error("generator.customer_pool must be positive")]
    EmptyCustomerPool,

    #[error("generator.history_days must be in 1..={max}, got {0}", max = MAX_HISTORY_DAYS)]
    InvalidHistory(i64),

    #[error("generator.order_id_prefix must not be empty")]
    EmptyOrderPrefix,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[generator]
order_count = 5000
customer_pool = 500
order_id_prefix = "FKO"
first_sequence = 10000
history_days = 365

[dashboard]
date_range_days = 30
category = "all"
top_products_limit = 10
trend_points = 14
"#;

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let generator = &self.generator;
        if generator.order_count == 0 {
            return Err(ConfigError::EmptyDataset);
        }
        if generator.customer_pool == 0 {
            return Err(ConfigError::EmptyCustomerPool);
        }
        if generator.history_days <= 0 || generator.history_days > MAX_HISTORY_DAYS {
            return Err(ConfigError::InvalidHistory(generator.history_days));
        }
        if generator.order_id_prefix.is_empty() {
            return Err(ConfigError::EmptyOrderPrefix);
        }
        Ok(())
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            order_count: self.generator.order_count,
            customer_pool: self.generator.customer_pool,
            order_id_prefix: self.generator.order_id_prefix.clone(),
            first_sequence: self.generator.first_sequence,
            history_days: self.generator.history_days,
            seed: self.generator.seed,
        }
    }

    pub fn dashboard_filter(&self) -> DashboardFilter {
        DashboardFilter {
            date_range_days: self.dashboard.date_range_days,
            category: self.dashboard.category.clone(),
        }
    }

    pub fn snapshot_settings(&self) -> SnapshotSettings {
        SnapshotSettings {
            top_products_limit: self.dashboard.top_products_limit,
            trend_points: self.dashboard.trend_points,
        }
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return Ok(Config::from_toml(&contents)?);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Ok(Config::from_toml(DEFAULT_CONFIG)?)
}
