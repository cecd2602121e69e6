//! Main application configuration
//!
//! This module defines the configuration used by the glicko-engine binary,
//! including environment variable and TOML file loading and validation.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "glicko-engine".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("Invalid {} value: {}", key, value)),
        Err(_) => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Rating settings
        if let Some(rating) = parse_env("GLICKO_INITIAL_RATING")? {
            self.rating.initial_rating = rating;
        }
        if let Some(deviation) = parse_env("GLICKO_INITIAL_DEVIATION")? {
            self.rating.initial_deviation = deviation;
        }
        if let Some(min_deviation) = parse_env("GLICKO_MIN_DEVIATION")? {
            self.rating.min_deviation = Some(min_deviation);
        }
        if let Some(max_deviation) = parse_env("GLICKO_MAX_DEVIATION")? {
            self.rating.max_deviation = Some(max_deviation);
        }
        if let Some(periods) = parse_env("GLICKO_PERIODS_ELAPSED")? {
            self.rating.periods_elapsed = Some(periods);
        }
        if let Some(decay) = parse_env("GLICKO_DECAY_CONSTANT")? {
            self.rating.decay_constant = Some(decay);
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate rating settings
    if !config.rating.initial_rating.is_finite() {
        return Err(anyhow!("Initial rating must be finite"));
    }
    if !config.rating.initial_deviation.is_finite() || config.rating.initial_deviation <= 0.0 {
        return Err(anyhow!("Initial deviation must be positive"));
    }
    config.rating.parameters()?;

    Ok(())
}
