use std::env;
use std::path::PathBuf;

use anyhow::Context;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use soupkitchen_catalog::IngredientCatalog;
use soupkitchen_cooking::CookingConfig;
use soupkitchen_shared::GameMode;
use soupkitchen_tasting::ScoringStrategy;
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub cooking: CookingConfig,
    #[serde(default)]
    pub tasting: TastingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON file of ingredient records. The builtin catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn load(&self) -> anyhow::Result<IngredientCatalog> {
        let Some(path) = self.path.as_ref() else {
            return Ok(IngredientCatalog::builtin());
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = IngredientCatalog::from_json(&json)
            .with_context(|| format!("Invalid catalog {}", path.display()))?;

        tracing::info!(path = %path.display(), ingredients = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TastingConfig {
    #[serde(default)]
    pub strategy: ScoringStrategy,
    /// Seed for generated preferences and free play seating. Random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub game_mode: GameMode,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SOUPKITCHEN__COOKING__MODE, etc.)
    /// 2. Config file given by path, `CONFIG_PATH` or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("cooking.mode", "staged")?
            .set_default("cooking.min_cooking_time", 10.0)?
            .set_default("cooking.max_cooking_time", 60.0)?
            .set_default("cooking.default_thickness", 0.2)?
            .set_default("tasting.strategy", "continuous")?
            .set_default("tasting.game_mode", "free_play")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SOUPKITCHEN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        let cooking = &self.cooking;
        if cooking.min_cooking_time.is_nan() || cooking.min_cooking_time <= 0.0 {
            return Err("Minimum cooking time must be greater than 0".to_string());
        }
        if cooking.max_cooking_time.is_nan() || cooking.max_cooking_time <= cooking.min_cooking_time {
            return Err(format!(
                "Maximum cooking time ({}) must be greater than the minimum ({})",
                cooking.max_cooking_time, cooking.min_cooking_time
            ));
        }
        if !(0.1..=1.0).contains(&cooking.default_thickness) {
            return Err("Default thickness must be between 0.1 and 1.0".to_string());
        }
        if self.logging.level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        Ok(())
    }
}
