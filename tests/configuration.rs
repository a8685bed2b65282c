//! Tests for configuration loading

use soupkitchen::Config;
use soupkitchen::config::LogFormat;
use soupkitchen_cooking::CookingMode;
use soupkitchen_shared::GameMode;
use soupkitchen_tasting::ScoringStrategy;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.cooking.mode, CookingMode::Staged);
    assert_eq!(config.cooking.min_cooking_time, 10.0);
    assert_eq!(config.cooking.max_cooking_time, 60.0);
    assert_eq!(config.cooking.default_thickness, 0.2);
    assert_eq!(config.tasting.strategy, ScoringStrategy::Continuous);
    assert_eq!(config.tasting.game_mode, GameMode::FreePlay);
    assert_eq!(config.tasting.seed, Some(42));
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert!(config.catalog.path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("absent.toml");

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");
    assert_eq!(config.cooking.max_cooking_time, 60.0);
    assert_eq!(config.tasting.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("custom.toml");
    std::fs::write(
        &path,
        r#"
[cooking]
mode = "timed"
max_cooking_time = 90.0

[tasting]
strategy = "match"
game_mode = "parent_child"
seed = 7

[logging]
format = "json"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");
    assert_eq!(config.cooking.mode, CookingMode::Timed);
    assert_eq!(config.cooking.max_cooking_time, 90.0);
    assert_eq!(config.cooking.min_cooking_time, 10.0, "Untouched keys keep defaults");
    assert_eq!(config.tasting.strategy, ScoringStrategy::Match);
    assert_eq!(config.tasting.game_mode, GameMode::ParentChild);
    assert_eq!(config.tasting.seed, Some(7));
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_invalid_times_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("broken.toml");
    std::fs::write(&path, "[cooking]\nmin_cooking_time = 80.0\nmax_cooking_time = 60.0\n").unwrap();

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");
    let err = config.validate().unwrap_err();
    assert!(err.contains("Maximum cooking time"), "Unexpected error: {err}");
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("bad_strategy.toml");
    std::fs::write(&path, "[tasting]\nstrategy = \"vibes\"\n").unwrap();

    assert!(Config::load(Some(path.display().to_string())).is_err());
}

#[test]
fn test_catalog_path_is_loaded() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.child("ingredients.json");
    std::fs::write(
        &catalog_path,
        r#"[
  {"id": "leek", "category": "Vegetable", "base_color": {"r": 0.5, "g": 0.8, "b": 0.4, "a": 1.0}, "nutrition_value": 2.0, "flavor": 1.0},
  {"id": "star_candy", "name": "Star Candy", "category": "Special", "base_color": {"r": 1.0, "g": 0.9, "b": 0.2, "a": 1.0}, "nutrition_value": 0.5, "flavor": 3.0}
]"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.catalog.path = Some(catalog_path);
    let catalog = config.catalog.load().expect("Failed to load catalog");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("star_candy").unwrap().display_name(), "Star Candy");
}

#[test]
fn test_missing_catalog_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.catalog.path = Some(dir.child("nope.json"));

    let err = config.catalog.load().unwrap_err();
    assert!(err.to_string().contains("Failed to read catalog"));
}
