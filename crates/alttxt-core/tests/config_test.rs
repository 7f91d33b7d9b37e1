//! Tests for the layered configuration system.

use std::sync::Mutex;

use alttxt_core::config::{AltTxtConfig, CliOverrides};
use alttxt_core::errors::ConfigError;
use alttxt_core::types::{Explanation, Level, Verbosity};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all ALTTXT_ env vars and point HOME at an empty directory so a
/// developer's user config cannot leak into the tests.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "ALTTXT_LEVEL",
        "ALTTXT_VERBOSITY",
        "ALTTXT_EXPLAIN",
        "ALTTXT_STRUCTURED",
        "ALTTXT_MIN_PASSES",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_defaults_without_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = AltTxtConfig::load(dir.path(), None).unwrap();
    let options = config.to_options();

    assert_eq!(options.level, Level::One);
    assert_eq!(options.verbosity, Verbosity::Medium);
    assert_eq!(options.explain, Explanation::None);
    assert!(!options.structured);
    assert_eq!(options.min_passes, 16);
}

#[test]
fn test_four_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".alttxt")).unwrap();
    std::fs::write(
        home.path().join(".alttxt").join("config.toml"),
        r#"
[generation]
explain = "full"
verbosity = "low"
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("alttxt.toml"),
        r#"
[generation]
level = "2"
verbosity = "high"

[expansion]
min_passes = 32
"#,
    )
    .unwrap();

    std::env::set_var("ALTTXT_LEVEL", "default");

    let cli = CliOverrides {
        structured: Some(true),
        ..Default::default()
    };
    let config = AltTxtConfig::load(dir.path(), Some(&cli)).unwrap();
    let options = config.to_options();

    // user config survives where nothing overrides it
    assert_eq!(options.explain, Explanation::Full);
    // project overrides user
    assert_eq!(options.verbosity, Verbosity::High);
    assert_eq!(options.min_passes, 32);
    // env overrides project
    assert_eq!(options.level, Level::Default);
    // cli
    assert!(options.structured);

    std::env::remove_var("ALTTXT_LEVEL");
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("ALTTXT_VERBOSITY", "shouting");
    let dir = tempdir();
    let config = AltTxtConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.to_options().verbosity, Verbosity::Medium);
    std::env::remove_var("ALTTXT_VERBOSITY");
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("alttxt.toml"), "[generation\nlevel = ").unwrap();
    let err = AltTxtConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::Malformed { .. }));
}

#[test]
fn test_zero_min_passes_fails_validation() {
    let err = AltTxtConfig::from_toml("[expansion]\nmin_passes = 0\n").unwrap_err();
    match err {
        ConfigError::OutOfRange { field, .. } => assert_eq!(field, "expansion.min_passes"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_enum_value_in_toml_is_rejected() {
    let err = AltTxtConfig::from_toml("[generation]\nlevel = \"7\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Malformed { .. }));
}

#[test]
fn test_toml_round_trip_keeps_overrides() {
    let config = AltTxtConfig::from_toml(
        "[generation]\nlevel = \"2\"\nexplain = \"simple\"\n",
    )
    .unwrap();
    let serialized = config.to_toml().unwrap();
    let reparsed = AltTxtConfig::from_toml(&serialized).unwrap();
    assert_eq!(reparsed.generation.level, Some(Level::Two));
    assert_eq!(reparsed.generation.explain, Some(Explanation::Simple));
    assert_eq!(reparsed.generation.verbosity, None);
}

#[test]
fn test_user_config_that_is_a_directory_is_skipped() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());
    std::fs::create_dir_all(home.path().join(".alttxt").join("config.toml")).unwrap();

    let dir = tempdir();
    let config = AltTxtConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.to_options().level, Level::One);
}

#[test]
fn test_malformed_user_config_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());
    std::fs::create_dir_all(home.path().join(".alttxt")).unwrap();
    std::fs::write(home.path().join(".alttxt").join("config.toml"), "level = = 2").unwrap();

    let dir = tempdir();
    match AltTxtConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::Malformed { path, .. } => assert!(path.ends_with("config.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_cli_overrides_on_loaded_config() {
    let mut config = AltTxtConfig::from_toml(
        "[generation]\nlevel = \"2\"\nverbosity = \"low\"\n",
    )
    .unwrap();
    config.apply_cli_overrides(&CliOverrides {
        verbosity: Some(Verbosity::High),
        ..Default::default()
    });
    assert_eq!(config.generation.level, Some(Level::Two));
    assert_eq!(config.generation.verbosity, Some(Verbosity::High));
}
