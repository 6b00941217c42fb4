//! Configuration loading and root folder resolution
//!
//! Tests that set or clear `NAMEGUESS_ROOT_FOLDER` are marked `#[serial]` so
//! they never race on the process environment.

use nameguess_common::config::{
    default_root_folder, load_config_or_default, load_toml_config, write_toml_config,
    RootFolderResolver, TomlConfig, ROOT_FOLDER_ENV,
};
use nameguess_common::Error;
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
#[serial]
fn test_cli_argument_has_highest_priority() {
    env::set_var(ROOT_FOLDER_ENV, "/from/env");
    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/from/toml")),
        ..TomlConfig::default()
    };

    let resolved = RootFolderResolver::new().resolve(Some(Path::new("/from/cli")), &config);
    assert_eq!(resolved, PathBuf::from("/from/cli"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_env_var_beats_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/from/env");
    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/from/toml")),
        ..TomlConfig::default()
    };

    let resolved = RootFolderResolver::new().resolve(None, &config);
    assert_eq!(resolved, PathBuf::from("/from/env"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_toml_then_default() {
    env::remove_var(ROOT_FOLDER_ENV);
    let resolver = RootFolderResolver::new();

    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/from/toml")),
        ..TomlConfig::default()
    };
    assert_eq!(resolver.resolve(None, &config), PathBuf::from("/from/toml"));
    assert_eq!(
        resolver.resolve(None, &TomlConfig::default()),
        default_root_folder()
    );
}

#[test]
#[serial]
fn test_blank_env_var_is_ignored() {
    env::set_var("NAMEGUESS_TEST_ROOT", "   ");
    let resolver = RootFolderResolver::with_env_var("NAMEGUESS_TEST_ROOT");
    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/from/toml")),
        ..TomlConfig::default()
    };
    assert_eq!(resolver.resolve(None, &config), PathBuf::from("/from/toml"));
    env::remove_var("NAMEGUESS_TEST_ROOT");
}

#[test]
fn test_partial_toml_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
root_folder = "/srv/names"

[engine]
top_k = 3

[data]
load_states = false
"#,
    )
    .unwrap();

    let config = load_toml_config(&path).unwrap();
    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/names")));
    assert_eq!(config.engine.top_k, 3);
    assert_eq!(config.engine.max_candidates, 500);
    assert!((config.engine.rule_weight - 0.7).abs() < f64::EPSILON);
    assert!(!config.data.load_states);
    assert_eq!(config.data.national_prefix, "yob");
    assert_eq!(config.data.state_dir, "namesbystate");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_engine_section_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[engine]\nmodel_weight = 2.0\n").unwrap();

    assert!(matches!(load_toml_config(&path), Err(Error::Config(_))));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(load_config_or_default(Some(&missing)).is_err());
}

#[test]
fn test_write_then_load_preserves_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = TomlConfig::default();
    config.root_folder = Some(PathBuf::from("/data/names"));
    config.data.base_url = Some("https://example.org/names".to_string());
    config.engine.confidence_noise = 0.0;

    write_toml_config(&config, &path).unwrap();
    assert!(!path.with_extension("toml.tmp").exists());

    let loaded = load_toml_config(&path).unwrap();
    assert_eq!(loaded.root_folder, config.root_folder);
    assert_eq!(loaded.data.base_url, config.data.base_url);
    assert_eq!(loaded.engine.confidence_noise, 0.0);
}
