//! Integration tests for configuration loading

use bearlint::config::{CliTargeting, ConfigLoader, CLI_SECTION};
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that touch process environment
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_project_file_is_found_in_root() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bearlint.toml"),
        r#"
[sections.default]
files = ["src/**/*.rs"]
bears = ["KeywordBear"]

[sections.docs]
files = ["*.md"]
bears = ["LineLengthBear"]
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(dir.path()).unwrap();
    assert_eq!(config.sections.len(), 2);

    let targeting = CliTargeting {
        bears: vec!["SpaceConsistencyBear".to_string()],
        ..CliTargeting::default()
    };
    let sections = config.resolve_sections(&targeting);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].name, CLI_SECTION);
    assert_eq!(sections[0].config.files, vec!["src/**/*.rs".to_string()]);
}

#[test]
fn test_root_without_project_file() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::load(dir.path()).unwrap();
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_malformed_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[sections.default\nfiles = 3").unwrap();

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));
}

#[test]
fn test_environment_overrides_file() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bearlint.toml");
    fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();

    std::env::set_var("BEARLINT_LOGGING__LEVEL", "error");
    let result = ConfigLoader::load_from_file(&path);
    std::env::remove_var("BEARLINT_LOGGING__LEVEL");

    assert_eq!(result.unwrap().logging.level, "error");
}

#[test]
fn test_environment_list_for_named_section() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bearlint.toml");
    fs::write(&path, "[sections.docs]\nfiles = [\"*.md\"]\n").unwrap();

    std::env::set_var("BEARLINT_SECTIONS__DOCS__BEARS", "KeywordBear,LineLengthBear");
    let result = ConfigLoader::load_from_file(&path);
    std::env::remove_var("BEARLINT_SECTIONS__DOCS__BEARS");

    let config = result.unwrap();
    assert_eq!(
        config.sections["docs"].bears,
        vec!["KeywordBear".to_string(), "LineLengthBear".to_string()]
    );
    assert_eq!(config.sections["docs"].files, vec!["*.md".to_string()]);
}
