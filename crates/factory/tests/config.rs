use fabrik_factory::config::{ConfigError, ConfigErrorExt, load_config};
use fabrik_factory::{DuplicatePolicy, FactoryConfig};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn config_defaults_are_sane() {
    let config = FactoryConfig::default();
    assert_eq!(config.duplicates, DuplicatePolicy::Reject);
}

#[test]
fn factory_config_deserializes() {
    let cfg: FactoryConfig =
        serde_json::from_value(json!({ "duplicates": "replace" })).expect("config deserialize");
    assert_eq!(cfg.duplicates, DuplicatePolicy::Replace);

    let cfg: FactoryConfig = serde_json::from_value(json!({})).expect("empty config deserialize");
    assert_eq!(cfg.duplicates, DuplicatePolicy::Reject);

    assert!(serde_json::from_value::<FactoryConfig>(json!({ "duplicates": "merge" })).is_err());
}

#[test]
fn load_config_reads_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("fabrik.toml");
    fs::write(&path, "duplicates = \"replace\"\n")?;

    let cfg: FactoryConfig = load_config(Some(&path))?;
    assert_eq!(cfg.duplicates, DuplicatePolicy::Replace);
    Ok(())
}

#[test]
fn load_config_fails_for_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("absent.toml");

    let err = load_config::<FactoryConfig>(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Config error (Failed to build config):"));
    Ok(())
}

#[test]
fn load_config_rejects_unknown_policy() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("fabrik.json");
    fs::write(&path, r#"{ "duplicates": "merge" }"#)?;

    let err = load_config::<FactoryConfig>(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}

#[test]
fn raw_config_errors_convert_and_take_context() {
    let err: ConfigError = ::config::ConfigError::NotFound("duplicates".into()).into();
    assert!(matches!(err, ConfigError::Config { context: None, .. }));
    assert!(err.to_string().starts_with("Config error: "));

    let raw: Result<(), ::config::ConfigError> =
        Err(::config::ConfigError::Message("bad layer".into()));
    let err = raw.context("Merging overrides").unwrap_err();
    assert_eq!(err.to_string(), "Config error (Merging overrides): bad layer");
}
