// tests/config_test.rs
use release_tiers::config::{load_config, Config};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_config_custom_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(
        &path,
        r#"
        [input]
        env_var = "MY_REF"

        [publish]
        aliases = false
        "#,
    )
    .unwrap();

    let config = load_config(path.to_str()).unwrap();
    assert_eq!(config.input.env_var, "MY_REF");
    assert!(!config.publish.aliases);
    // Unspecified sections fall back to defaults
    assert_eq!(config.assets.dir, None);
}

#[test]
fn test_load_config_missing_custom_path_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("does-not-exist.toml");
    assert!(load_config(path.to_str()).is_err());
}

#[test]
fn test_load_config_invalid_toml_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[input\nenv_var = ").unwrap();
    assert!(load_config(path.to_str()).is_err());
}

#[test]
fn test_asset_dir_override() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("assets.toml");
    fs::write(
        &path,
        r#"
        [assets]
        dir = "dist/artifacts"
        "#,
    )
    .unwrap();

    let config = load_config(path.to_str()).unwrap();
    assert_eq!(config.assets.dir.as_deref(), Some("dist/artifacts"));
}

#[test]
fn test_default_config_shape() {
    let config = Config::default();
    assert_eq!(config.input.env_var, "GITHUB_REF_NAME");
    assert!(config.publish.aliases);
    assert_eq!(config.assets.dir, None);
}
