//! Integration tests for Settings layered loading.
//!
//! Precedence: defaults → global config → local config → FIXTREE_* env vars.
//! All fields are scalars, so each layer simply overrides the fields it
//! specifies.
//!
//! Note: These tests run without a global config (temp directories only),
//! so they effectively test local config merging with defaults.

use std::fs;

use tempfile::TempDir;

use fixtree::config::{Settings, DEFAULT_DEPTH, DEFAULT_ROOT_NAME, DEFAULT_WORDS_FILE};

#[test]
fn given_empty_directory_when_loading_then_compiled_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();

    // Act
    let settings = Settings::load(Some(temp.path())).expect("load settings");

    // Assert
    assert_eq!(settings.words_file.to_str(), Some(DEFAULT_WORDS_FILE));
    assert_eq!(settings.root_name, DEFAULT_ROOT_NAME);
    assert_eq!(settings.depth, DEFAULT_DEPTH);
    assert!(!settings.timestamps);
    assert_eq!(settings.window_days, 1000);
}

#[test]
fn given_local_config_when_loading_then_overrides_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let local_config = r#"
root_name = "fixtures"
depth = 2
timestamps = true
window_days = 30
"#;
    fs::write(temp.path().join(".fixtree.toml"), local_config).unwrap();

    // Act
    let settings = Settings::load(Some(temp.path())).expect("load settings");

    // Assert
    assert_eq!(settings.root_name, "fixtures");
    assert_eq!(settings.depth, 2);
    assert!(settings.timestamps);
    assert_eq!(settings.window_days, 30);
}

#[test]
fn given_partial_local_config_when_loading_then_unspecified_fields_keep_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".fixtree.toml"), "depth = 5\n").unwrap();

    // Act
    let settings = Settings::load(Some(temp.path())).expect("load settings");

    // Assert
    assert_eq!(settings.depth, 5);
    assert_eq!(settings.words_file.to_str(), Some(DEFAULT_WORDS_FILE));
    assert_eq!(settings.root_name, DEFAULT_ROOT_NAME);
    assert!(!settings.timestamps);
}

#[test]
fn given_malformed_local_config_when_loading_then_config_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".fixtree.toml"), "depth = \"deep\"\n").unwrap();

    // Act
    let result = Settings::load(Some(temp.path()));

    // Assert
    let err = result.unwrap_err();
    assert!(err.to_string().contains("config error"), "got: {err}");
}

#[test]
fn given_words_file_with_env_var_when_loading_then_path_expanded() {
    // Arrange
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".fixtree.toml"),
        "words_file = \"$HOME/lists/words.txt\"\n",
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(temp.path())).expect("load settings");

    // Assert
    let home = std::env::var("HOME").expect("HOME should be set");
    assert!(
        settings.words_file.to_string_lossy().starts_with(&home),
        "words_file should expand $HOME: {}",
        settings.words_file.display()
    );
}
