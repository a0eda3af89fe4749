//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/fixtree/fixtree.toml`
//! 3. Local config: `./.fixtree.toml` (working directory)
//! 4. Environment variables: `FIXTREE_*` prefix
//!
//! Command-line flags override all of these in the command layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::DEFAULT_WINDOW_DAYS;
use crate::application::ApplicationError;

/// Default word list path, relative to the working directory.
pub const DEFAULT_WORDS_FILE: &str = "words.txt";
/// Default name of the generated root directory.
pub const DEFAULT_ROOT_NAME: &str = "files";
/// Default directory levels below the root.
pub const DEFAULT_DEPTH: u32 = 3;

/// Unified configuration for fixtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Word list: one candidate name per line
    pub words_file: PathBuf,
    /// Name of the generated root directory
    pub root_name: String,
    /// Directory levels below the root
    pub depth: u32,
    /// Scramble access/modification times of created entries
    pub timestamps: bool,
    /// Half-width of the timestamp window, in days
    pub window_days: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_file: PathBuf::from(DEFAULT_WORDS_FILE),
            root_name: DEFAULT_ROOT_NAME.to_string(),
            depth: DEFAULT_DEPTH,
            timestamps: false,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Raw settings for intermediate parsing (all fields are Option to detect
/// "not specified" during layered merging).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub words_file: Option<PathBuf>,
    pub root_name: Option<String>,
    pub depth: Option<u32>,
    pub timestamps: Option<bool>,
    pub window_days: Option<u64>,
}

/// Get the XDG config directory for fixtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fixtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("fixtree.toml"))
}

/// Get the path to the local config file under `dir` (normally the cwd).
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".fixtree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand environment variables and tilde in a path string.
///
/// Supports `$VAR`, `${VAR}` and `~` via the shellexpand crate.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Merge overlay config onto self (base).
    ///
    /// All fields are scalars: overlay wins if Some, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            words_file: overlay
                .words_file
                .clone()
                .unwrap_or_else(|| self.words_file.clone()),
            root_name: overlay
                .root_name
                .clone()
                .unwrap_or_else(|| self.root_name.clone()),
            depth: overlay.depth.unwrap_or(self.depth),
            timestamps: overlay.timestamps.unwrap_or(self.timestamps),
            window_days: overlay.window_days.unwrap_or(self.window_days),
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.words_file.to_string_lossy().as_ref());
        self.words_file = PathBuf::from(expanded);
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory searched for `.fixtree.toml` (normally cwd)
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/fixtree/fixtree.toml`
    /// 3. Local config: `<local_dir>/.fixtree.toml`
    /// 4. Environment variables: `FIXTREE_*` prefix
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Load global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Load local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Apply environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply FIXTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(Environment::with_prefix("FIXTREE"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("words_file") {
            settings.words_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("root_name") {
            settings.root_name = val;
        }
        if let Ok(val) = config.get_int("depth") {
            settings.depth = u32::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("depth out of range: {val}"),
            })?;
        }
        if let Ok(val) = config.get_bool("timestamps") {
            settings.timestamps = val;
        }
        if let Ok(val) = config.get_int("window_days") {
            settings.window_days = u64::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("window_days out of range: {val}"),
            })?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# fixtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/fixtree/fixtree.toml
#   Local:  ./.fixtree.toml
#   Env:    FIXTREE_* environment variables
#
# Command-line flags override all of the above.

# Word list: one candidate name per line
# words_file = "words.txt"

# Name of the generated root directory
# root_name = "files"

# Directory levels below the root
# depth = 3

# Scramble access/modification times of created entries
# timestamps = false

# Half-width of the timestamp window, in days
# window_days = 1000
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load(None).expect("load defaults");
        assert_eq!(settings.root_name, DEFAULT_ROOT_NAME);
        assert_eq!(settings.depth, DEFAULT_DEPTH);
        assert!(!settings.timestamps);
        assert_eq!(settings.window_days, DEFAULT_WINDOW_DAYS);
    }

    #[test]
    fn given_tilde_in_words_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            words_file: PathBuf::from("~/lists/words.txt"),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let words_str = settings.words_file.to_string_lossy();
        assert!(
            words_str.starts_with(&home),
            "words_file should start with home dir: {}",
            words_str
        );
        assert!(
            !words_str.contains('~'),
            "words_file should not contain tilde: {}",
            words_str
        );
    }

    #[test]
    fn given_env_var_in_words_file_when_expand_paths_then_expands_variable() {
        let mut settings = Settings {
            words_file: PathBuf::from("$HOME/words.txt"),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.words_file.to_string_lossy().starts_with(&home),
            "words_file should expand $HOME"
        );
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_fields_keep_base() {
        let base = Settings::default();
        let overlay = RawSettings {
            depth: Some(5),
            root_name: Some("fixtures".to_string()),
            ..RawSettings::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.depth, 5);
        assert_eq!(merged.root_name, "fixtures");
        assert_eq!(merged.words_file, base.words_file);
        assert_eq!(merged.timestamps, base.timestamps);
        assert_eq!(merged.window_days, base.window_days);
    }

    #[test]
    fn given_empty_overlay_when_merging_then_base_unchanged() {
        let base = Settings::default();
        let merged = base.merge_with(&RawSettings::default());
        assert_eq!(merged, base);
    }
}
