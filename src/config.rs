//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <FILE>`, else `$XDG_CONFIG_HOME/bindent/bindent.toml`
//! 3. Environment variables: `BINDENT_*` prefix
//!
//! The editor's session and buffer ids (`TEPID`, `BUFID`) are not settings;
//! they are taken per invocation by the CLI.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{
    expand_env_vars, BufferRef, BODY_FILE, DEFAULT_GUESS_LINE_LIMIT, INDENT_MARKER_FILE,
};

/// Unified configuration for bindent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding editor session state (default: /tmp)
    pub state_root: PathBuf,
    /// Prefix of a session directory name (default: "teddy.")
    pub session_prefix: String,
    /// Number of body lines inspected by `guess` (default: 200)
    pub guess_line_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_root: PathBuf::from("/tmp"),
            session_prefix: "teddy.".into(),
            guess_line_limit: DEFAULT_GUESS_LINE_LIMIT,
        }
    }
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub state_root: Option<PathBuf>,
    pub session_prefix: Option<String>,
    pub guess_line_limit: Option<usize>,
}

/// Get the XDG config directory for bindent.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bindent").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bindent.toml"))
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

impl Settings {
    /// Directory of one editor buffer.
    pub fn buffer_dir(&self, buffer: &BufferRef) -> PathBuf {
        buffer.dir(&self.state_root, &self.session_prefix)
    }

    /// Persisted buffer contents scanned by `guess`.
    pub fn body_path(&self, buffer: &BufferRef) -> PathBuf {
        self.buffer_dir(buffer).join(BODY_FILE)
    }

    /// Indent marker written by `guess` and read back by `+`/`-`.
    pub fn indent_marker_path(&self, buffer: &BufferRef) -> PathBuf {
        self.buffer_dir(buffer).join(INDENT_MARKER_FILE)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.state_root.to_string_lossy().as_ref());
        self.state_root = PathBuf::from(expanded);
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            state_root: overlay
                .state_root
                .clone()
                .unwrap_or_else(|| self.state_root.clone()),
            session_prefix: overlay
                .session_prefix
                .clone()
                .unwrap_or_else(|| self.session_prefix.clone()),
            guess_line_limit: overlay.guess_line_limit.unwrap_or(self.guess_line_limit),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; replaces the global one. Must exist.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        match config_file {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        let raw = load_raw_settings(&global_path)?;
                        current = current.merge_with(&raw);
                    }
                }
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply BINDENT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BINDENT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("state_root") {
            settings.state_root = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("session_prefix") {
            settings.session_prefix = val;
        }
        match config.get::<usize>("guess_line_limit") {
            Ok(val) => settings.guess_line_limit = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
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
    fn given_default_settings_when_deriving_paths_then_follow_teddy_layout() {
        let settings = Settings::default();
        let buffer = BufferRef::new("123", "4");

        assert_eq!(
            settings.body_path(&buffer),
            PathBuf::from("/tmp/teddy.123/4/body")
        );
        assert_eq!(
            settings.indent_marker_path(&buffer),
            PathBuf::from("/tmp/teddy.123/4/prop/indentchar")
        );
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unset_fields() {
        let overlay = RawSettings {
            state_root: Some(PathBuf::from("/var/run/teddy")),
            ..RawSettings::default()
        };

        let merged = Settings::default().merge_with(&overlay);

        assert_eq!(merged.state_root, PathBuf::from("/var/run/teddy"));
        assert_eq!(merged.session_prefix, "teddy.");
        assert_eq!(merged.guess_line_limit, 200);
    }

    #[test]
    fn given_env_var_in_state_root_when_expand_paths_then_expands_variable() {
        let mut settings = Settings {
            state_root: PathBuf::from("$HOME/state"),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.state_root.to_string_lossy().starts_with(&home),
            "state_root should expand $HOME"
        );
    }

    #[test]
    fn given_settings_when_to_toml_then_lists_all_fields() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("state_root = \"/tmp\""));
        assert!(toml.contains("session_prefix = \"teddy.\""));
        assert!(toml.contains("guess_line_limit = 200"));
    }
}
