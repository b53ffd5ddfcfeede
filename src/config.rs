use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration embedded in the binary.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("assets/config.toml");

/// Error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}':\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Filenames to search for project-level configuration.
const CONFIG_FILENAMES: &[&str] = &["autocomplete-input.toml", ".autocomplete-input.toml"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Configuration for matching and the dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SuggestionConfig {
    /// Offer suggestions at all.
    #[serde(default = "default_true")]
    pub show: bool,

    /// Show the dropdown list instead of an inline completion.
    #[serde(default = "default_true")]
    pub dropdown: bool,

    /// Dropdown rows before truncation. Zero is rejected when applied.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    #[serde(default)]
    pub candidates: Vec<String>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            show: true,
            dropdown: true,
            max_items: default_max_items(),
            candidates: Vec::new(),
        }
    }
}

/// Configuration for the text input itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub placeholder: String,

    /// Maximum characters accepted, 0 means unlimited.
    #[serde(default)]
    pub char_limit: usize,

    /// Display width for placeholder truncation, 0 means unlimited.
    #[serde(default)]
    pub width: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            placeholder: String::new(),
            char_limit: 0,
            width: 0,
        }
    }
}

impl Config {
    /// Load configuration in the following order:
    /// 1. Project-level config (autocomplete-input.toml or .autocomplete-input.toml in current/parent dirs)
    /// 2. User-level config (~/.config/autocomplete-input/config.toml)
    /// 3. Default embedded config
    ///
    /// Returns an error if a config file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::project_config_path() {
            return Self::try_load_from_file(&path);
        }
        if let Some(path) = Self::user_config_path() {
            return Self::try_load_from_file(&path);
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicitly specified path.
    ///
    /// If no path is specified, falls back to the default load order.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::try_load_from_file(p),
            None => Self::load(),
        }
    }

    fn try_load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn project_config_path() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::find_config_in_ancestors(&cwd)
    }

    fn xdg_config_dir() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "autocomplete-input")?;
        Some(dirs.config_dir().to_path_buf())
    }

    pub fn user_config_path() -> Option<PathBuf> {
        let config_path = Self::xdg_config_dir()?.join("config.toml");
        config_path.exists().then_some(config_path)
    }

    fn find_config_in_ancestors(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for filename in CONFIG_FILENAMES {
                let config_path = current.join(filename);
                if config_path.exists() {
                    return Some(config_path);
                }
            }
            if !current.pop() {
                break;
            }
        }
        None
    }
}

fn default_true() -> bool {
    true
}

fn default_max_items() -> usize {
    5
}

fn default_prompt() -> String {
    "> ".to_string()
}
