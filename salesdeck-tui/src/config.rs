//! Configuration loading for the Salesdeck TUI.
//!
//! All fields are required. No defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// JSON dataset with one array per entity type.
    pub data_path: PathBuf,
    pub persistence_path: PathBuf,
    pub log_path: PathBuf,
    pub rows_per_page: usize,
    /// Choices offered by the rows-per-page keys, ascending.
    pub rows_per_page_options: Vec<usize>,
    pub tick_rate_ms: u64,
    pub selection_mode: SelectionMode,
    pub theme: ThemeConfig,
}

/// Where each page keeps its open record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Query parameter on the navigation history; back/forward restore it.
    Url,
    /// Held per page in memory; navigation leaves it alone.
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or SALESDECK_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: TuiConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.persistence_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "persistence_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.rows_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rows_per_page",
                reason: "must be > 0".to_string(),
            });
        }
        if self.rows_per_page_options.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "rows_per_page_options",
                reason: "must not be empty".to_string(),
            });
        }
        if self.rows_per_page_options.contains(&0) {
            return Err(ConfigError::InvalidValue {
                field: "rows_per_page_options",
                reason: "every option must be > 0".to_string(),
            });
        }
        if self.rows_per_page_options.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::InvalidValue {
                field: "rows_per_page_options",
                reason: "must be strictly ascending".to_string(),
            });
        }
        if !self.rows_per_page_options.contains(&self.rows_per_page) {
            return Err(ConfigError::InvalidValue {
                field: "rows_per_page",
                reason: "must be one of rows_per_page_options".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.theme.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "synthbrute" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'synthbrute' is supported".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("SALESDECK_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
