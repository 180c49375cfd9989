//! Configuration file handling for ascii-art.
//!
//! Loads configuration from `~/.config/ascii-art/config.toml` or a custom path.
//! Every value is optional; command-line flags override the file and the
//! file overrides built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::ClientSettings;
use crate::search::{SearchEngine, DEFAULT_THUMBNAIL_SIZE};

/// Configuration file structure for ascii-art.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct RenderConfig {
    pub cols: Option<u32>,
    pub scale: Option<f64>,
    pub more_levels: Option<bool>,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct SearchConfig {
    pub engine: Option<SearchEngine>,
    pub thumbnail_size: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct HttpConfig {
    pub user_agent: Option<String>,
    pub accept_language: Option<String>,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub max_image_bytes: Option<u64>,
}

impl HttpConfig {
    /// Client settings with file values applied over the defaults.
    pub fn client_settings(&self) -> ClientSettings {
        let mut settings = ClientSettings::default();
        if let Some(ua) = &self.user_agent {
            settings.user_agent = ua.clone();
        }
        if let Some(lang) = &self.accept_language {
            settings.accept_language = lang.clone();
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.connect_timeout_secs {
            settings.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = self.max_retries {
            settings.max_retries = retries;
        }
        if let Some(bytes) = self.max_image_bytes {
            settings.max_image_bytes = bytes;
        }
        settings
    }
}

impl Config {
    /// Thumbnail edge length to request, falling back to the default.
    pub fn thumbnail_size(&self) -> u32 {
        self.search.thumbnail_size.unwrap_or(DEFAULT_THUMBNAIL_SIZE)
    }

    /// Load configuration from the default path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::read(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path given on the command line.
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_explicit(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound { path });
        }
        Self::read(&path)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-art").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-art/config.toml")
        })
}

/// Contents written by `ascii-art config init`.
pub const DEFAULT_CONFIG: &str = r#"# ascii-art configuration

[render]
# Number of characters per line
cols = 79
# Height scale (terminal cells are taller than wide)
scale = 0.43
# true: 70-level palette, false: 10-level palette
more_levels = true
# Quantize rows on all cores
parallel = false

[search]
# Image search engine (only "bing" for now)
engine = "bing"
# Thumbnail edge length requested from the engine
thumbnail_size = 200

[http]
# accept_language = "en-GB,en;q=0.5"
timeout_secs = 30
connect_timeout_secs = 10
max_retries = 3
max_image_bytes = 20971520
"#;
