//! Configuration loading and archive folder resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the archive folder location
pub const ARCHIVE_FOLDER_ENV: &str = "AMYARC_ARCHIVE_FOLDER";

/// Bootstrap configuration loaded from TOML file
///
/// These settings cannot change during runtime. The service must restart
/// to pick up changes to the TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    /// Folder holding analysis records and audio clips (optional)
    ///
    /// If not specified, resolution falls through to environment and
    /// OS-dependent defaults.
    #[serde(default)]
    pub archive_folder: Option<PathBuf>,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            archive_folder: None,
            port: default_port(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Load configuration from an explicit TOML file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Load configuration from the default per-platform location
    ///
    /// A missing or unreadable config file is not fatal: the built-in
    /// defaults are used and a warning is logged.
    pub fn load_default_location() -> Self {
        let Some(path) = default_config_file() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }
}

/// Default configuration file path for the platform
///
/// Linux: `~/.config/amyarc/amyarc-ar.toml`, falling back to
/// `/etc/amyarc/config.toml`. macOS and Windows use the user config
/// directory only.
pub fn default_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("amyarc").join("amyarc-ar.toml"));

    if cfg!(target_os = "linux") {
        if let Some(path) = &user_config {
            if path.exists() {
                return user_config;
            }
        }
        let system_config = PathBuf::from("/etc/amyarc/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
        return user_config;
    }

    user_config
}

/// Archive folder resolution following priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable (AMYARC_ARCHIVE_FOLDER)
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_archive_folder(cli_arg: Option<&Path>, toml_config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ARCHIVE_FOLDER_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &toml_config.archive_folder {
        return path.clone();
    }

    // Priority 4: OS-dependent compiled default
    default_archive_folder()
}

/// Get OS-dependent default archive folder path
pub fn default_archive_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/amyarc/analysis (or /var/lib/amyarc/analysis system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("amyarc").join("analysis"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/amyarc/analysis"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/amyarc/analysis
        dirs::data_dir()
            .map(|d| d.join("amyarc").join("analysis"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/amyarc/analysis"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\amyarc\analysis
        dirs::data_local_dir()
            .map(|d| d.join("amyarc").join("analysis"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\amyarc\\analysis"))
    } else {
        PathBuf::from("./amyarc_data/analysis")
    }
}
