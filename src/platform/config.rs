// Blueprint - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::ViewMode;
use crate::util::constants;
use crate::util::error::{ConfigError, DirectoryError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Blueprint configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Full path of config.toml inside the platform config directory
    /// (e.g. ~/.config/blueprint/ or %APPDATA%\Blueprint\config\).
    pub config_file: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        let config_dir = match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => proj_dirs.config_dir().to_path_buf(),
            None => {
                tracing::warn!(
                    "Could not determine platform directories, using current directory"
                );
                PathBuf::from(".")
            }
        };
        let config_file = config_dir.join(constants::CONFIG_FILE_NAME);

        tracing::debug!(
            config = %config_dir.display(),
            file = %config_file.display(),
            "Platform paths resolved"
        );

        Self { config_file }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file can be used with
/// an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[directory]` section.
    pub directory: DirectorySection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Initial layout: "grid" or "list".
    pub view_mode: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
    /// Start with the filter panel open.
    pub menu_open: Option<bool>,
}

/// `[directory]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DirectorySection {
    /// Path of a JSON catalog replacing the built-in sample records.
    pub catalog: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Initial record layout.
    pub view_mode: ViewMode,
    /// Body font size in points.
    pub font_size: f32,
    /// Whether the side panel starts open.
    pub menu_open: bool,
    /// Catalog file replacing the built-in records.
    pub catalog: Option<PathBuf>,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            view_mode: ViewMode::default(),
            font_size: constants::DEFAULT_FONT_SIZE,
            menu_open: false,
            catalog: None,
            log_level: None,
            log_file: None,
        }
    }
}

/// Load and validate a config file.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with one warning
/// so the application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match read_raw_config(config_path) {
        Ok(raw) => {
            tracing::info!(path = %config_path.display(), "Loaded config.toml");
            validate(raw)
        }
        Err(e) => {
            let msg = format!("{}. Using defaults.", DirectoryError::from(e));
            tracing::warn!("{}", msg);
            (AppConfig::default(), vec![msg])
        }
    }
}

fn read_raw_config(config_path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source: e,
    })
}

/// Validate each field, accumulating all problems as warnings.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "ui.theme".to_string(),
                    value: other.to_string(),
                    expected: "\"dark\" or \"light\"".to_string(),
                }
                .to_string(),
            ),
        }
    }

    // -- UI: view_mode --
    if let Some(ref mode) = raw.ui.view_mode {
        match ViewMode::parse(mode) {
            Some(m) => config.view_mode = m,
            None => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "ui.view_mode".to_string(),
                    value: mode.clone(),
                    expected: "\"grid\" or \"list\"".to_string(),
                }
                .to_string(),
            ),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "ui.font_size".to_string(),
                    value: size.to_string(),
                    expected: format!(
                        "{}-{}",
                        constants::MIN_FONT_SIZE,
                        constants::MAX_FONT_SIZE
                    ),
                }
                .to_string(),
            );
        }
    }

    if let Some(open) = raw.ui.menu_open {
        config.menu_open = open;
    }

    // -- Directory: catalog --
    if let Some(ref catalog) = raw.directory.catalog {
        if !catalog.trim().is_empty() {
            config.catalog = Some(PathBuf::from(catalog));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    expected: constants::VALID_LOG_LEVELS.join(", "),
                }
                .to_string(),
            );
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}
