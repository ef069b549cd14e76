// latestlog - platform/config.rs
//
// Resolution of this tool's own config directory and config.toml loading
// with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::report::OutputFormat;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for latestlog configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/latestlog/ or %APPDATA%\latestlog\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[search]` section.
    pub search: SearchSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Report format: "text" or "json".
    pub format: Option<String>,
}

/// `[search]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Directory to search instead of the platform default.
    pub logs_dir: Option<String>,
}

/// Validated configuration derived from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Logging level string (applied when logging is initialised).
    pub log_level: Option<String>,
    /// Report format.
    pub format: OutputFormat,
    /// Logs directory override.
    pub logs_dir: Option<PathBuf>,
}

/// Load `config.toml` from `config_dir`, degrading to defaults.
///
/// A missing file yields defaults with no warnings (first run). An unreadable
/// or unparseable file yields defaults plus a warning; it never fails the run.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match read_raw(&config_path) {
        Ok(raw) => validate(raw),
        Err(e) => (AppConfig::default(), vec![format!("{e}. Using defaults.")]),
    }
}

/// Load an explicitly requested config file.
///
/// Unlike [`load_config`], a missing or malformed file is an error.
pub fn load_config_file(path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    read_raw(path).map(validate)
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let size = std::fs::metadata(path)
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if size > constants::MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_CONFIG_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Loaded config.toml");
    Ok(raw)
}

/// Validate each field, accumulating a warning for every rejected value.
fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        let normalised = level.trim().to_ascii_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&normalised.as_str()) {
            config.log_level = Some(normalised);
        } else {
            warnings.push(format!(
                "[logging] level = '{level}' is not one of {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    // -- Output: format --
    if let Some(format) = raw.output.format {
        match format.trim().parse::<OutputFormat>() {
            Ok(parsed) => config.format = parsed,
            Err(reason) => warnings.push(format!("[output] format: {reason}. Using text.")),
        }
    }

    // -- Search: logs_dir --
    if let Some(dir) = raw.search.logs_dir {
        if dir.trim().is_empty() {
            warnings.push("[search] logs_dir is empty. Using the platform default.".to_string());
        } else {
            config.logs_dir = Some(PathBuf::from(dir));
        }
    }

    (config, warnings)
}
