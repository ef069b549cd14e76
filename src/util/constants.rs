// latestlog - util/constants.rs
//
// Single source of truth for all named constants, path segments and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "latestlog";

/// Application identifier used for this tool's own config directory.
pub const APP_ID: &str = "latestlog";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Companion application layout
// =============================================================================

/// Directory name the companion application (FinderModernGUI) uses under the
/// per-user data directory.
pub const COMPANION_DIR_NAME: &str = "findermoderngui";

/// Subdirectory holding the companion application's log files.
pub const LOGS_DIR_NAME: &str = "logs";

/// Filename glob selecting log files inside the logs directory.
pub const LOG_FILE_GLOB: &str = "*.log";

/// Path segments from the home directory to the data root on Linux.
pub const LINUX_DATA_SEGMENTS: &[&str] = &[".local", "share"];

/// Path segments from the home directory to the data root on Windows.
pub const WINDOWS_DATA_SEGMENTS: &[&str] = &["AppData", "Roaming"];

// =============================================================================
// Exit codes
// =============================================================================

/// Any failure without a more specific code (config, I/O, output).
pub const EXIT_FAILURE: i32 = 1;

/// The search pattern could not be built (unsupported OS, no home dir).
pub const EXIT_UNRESOLVED: i32 = 2;

/// No log file matched the search pattern.
pub const EXIT_NO_LOG_FILES: i32 = 3;

/// A matched file disappeared before its metadata could be read.
pub const EXIT_FILE_VANISHED: i32 = 4;

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at `warn` so stderr stays quiet on success.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum size of `config.toml` in bytes; larger files are ignored.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024; // 64 KB
