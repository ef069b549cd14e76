// latestlog - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant keeps the path or
// pattern it failed on plus the underlying cause where one exists.

use crate::util::constants;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all latestlog operations.
/// Errors are categorised by the pipeline stage that produced them.
#[derive(Debug)]
pub enum LatestLogError {
    /// The search pattern could not be built.
    Resolve(ResolveError),

    /// Expansion, metadata lookup or selection failed.
    Discovery(DiscoveryError),

    /// Configuration loading failed.
    Config(ConfigError),

    /// Rendering or writing the report failed.
    Report(ReportError),
}

impl LatestLogError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Resolve(_) => constants::EXIT_UNRESOLVED,
            Self::Discovery(DiscoveryError::NoLogFilesFound { .. }) => {
                constants::EXIT_NO_LOG_FILES
            }
            Self::Discovery(DiscoveryError::FileVanished { .. }) => {
                constants::EXIT_FILE_VANISHED
            }
            Self::Discovery(_) | Self::Config(_) | Self::Report(_) => constants::EXIT_FAILURE,
        }
    }
}

impl fmt::Display for LatestLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve(e) => write!(f, "{e}"),
            Self::Discovery(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Report(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for LatestLogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolve(e) => Some(e),
            Self::Discovery(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Report(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolve errors
// ---------------------------------------------------------------------------

/// Errors raised while building the platform search pattern.
#[derive(Debug)]
pub enum ResolveError {
    /// The host OS is neither Linux nor Windows.
    UnsupportedPlatform { os: String },

    /// The home directory of the invoking user could not be determined.
    HomeDirNotFound,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform { os } => write!(
                f,
                "unsupported platform '{os}': only linux and windows are handled"
            ),
            Self::HomeDirNotFound => {
                write!(f, "could not determine the current user's home directory")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<ResolveError> for LatestLogError {
    fn from(e: ResolveError) -> Self {
        Self::Resolve(e)
    }
}

// ---------------------------------------------------------------------------
// Discovery errors
// ---------------------------------------------------------------------------

/// Errors related to log file expansion, metadata lookup and selection.
#[derive(Debug)]
pub enum DiscoveryError {
    /// The search pattern is not a valid glob.
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// No file matched the search pattern.
    NoLogFilesFound { pattern: String },

    /// A file matched during expansion no longer exists.
    FileVanished { path: PathBuf, source: io::Error },

    /// Metadata for a matched file could not be read.
    Metadata { path: PathBuf, source: io::Error },
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, source } => {
                write!(f, "invalid search pattern '{pattern}': {source}")
            }
            Self::NoLogFilesFound { pattern } => {
                write!(f, "no log files found matching '{pattern}'")
            }
            Self::FileVanished { path, .. } => write!(
                f,
                "log file '{}' disappeared before its modification time could be read",
                path.display()
            ),
            Self::Metadata { path, source } => write!(
                f,
                "cannot read modification time of '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::FileVanished { source, .. } => Some(source),
            Self::Metadata { source, .. } => Some(source),
            Self::NoLogFilesFound { .. } => None,
        }
    }
}

impl From<DiscoveryError> for LatestLogError {
    fn from(e: DiscoveryError) -> Self {
        Self::Discovery(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// Only an explicitly requested config file is fatal; the implicit one
/// degrades to warnings.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The config file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// I/O error reading the config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Config '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::FileTooLarge { .. } => None,
        }
    }
}

impl From<ConfigError> for LatestLogError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Errors related to rendering and writing the report.
#[derive(Debug)]
pub enum ReportError {
    /// JSON serialisation error.
    Json(serde_json::Error),

    /// Writing to the output stream failed.
    Io(io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => write!(f, "JSON serialisation failed: {source}"),
            Self::Io(source) => write!(f, "cannot write report: {source}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) => Some(source),
            Self::Io(source) => Some(source),
        }
    }
}

impl From<ReportError> for LatestLogError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

/// Convenience type alias for latestlog results.
pub type Result<T> = std::result::Result<T, LatestLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_per_class() {
        let unsupported: LatestLogError = ResolveError::UnsupportedPlatform {
            os: "macos".to_string(),
        }
        .into();
        assert_eq!(unsupported.exit_code(), constants::EXIT_UNRESOLVED);

        let empty: LatestLogError = DiscoveryError::NoLogFilesFound {
            pattern: "/x/*.log".to_string(),
        }
        .into();
        assert_eq!(empty.exit_code(), constants::EXIT_NO_LOG_FILES);

        let vanished: LatestLogError = DiscoveryError::FileVanished {
            path: PathBuf::from("/x/a.log"),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
        .into();
        assert_eq!(vanished.exit_code(), constants::EXIT_FILE_VANISHED);

        let config: LatestLogError = ConfigError::Io {
            path: PathBuf::from("/x/config.toml"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        }
        .into();
        assert_eq!(config.exit_code(), constants::EXIT_FAILURE);
    }

    #[test]
    fn test_messages_name_the_failure() {
        let e = DiscoveryError::NoLogFilesFound {
            pattern: "/home/u/logs/*.log".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "no log files found matching '/home/u/logs/*.log'"
        );

        let e = ResolveError::UnsupportedPlatform {
            os: "freebsd".to_string(),
        };
        assert!(e.to_string().contains("freebsd"));
    }

    #[test]
    fn test_source_chain_preserved() {
        use std::error::Error;
        let e: LatestLogError = DiscoveryError::Metadata {
            path: PathBuf::from("/x/a.log"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        }
        .into();
        let inner = e.source().expect("discovery error");
        assert!(inner.source().is_some(), "io::Error must be reachable");
    }
}
