// latestlog - core/resolver.rs
//
// Platform path resolver: maps a platform identifier and a home directory to
// the glob pattern that selects the companion application's log files.
// Pure function; the platform and home directory are both injected.

use crate::util::constants;
use crate::util::error::ResolveError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Operating system family the resolver knows how to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    /// Any other OS, carrying the name it was detected as.
    Unsupported(String),
}

impl Platform {
    /// Map an OS name as reported by `std::env::consts::OS`.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// The platform this binary is running on.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => f.write_str("linux"),
            Self::Windows => f.write_str("windows"),
            Self::Unsupported(os) => f.write_str(os),
        }
    }
}

/// A directory plus the filename glob to expand inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    logs_dir: PathBuf,
}

impl SearchPattern {
    /// Search `logs_dir` for `*.log` files.
    pub fn in_dir(logs_dir: impl Into<PathBuf>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
        }
    }

    /// Directory whose immediate entries are searched.
    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// Glob string passed to the expander.
    ///
    /// The directory part is escaped so metacharacters in the home path
    /// match literally; only the trailing `*.log` is a wildcard.
    pub fn pattern(&self) -> String {
        let escaped_dir = glob::Pattern::escape(&self.logs_dir.to_string_lossy());
        PathBuf::from(escaped_dir)
            .join(constants::LOG_FILE_GLOB)
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Display for SearchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.logs_dir.join(constants::LOG_FILE_GLOB).display()
        )
    }
}

/// Build the search pattern for `platform`, rooted at `home`.
///
/// - Linux:   `<home>/.local/share/findermoderngui/logs/*.log`
/// - Windows: `<home>/AppData/Roaming/findermoderngui/logs/*.log`
pub fn search_pattern(platform: &Platform, home: &Path) -> Result<SearchPattern, ResolveError> {
    let data_segments = match platform {
        Platform::Linux => constants::LINUX_DATA_SEGMENTS,
        Platform::Windows => constants::WINDOWS_DATA_SEGMENTS,
        Platform::Unsupported(os) => {
            return Err(ResolveError::UnsupportedPlatform { os: os.clone() });
        }
    };

    let mut logs_dir = home.to_path_buf();
    logs_dir.extend(data_segments);
    logs_dir.push(constants::COMPANION_DIR_NAME);
    logs_dir.push(constants::LOGS_DIR_NAME);

    tracing::debug!(
        %platform,
        logs_dir = %logs_dir.display(),
        "Search pattern resolved"
    );

    Ok(SearchPattern::in_dir(logs_dir))
}
