// latestlog - core/discovery.rs
//
// Log file discovery: expand the search pattern into candidate paths, then
// read each candidate's modification time.
//
// Architecture note: this module uses `glob` for directory expansion as an
// OS abstraction. It reads only file *metadata* (mtime), never contents.
//
// Expansion is forgiving: a missing logs directory or an unreadable entry
// simply contributes no candidates. Lookup is strict: a candidate that has
// vanished or whose metadata cannot be read fails the whole run.

use crate::core::model::{LogFilePath, ModificationRecord};
use crate::core::resolver::SearchPattern;
use crate::util::error::DiscoveryError;
use chrono::{DateTime, Utc};
use std::io;
use std::path::Path;

/// Match options for log file expansion.
///
/// `*` never crosses a separator (keeps the search to one level) and never
/// matches a leading dot, so hidden files are not candidates. Windows
/// filenames compare case-insensitively.
fn match_options() -> glob::MatchOptions {
    glob::MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

// =============================================================================
// Directory expansion
// =============================================================================

/// Expand `pattern` into the log files that exist right now.
///
/// Returns an empty list (not an error) when the directory is missing or
/// holds no matching files. Entries the glob engine cannot read are logged
/// and skipped.
pub fn expand(pattern: &SearchPattern) -> Result<Vec<LogFilePath>, DiscoveryError> {
    let glob_str = pattern.pattern();
    tracing::debug!(pattern = %glob_str, "Expanding search pattern");

    let entries =
        glob::glob_with(&glob_str, match_options()).map_err(|source| {
            DiscoveryError::InvalidPattern {
                pattern: glob_str.clone(),
                source,
            }
        })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                tracing::trace!(file = %path.display(), "Candidate log file");
                paths.push(path);
            }
            Err(e) => {
                tracing::warn!(
                    path = %e.path().display(),
                    error = %e.error(),
                    "Skipping unreadable entry"
                );
            }
        }
    }

    tracing::debug!(
        logs_dir = %pattern.logs_dir().display(),
        candidates = paths.len(),
        "Expansion complete"
    );
    Ok(paths)
}

// =============================================================================
// Modification-time lookup
// =============================================================================

/// Read the modification time of every path in `paths`.
///
/// A path that no longer exists yields `FileVanished`; any other metadata
/// failure yields `Metadata`. Directories and dangling symlinks are not log
/// files and are skipped.
pub fn lookup_modification_times<I>(paths: I) -> Result<ModificationRecord, DiscoveryError>
where
    I: IntoIterator<Item = LogFilePath>,
{
    let mut record = ModificationRecord::new();
    for path in paths {
        let Some(modified) = modification_time(&path)? else {
            continue;
        };
        tracing::trace!(path = %path.display(), modified = %modified, "Modification time read");
        record.insert(path, modified);
    }
    Ok(record)
}

/// Modification time of `path`, or `None` if it is not a readable log file.
fn modification_time(path: &Path) -> Result<Option<DateTime<Utc>>, DiscoveryError> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound && is_dangling_symlink(path) => {
            tracing::warn!(path = %path.display(), "Skipping dangling symlink");
            return Ok(None);
        }
        Err(e) => return Err(classify_io_error(path, e)),
    };
    if metadata.is_dir() {
        tracing::debug!(path = %path.display(), "Skipping directory matched by pattern");
        return Ok(None);
    }
    let modified = metadata
        .modified()
        .map_err(|e| classify_io_error(path, e))?;
    Ok(Some(DateTime::<Utc>::from(modified)))
}

/// The link itself exists but its target does not.
fn is_dangling_symlink(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

fn classify_io_error(path: &Path, source: io::Error) -> DiscoveryError {
    if source.kind() == io::ErrorKind::NotFound {
        tracing::warn!(path = %path.display(), "Log file vanished during lookup");
        DiscoveryError::FileVanished {
            path: path.to_path_buf(),
            source,
        }
    } else {
        DiscoveryError::Metadata {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Expand `pattern` and read the modification time of every match.
pub fn collect_modification_times(
    pattern: &SearchPattern,
) -> Result<ModificationRecord, DiscoveryError> {
    let paths = expand(pattern)?;
    lookup_modification_times(paths)
}

// =============================================================================
// Tests
// =============================================================================
