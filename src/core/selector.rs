// latestlog - core/selector.rs
//
// Selection of the most recently modified log file.
//
// Ordering is by modification time, newest first. Equal times fall back to
// ascending path order, so the result never depends on directory listing
// order.

use crate::core::model::{LatestLog, ModificationRecord};
use crate::util::error::DiscoveryError;
use std::cmp::Ordering;

/// Newest-first ordering with the smaller path winning ties.
fn newest_first(a: &LatestLog, b: &LatestLog) -> Ordering {
    b.modified
        .cmp(&a.modified)
        .then_with(|| a.path.cmp(&b.path))
}

/// Pick the entry with the latest modification time.
///
/// `pattern` is only used to name the search in the `NoLogFilesFound`
/// error when `record` is empty.
pub fn select_latest(
    record: &ModificationRecord,
    pattern: &str,
) -> Result<LatestLog, DiscoveryError> {
    let latest = record
        .iter()
        .map(|(path, modified)| LatestLog::new(path.clone(), *modified))
        .min_by(newest_first)
        .ok_or_else(|| DiscoveryError::NoLogFilesFound {
            pattern: pattern.to_string(),
        })?;

    tracing::debug!(
        path = %latest.path.display(),
        modified = %latest.modified,
        candidates = record.len(),
        "Latest log file selected"
    );
    Ok(latest)
}

/// Every entry of `record`, newest first.
///
/// Fails with `NoLogFilesFound` on an empty record, like [`select_latest`].
pub fn rank_newest_first(
    record: &ModificationRecord,
    pattern: &str,
) -> Result<Vec<LatestLog>, DiscoveryError> {
    if record.is_empty() {
        return Err(DiscoveryError::NoLogFilesFound {
            pattern: pattern.to_string(),
        });
    }
    let mut ranked: Vec<LatestLog> = record
        .iter()
        .map(|(path, modified)| LatestLog::new(path.clone(), *modified))
        .collect();
    ranked.sort_by(newest_first);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn record(entries: &[(&str, i64)]) -> ModificationRecord {
        entries
            .iter()
            .map(|(p, secs)| (PathBuf::from(p), Utc.timestamp_opt(*secs, 0).unwrap()))
            .collect()
    }

    #[test]
    fn test_single_file() {
        let latest = select_latest(&record(&[("a.log", 100)]), "*.log").unwrap();
        assert_eq!(latest.path, PathBuf::from("a.log"));
        assert_eq!(latest.modified.timestamp(), 100);
    }

    #[test]
    fn test_picks_latest_time_not_largest_path() {
        let r = record(&[("a.log", 100), ("b.log", 200), ("c.log", 150)]);
        let latest = select_latest(&r, "*.log").unwrap();
        assert_eq!(latest.path, PathBuf::from("b.log"));
        assert_eq!(latest.modified.timestamp(), 200);
    }

    #[test]
    fn test_tie_picks_smallest_path() {
        let r = record(&[("z.log", 300), ("m.log", 300), ("a.log", 100)]);
        for _ in 0..5 {
            let latest = select_latest(&r, "*.log").unwrap();
            assert_eq!(latest.path, PathBuf::from("m.log"));
        }
    }

    #[test]
    fn test_empty_record_is_no_log_files_found() {
        let result = select_latest(&ModificationRecord::new(), "/logs/*.log");
        match result {
            Err(DiscoveryError::NoLogFilesFound { pattern }) => {
                assert_eq!(pattern, "/logs/*.log")
            }
            other => panic!("expected NoLogFilesFound, got {other:?}"),
        }
    }

    #[test]
    fn test_rank_orders_newest_first() {
        let r = record(&[("a.log", 100), ("b.log", 200), ("c.log", 150), ("d.log", 200)]);
        let ranked = rank_newest_first(&r, "*.log").unwrap();
        let names: Vec<_> = ranked
            .iter()
            .map(|l| l.path.to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["b.log", "d.log", "c.log", "a.log"]);
    }

    #[test]
    fn test_rank_empty_is_error() {
        assert!(matches!(
            rank_newest_first(&ModificationRecord::new(), "*.log"),
            Err(DiscoveryError::NoLogFilesFound { .. })
        ));
    }
}
