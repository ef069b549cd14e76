// latestlog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A filesystem path identifying a candidate log file.
pub type LogFilePath = PathBuf;

// =============================================================================
// Modification record
// =============================================================================

/// Mapping from candidate log file to its last-modification time.
///
/// Keys are unique. The map is ordered by path so that any walk over it is
/// independent of the order the directory listing returned entries in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModificationRecord {
    times: BTreeMap<LogFilePath, DateTime<Utc>>,
}

impl ModificationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `modified` for `path`, replacing any earlier value.
    pub fn insert(&mut self, path: LogFilePath, modified: DateTime<Utc>) {
        self.times.insert(path, modified);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn get(&self, path: &Path) -> Option<&DateTime<Utc>> {
        self.times.get(path)
    }

    /// Entries in ascending path order.
    pub fn iter(&self) -> impl Iterator<Item = (&LogFilePath, &DateTime<Utc>)> {
        self.times.iter()
    }
}

impl FromIterator<(LogFilePath, DateTime<Utc>)> for ModificationRecord {
    fn from_iter<I: IntoIterator<Item = (LogFilePath, DateTime<Utc>)>>(iter: I) -> Self {
        Self {
            times: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Selected result
// =============================================================================

/// A log file together with its modification time, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestLog {
    /// Full path to the log file.
    pub path: LogFilePath,

    /// Last modification time in UTC.
    pub modified: DateTime<Utc>,
}

impl LatestLog {
    pub fn new(path: LogFilePath, modified: DateTime<Utc>) -> Self {
        Self { path, modified }
    }

    /// Modification time as fractional seconds since the Unix epoch.
    pub fn modified_unix(&self) -> f64 {
        self.modified.timestamp() as f64
            + f64::from(self.modified.timestamp_subsec_nanos()) / 1_000_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_iterates_in_path_order() {
        let t = Utc.timestamp_opt(100, 0).unwrap();
        let mut record = ModificationRecord::new();
        record.insert(PathBuf::from("/logs/c.log"), t);
        record.insert(PathBuf::from("/logs/a.log"), t);
        record.insert(PathBuf::from("/logs/b.log"), t);

        let order: Vec<_> = record.iter().map(|(p, _)| p.clone()).collect();
        assert_eq!(
            order,
            vec![
                PathBuf::from("/logs/a.log"),
                PathBuf::from("/logs/b.log"),
                PathBuf::from("/logs/c.log"),
            ]
        );
    }

    #[test]
    fn test_record_keys_unique() {
        let mut record = ModificationRecord::new();
        record.insert(PathBuf::from("a.log"), Utc.timestamp_opt(1, 0).unwrap());
        record.insert(PathBuf::from("a.log"), Utc.timestamp_opt(2, 0).unwrap());
        assert_eq!(record.len(), 1);
        assert_eq!(
            record.get(Path::new("a.log")),
            Some(&Utc.timestamp_opt(2, 0).unwrap())
        );
    }

    #[test]
    fn test_modified_unix_keeps_fraction() {
        let log = LatestLog::new(
            PathBuf::from("a.log"),
            Utc.timestamp_opt(200, 500_000_000).unwrap(),
        );
        assert!((log.modified_unix() - 200.5).abs() < f64::EPSILON);
    }
}
