// latestlog - core/report.rs
//
// Text and JSON rendering of selected log files.
// Core layer: writes to any Write trait object.

use crate::core::model::LatestLog;
use crate::util::error::ReportError;
use chrono::SecondsFormat;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<path>\t<RFC 3339 timestamp>`, one line per file.
    #[default]
    Text,
    /// JSON object (single file) or array (listing).
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Serialised shape of one reported file.
#[derive(Debug, Serialize)]
struct ReportRecord {
    path: String,
    modified: String,
    modified_unix: f64,
}

impl From<&LatestLog> for ReportRecord {
    fn from(log: &LatestLog) -> Self {
        Self {
            path: log.path.display().to_string(),
            modified: format_timestamp(log),
            modified_unix: log.modified_unix(),
        }
    }
}

fn format_timestamp(log: &LatestLog) -> String {
    log.modified.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn text_line(log: &LatestLog) -> String {
    format!("{}\t{}", log.path.display(), format_timestamp(log))
}

/// Write the single selected file.
pub fn write_latest<W: Write>(
    log: &LatestLog,
    format: OutputFormat,
    mut writer: W,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", text_line(log)).map_err(ReportError::Io)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, &ReportRecord::from(log))
                .map_err(ReportError::Json)?;
            writeln!(writer).map_err(ReportError::Io)?;
        }
    }
    writer.flush().map_err(ReportError::Io)
}

/// Write every file in `logs`, in the order given.
pub fn write_listing<W: Write>(
    logs: &[LatestLog],
    format: OutputFormat,
    mut writer: W,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => {
            for log in logs {
                writeln!(writer, "{}", text_line(log)).map_err(ReportError::Io)?;
            }
        }
        OutputFormat::Json => {
            let records: Vec<ReportRecord> = logs.iter().map(ReportRecord::from).collect();
            serde_json::to_writer(&mut writer, &records).map_err(ReportError::Json)?;
            writeln!(writer).map_err(ReportError::Io)?;
        }
    }
    writer.flush().map_err(ReportError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn sample(path: &str, secs: i64) -> LatestLog {
        LatestLog::new(PathBuf::from(path), Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn test_text_line() {
        let mut out = Vec::new();
        write_latest(&sample("/logs/b.log", 200), OutputFormat::Text, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/logs/b.log\t1970-01-01T00:03:20Z\n"
        );
    }

    #[test]
    fn test_json_object() {
        let mut out = Vec::new();
        write_latest(&sample("/logs/b.log", 200), OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["path"], "/logs/b.log");
        assert_eq!(value["modified"], "1970-01-01T00:03:20Z");
        assert_eq!(value["modified_unix"].as_f64(), Some(200.0));
    }

    #[test]
    fn test_listing_text_keeps_order() {
        let logs = vec![sample("/logs/b.log", 200), sample("/logs/a.log", 100)];
        let mut out = Vec::new();
        write_listing(&logs, OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("/logs/b.log\t"));
        assert!(lines[1].starts_with("/logs/a.log\t"));
    }

    #[test]
    fn test_listing_json_array() {
        let logs = vec![sample("/logs/b.log", 200), sample("/logs/a.log", 100)];
        let mut out = Vec::new();
        write_listing(&logs, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let array = value.as_array().expect("array");
        assert_eq!(array.len(), 2);
        assert_eq!(array[1]["path"], "/logs/a.log");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
