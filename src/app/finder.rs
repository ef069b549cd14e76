// latestlog - app/finder.rs
//
// One run of the pipeline: resolve the search pattern, expand it, read
// modification times and select the newest file.
// Single-threaded and synchronous; every failure ends the run.

use crate::core::discovery;
use crate::core::model::LatestLog;
use crate::core::resolver::{self, Platform, SearchPattern};
use crate::core::selector;
use crate::platform::home::HomeDirProvider;
use crate::util::error::{ResolveError, Result};
use std::path::PathBuf;

/// Locates the companion application's most recently modified log file.
#[derive(Debug, Clone)]
pub struct LatestLogFinder<H> {
    platform: Platform,
    home: H,
    logs_dir_override: Option<PathBuf>,
}

impl<H: HomeDirProvider> LatestLogFinder<H> {
    pub fn new(platform: Platform, home: H) -> Self {
        Self {
            platform,
            home,
            logs_dir_override: None,
        }
    }

    /// Search `dir` instead of the platform's default logs directory.
    pub fn with_logs_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.logs_dir_override = dir;
        self
    }

    /// The pattern this finder will expand.
    ///
    /// An override skips platform and home lookup entirely. Otherwise the
    /// platform is checked before the home directory is looked up.
    pub fn search_pattern(&self) -> Result<SearchPattern> {
        if let Some(dir) = &self.logs_dir_override {
            tracing::debug!(logs_dir = %dir.display(), "Using logs directory override");
            return Ok(SearchPattern::in_dir(dir.clone()));
        }
        if let Platform::Unsupported(os) = &self.platform {
            return Err(ResolveError::UnsupportedPlatform { os: os.clone() }.into());
        }
        let home = self.home.home_dir().ok_or(ResolveError::HomeDirNotFound)?;
        Ok(resolver::search_pattern(&self.platform, &home)?)
    }

    /// The newest log file.
    pub fn latest(&self) -> Result<LatestLog> {
        let pattern = self.search_pattern()?;
        let record = discovery::collect_modification_times(&pattern)?;
        Ok(selector::select_latest(&record, &pattern.to_string())?)
    }

    /// Every log file, newest first.
    pub fn ranked(&self) -> Result<Vec<LatestLog>> {
        let pattern = self.search_pattern()?;
        let record = discovery::collect_modification_times(&pattern)?;
        Ok(selector::rank_newest_first(&record, &pattern.to_string())?)
    }
}
