// latestlog - platform/home.rs
//
// Home-directory lookup behind a trait so callers can inject a synthetic
// home in tests instead of the real user environment.

use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Source of the invoking user's home directory.
pub trait HomeDirProvider {
    /// The home directory, or `None` if it cannot be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The real home directory (`$HOME` on Unix, the profile folder on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeDirProvider for SystemHome {
    fn home_dir(&self) -> Option<PathBuf> {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        match &home {
            Some(path) => tracing::debug!(home = %path.display(), "Home directory resolved"),
            None => tracing::warn!("Could not determine home directory"),
        }
        home
    }
}

/// A fixed home directory.
#[derive(Debug, Clone)]
pub struct FixedHome(PathBuf);

impl FixedHome {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl HomeDirProvider for FixedHome {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_home_returns_its_path() {
        let home = FixedHome::new("/tmp/somebody");
        assert_eq!(home.home_dir(), Some(PathBuf::from("/tmp/somebody")));
        assert_eq!(home.path(), Path::new("/tmp/somebody"));
    }
}
