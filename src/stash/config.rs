use crate::error::{Result, StashError};
use crate::teaser::DEFAULT_TEASER_LINES;
use std::path::PathBuf;

/// Runtime settings for a stash invocation.
///
/// There is no config file; values come from command-line flags and their
/// environment fallbacks and are validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashConfig {
    /// Directory holding the stash files
    pub dir: PathBuf,

    /// How many lines of each stash the list view shows
    pub teaser_lines: usize,
}

impl StashConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            teaser_lines: DEFAULT_TEASER_LINES,
        }
    }

    pub fn with_teaser_lines(mut self, lines: usize) -> Result<Self> {
        if lines == 0 {
            return Err(StashError::Config(
                "teaser lines must be at least 1".to_string(),
            ));
        }
        self.teaser_lines = lines;
        Ok(self)
    }
}
