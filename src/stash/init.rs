use crate::api::StashApi;
use crate::config::StashConfig;
use crate::error::{Result, StashError};
use crate::store::fs::FileStore;
use directories::BaseDirs;
use std::path::PathBuf;

/// Name of the per-user stash directory under the home directory.
pub const STASH_DIR_NAME: &str = ".stashes";

pub struct StashContext {
    pub api: StashApi<FileStore>,
    pub config: StashConfig,
}

/// Resolves where stashes live: the explicit override if one was given,
/// otherwise `<home>/.stashes`.
///
/// The directory is not required to exist. Listing a missing directory
/// yields no stashes and the first write creates it.
pub fn resolve_stash_dir(dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir_override {
        tracing::debug!(dir = %dir.display(), "using stash directory override");
        return Ok(dir);
    }

    let base = BaseDirs::new().ok_or(StashError::NoHomeDir)?;
    let dir = base.home_dir().join(STASH_DIR_NAME);
    tracing::debug!(dir = %dir.display(), "resolved stash directory");
    Ok(dir)
}

pub fn initialize(dir_override: Option<PathBuf>, teaser_lines: usize) -> Result<StashContext> {
    let dir = resolve_stash_dir(dir_override)?;
    let config = StashConfig::new(dir).with_teaser_lines(teaser_lines)?;

    let store = FileStore::new(config.dir.clone());
    let api = StashApi::new(store, config.clone());

    Ok(StashContext { api, config })
}
