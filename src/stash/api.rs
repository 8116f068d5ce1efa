//! # API Facade
//!
//! The single entry point for stash operations, whatever the UI. It
//! dispatches to `commands/*.rs`, fills in ambient inputs (current time,
//! configured teaser length) and returns structured [`CmdResult`]s. It never
//! writes to stdout or stderr.
//!
//! `StashApi<S: DataStore>` is generic over storage: `StashApi<FileStore>` in
//! production, `StashApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::StashConfig;
use crate::error::Result;
use crate::store::DataStore;
use chrono::{Local, NaiveDateTime};

pub struct StashApi<S: DataStore> {
    store: S,
    config: StashConfig,
}

impl<S: DataStore> StashApi<S> {
    pub fn new(store: S, config: StashConfig) -> Self {
        Self { store, config }
    }

    /// Stores `content` under the current local time.
    pub fn create_stash(&mut self, content: Vec<u8>) -> Result<commands::CmdResult> {
        self.create_stash_at(content, Local::now().naive_local())
    }

    pub fn create_stash_at(
        &mut self,
        content: Vec<u8>,
        now: NaiveDateTime,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, content, now)
    }

    pub fn list_stashes(&self, limit: i64) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, limit, self.config.teaser_lines)
    }

    pub fn take_stash(&self, number: i64) -> Result<commands::CmdResult> {
        commands::take::run(&self.store, number)
    }

}

pub use commands::CmdResult;
