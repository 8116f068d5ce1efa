use crate::index::DisplayStash;
use crate::model::Stash;

pub mod create;
pub mod helpers;
pub mod list;
pub mod take;

/// What a command hands back to its caller. Rendering is the caller's job.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Stashes written or read in full
    pub affected_stashes: Vec<Stash>,
    /// Stashes shown as teasers, in display order
    pub listed_stashes: Vec<DisplayStash>,
    /// One-line outcome for the user, e.g. "Stashed 2024-05-01 09:30:12"
    pub confirmation: Option<String>,
}

impl CmdResult {
    pub fn with_affected_stashes(mut self, stashes: Vec<Stash>) -> Self {
        self.affected_stashes = stashes;
        self
    }

    pub fn with_listed_stashes(mut self, stashes: Vec<DisplayStash>) -> Self {
        self.listed_stashes = stashes;
        self
    }

    pub fn with_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.confirmation = Some(confirmation.into());
        self
    }
}
