use crate::error::{Result, StashError};
use crate::model::StashName;

/// A user-facing stash position: `1` is the newest stash, `len` the oldest.
///
/// Positions are never stored; they are recomputed from the sorted directory
/// listing on every call, so they shift as new stashes arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReverseIndex(usize);

impl ReverseIndex {
    /// Validates `value` against a store holding `len` stashes.
    ///
    /// `what` names the argument in the error, e.g. "limit" or "stash number".
    pub fn checked(what: &'static str, value: i64, len: usize) -> Result<Self> {
        match usize::try_from(value) {
            Ok(n) if n >= 1 && n <= len => Ok(Self(n)),
            _ => Err(StashError::OutOfRange {
                what,
                value,
                max: len,
            }),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Position in an ascending (oldest first) listing of `len` entries.
    pub fn to_offset(self, len: usize) -> usize {
        len - self.0
    }
}

impl std::fmt::Display for ReverseIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stash as the list view shows it: its display number, name and teaser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStash {
    pub index: usize,
    pub name: StashName,
    pub teaser: Vec<u8>,
}
