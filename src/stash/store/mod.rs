//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of the crate touches
//! persisted stashes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per stash in a flat
//!   directory (`~/.stashes/` by default)
//! - [`memory::InMemoryStore`]: in-memory storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! ~/.stashes/
//! ├── 2024-05-01 09:30:12.txt
//! ├── 2024-05-01 17:02:45.txt
//! └── 2024-05-02 08:11:03.txt
//! ```
//!
//! The filename is the only metadata. Sorting names sorts stashes by age,
//! so there is no index file to keep consistent.

use crate::error::Result;
use crate::model::StashName;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// All stash names, oldest first. A store that was never written to is empty.
    fn list_names(&self) -> Result<Vec<StashName>>;

    /// Full content of one stash
    fn read(&self, name: &StashName) -> Result<Vec<u8>>;

    /// Write a stash, replacing any existing stash with the same name
    fn write(&mut self, name: &StashName, content: &[u8]) -> Result<()>;
}
