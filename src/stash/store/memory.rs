use super::DataStore;
use crate::error::Result;
use crate::model::StashName;
use std::collections::BTreeMap;
use std::io;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    stashes: BTreeMap<StashName, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn list_names(&self) -> Result<Vec<StashName>> {
        Ok(self.stashes.keys().cloned().collect())
    }

    fn read(&self, name: &StashName) -> Result<Vec<u8>> {
        self.stashes.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("stash {} not found", name)).into()
        })
    }

    fn write(&mut self, name: &StashName, content: &[u8]) -> Result<()> {
        self.stashes.insert(name.clone(), content.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    /// Base time for fixture stashes; each added stash is one minute newer.
    pub fn base_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap_or_default()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next: NaiveDateTime,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next: base_time(),
            }
        }

        /// Adds a stash one minute newer than the previous one.
        pub fn with_stash(mut self, content: &str) -> Self {
            let name = StashName::for_time(self.next);
            self.store.write(&name, content.as_bytes()).unwrap();
            self.next += Duration::minutes(1);
            self
        }

        pub fn with_stashes(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_stash(&format!("stash {}", i + 1));
            }
            self
        }
    }
}
