use chrono::NaiveDateTime;
use std::fmt;

/// Extension every stash file carries. Directory entries without it are ignored.
pub const STASH_EXT: &str = ".txt";

/// Local-time format embedded in stash filenames. Lexicographic order on this
/// format is chronological order, which is what makes the directory its own index.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The filename of a stash, e.g. `2024-05-01 09:30:12.txt`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StashName(String);

impl StashName {
    /// Names the stash created at `at`. Second resolution: two stashes created
    /// within the same second share a name.
    pub fn for_time(at: NaiveDateTime) -> Self {
        Self(format!("{}{}", at.format(TIMESTAMP_FORMAT), STASH_EXT))
    }

    /// Accepts a directory entry name if it looks like a stash: a visible file
    /// ending in `.txt` with a non-empty stem.
    pub fn parse(file_name: &str) -> Option<Self> {
        if file_name.starts_with('.') {
            return None;
        }
        let stem = file_name.strip_suffix(STASH_EXT)?;
        if stem.is_empty() {
            return None;
        }
        Some(Self(file_name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The filename without its extension; shown as the stash header.
    pub fn label(&self) -> &str {
        self.0.strip_suffix(STASH_EXT).unwrap_or(&self.0)
    }

    /// Creation time, if the label is a well-formed timestamp. Files dropped
    /// into the directory by hand may not be.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.label(), TIMESTAMP_FORMAT).ok()
    }
}

impl fmt::Display for StashName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stash {
    pub name: StashName,
    pub content: Vec<u8>,
}

impl Stash {
    pub fn new(name: StashName, content: Vec<u8>) -> Self {
        Self { name, content }
    }
}
