use super::DataStore;
use crate::error::Result;
use crate::model::StashName;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, name: &StashName) -> PathBuf {
        self.root.join(name.as_str())
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            tracing::info!(dir = %self.root.display(), "creating stash directory");
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn list_names(&self) -> Result<Vec<StashName>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %self.root.display(), "stash directory missing, nothing stashed yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            // Follow symlinks so a linked stash counts like a plain file.
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => continue,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::trace!(path = %entry.path().display(), "skipping dangling symlink");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                tracing::trace!(name = ?file_name, "skipping non-UTF-8 entry");
                continue;
            };
            match StashName::parse(file_name) {
                Some(name) => names.push(name),
                None => tracing::trace!(name = file_name, "skipping non-stash entry"),
            }
        }

        names.sort();
        tracing::debug!(count = names.len(), "listed stashes");
        Ok(names)
    }

    fn read(&self, name: &StashName) -> Result<Vec<u8>> {
        let path = self.path_for(name);
        tracing::debug!(path = %path.display(), "reading stash");
        Ok(fs::read(path)?)
    }

    fn write(&mut self, name: &StashName, content: &[u8]) -> Result<()> {
        self.ensure_dir()?;

        // Write beside the target and rename so readers never see a partial stash.
        let path = self.path_for(name);
        let tmp = self.root.join(format!(".stash-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote stash");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StashError;
    use tempfile::TempDir;

    fn name(label: &str) -> StashName {
        StashName::parse(&format!("{}.txt", label)).unwrap()
    }

    #[test]
    fn test_missing_dir_lists_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("missing"));
        assert!(store.list_names().unwrap().is_empty());
    }

    #[test]
    fn test_write_creates_dir_and_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("stashes");
        let mut store = FileStore::new(root.clone());

        let n = name("2024-05-01 09:30:12");
        store.write(&n, b"hello").unwrap();

        let on_disk = fs::read(root.join("2024-05-01 09:30:12.txt")).unwrap();
        assert_eq!(on_disk, b"hello");
        assert_eq!(store.read(&n).unwrap(), b"hello");
    }

    #[test]
    fn test_write_leaves_no_tmp_files() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.write(&name("2024-05-01 09:30:12"), b"atomic").unwrap();

        for entry in fs::read_dir(temp.path()).unwrap() {
            let file_name = entry.unwrap().file_name();
            let file_name = file_name.to_str().unwrap();
            assert!(!file_name.ends_with(".tmp"), "leftover tmp file: {}", file_name);
        }
    }

    #[test]
    fn test_same_name_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        let n = name("2024-05-01 09:30:12");

        store.write(&n, b"first").unwrap();
        store.write(&n, b"second").unwrap();

        assert_eq!(store.list_names().unwrap().len(), 1);
        assert_eq!(store.read(&n).unwrap(), b"second");
    }

    #[test]
    fn test_list_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("2024-05-02 08:00:00.txt"), "b").unwrap();
        fs::write(root.join("2024-05-01 08:00:00.txt"), "a").unwrap();
        fs::write(root.join("notes.md"), "ignored").unwrap();
        fs::write(root.join(".stash-abc.tmp"), "ignored").unwrap();
        fs::create_dir(root.join("subdir.txt")).unwrap();

        let store = FileStore::new(root.to_path_buf());
        let names: Vec<_> = store
            .list_names()
            .unwrap()
            .into_iter()
            .map(|n| n.label().to_string())
            .collect();

        assert_eq!(names, vec!["2024-05-01 08:00:00", "2024-05-02 08:00:00"]);
    }

    #[test]
    fn test_read_vanished_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        let err = store.read(&name("2024-05-01 09:30:12")).unwrap_err();
        assert!(matches!(err, StashError::Io(_)));
    }

    #[test]
    fn test_binary_content_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        let n = name("2024-05-01 09:30:12");
        let content = [0u8, 159, 146, 150, b'\n', 255];

        store.write(&n, &content).unwrap();
        assert_eq!(store.read(&n).unwrap(), content);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_stash_is_listed() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let root = temp.path().join("stashes");
        fs::create_dir(&root).unwrap();
        let target = temp.path().join("elsewhere.txt");
        fs::write(&target, "linked").unwrap();
        symlink(&target, root.join("2024-05-01 09:30:12.txt")).unwrap();
        symlink(temp.path().join("gone"), root.join("2024-05-02 09:30:12.txt")).unwrap();

        let store = FileStore::new(root);
        let names = store.list_names().unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].label(), "2024-05-01 09:30:12");
        assert_eq!(store.read(&names[0]).unwrap(), b"linked");
    }
}
