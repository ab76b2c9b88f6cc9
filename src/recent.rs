use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_RECENT_FILES: usize = 30;

/// Most-recent-first list of files, deduplicated and capped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentFiles {
    entries: Vec<PathBuf>,
    max_entries: usize,
}

impl RecentFiles {
    pub fn new(max_entries: usize) -> Self {
        RecentFiles {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Builds a list from stored entries, dropping duplicates (first one wins)
    /// and anything past the cap.
    pub fn from_entries(entries: Vec<PathBuf>, max_entries: usize) -> Self {
        let mut recent = RecentFiles::new(max_entries);
        for entry in entries {
            if !recent.contains(&entry) {
                recent.entries.push(entry);
            }
        }
        recent.entries.truncate(max_entries);
        recent
    }

    pub fn record(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.remove(&path);
        self.entries.insert(0, path);
        self.entries.truncate(self.max_entries);
    }

    pub fn remove(&mut self, path: &Path) -> bool {
        match self.entries.iter().position(|p| p == path) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn set_max(&mut self, max_entries: usize) {
        self.max_entries = max_entries;
        self.entries.truncate(max_entries);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|p| p == path)
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct RecentFile {
    #[serde(default)]
    recent_files: Vec<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is not a valid recent file list: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// JSON file holding the persisted recent list.
#[derive(Debug, Clone)]
pub struct RecentStore {
    path: PathBuf,
}

impl RecentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecentStore { path: path.into() }
    }

    pub fn in_dir(state_dir: &Path) -> Self {
        RecentStore::new(state_dir.join("recent.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self, max_entries: usize) -> Result<RecentFiles, StoreError> {
        if !self.path.exists() {
            return Ok(RecentFiles::new(max_entries));
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let stored: RecentFile =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(RecentFiles::from_entries(stored.recent_files, max_entries))
    }

    /// Like [`RecentStore::load`], but an unreadable or corrupt file loads as
    /// an empty list so the next save replaces it.
    pub fn load_or_empty(&self, max_entries: usize) -> RecentFiles {
        match self.load(max_entries) {
            Ok(recent) => recent,
            Err(e) => {
                log::warn!("starting with an empty recent list: {}", e);
                RecentFiles::new(max_entries)
            }
        }
    }

    pub fn save(&self, recent: &RecentFiles) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let stored = RecentFile {
            recent_files: recent.entries().to_vec(),
        };
        let content = serde_json::to_string_pretty(&stored).map_err(|source| {
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, content).map_err(io_err)?;

        log::debug!(
            "saved {} recent files to {}",
            recent.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn paths(list: &RecentFiles) -> Vec<&str> {
        list.entries()
            .iter()
            .map(|p| p.to_str().unwrap())
            .collect()
    }

    #[test]
    fn test_record_moves_to_front() {
        let mut recent = RecentFiles::new(DEFAULT_MAX_RECENT_FILES);
        recent.record("/a");
        recent.record("/b");
        recent.record("/a");
        assert_eq!(paths(&recent), vec!["/a", "/b"]);
    }

    #[test]
    fn test_record_twice_is_stable() {
        let mut recent = RecentFiles::new(10);
        recent.record("/x");
        recent.record("/y");
        recent.record("/p");
        let before = recent.clone();
        recent.record("/p");
        assert_eq!(recent, before);
        assert_eq!(paths(&recent)[0], "/p");
    }

    #[test]
    fn test_record_truncates_to_max() {
        let mut recent = RecentFiles::new(2);
        recent.record("/a");
        recent.record("/b");
        recent.record("/c");
        assert_eq!(paths(&recent), vec!["/c", "/b"]);
    }

    #[test]
    fn test_zero_cap_stays_empty() {
        let mut recent = RecentFiles::new(0);
        recent.record("/a");
        recent.record("/b");
        assert!(recent.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut recent = RecentFiles::new(5);
        recent.record("/a");
        recent.record("/b");
        assert!(recent.remove(Path::new("/a")));
        assert!(!recent.remove(Path::new("/missing")));
        assert_eq!(paths(&recent), vec!["/b"]);
    }

    #[test]
    fn test_set_max_truncates() {
        let mut recent = RecentFiles::new(5);
        for p in ["/a", "/b", "/c"] {
            recent.record(p);
        }
        recent.set_max(1);
        assert_eq!(paths(&recent), vec!["/c"]);
    }

    #[test]
    fn test_from_entries_cleans_stored_list() {
        let stored = vec![
            PathBuf::from("/a"),
            PathBuf::from("/b"),
            PathBuf::from("/a"),
            PathBuf::from("/c"),
        ];
        let recent = RecentFiles::from_entries(stored, 2);
        assert_eq!(paths(&recent), vec!["/a", "/b"]);
    }

    #[test]
    fn test_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = RecentStore::in_dir(&dir.path().join("state"));

        let empty = store.load(3).unwrap();
        assert!(empty.is_empty());

        let mut recent = RecentFiles::new(3);
        recent.record("/one");
        recent.record("/two");
        store.save(&recent).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("recent_files"));

        let loaded = store.load(3).unwrap();
        assert_eq!(paths(&loaded), vec!["/two", "/one"]);
    }

    #[test]
    fn test_store_rejects_garbage() {
        let dir = tempdir().unwrap();
        let store = RecentStore::in_dir(dir.path());
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(3), Err(StoreError::Parse { .. })));
        assert!(store.load_or_empty(3).is_empty());
    }

    #[test]
    fn test_corrupt_store_is_replaced_on_save() {
        let dir = tempdir().unwrap();
        let store = RecentStore::in_dir(dir.path());
        fs::write(store.path(), "{\"recent_files\": [").unwrap();

        let mut recent = store.load_or_empty(5);
        recent.record("/fresh");
        store.save(&recent).unwrap();

        assert_eq!(paths(&store.load(5).unwrap()), vec!["/fresh"]);
    }

    proptest! {
        #[test]
        fn record_keeps_invariants(
            max in 0usize..8,
            ops in proptest::collection::vec(0u8..12, 0..64),
        ) {
            let mut recent = RecentFiles::new(max);
            for op in ops {
                let path = format!("/f{}", op);
                recent.record(&path);
                if max > 0 {
                    prop_assert_eq!(recent.entries()[0].to_str().unwrap(), path.as_str());
                } else {
                    prop_assert!(recent.is_empty());
                }
            }
            prop_assert!(recent.len() <= max);
            let mut seen = std::collections::HashSet::new();
            for p in recent.entries() {
                prop_assert!(seen.insert(p.clone()), "duplicate {:?}", p);
            }
        }
    }
}
