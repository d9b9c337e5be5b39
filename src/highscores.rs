//! Best-score record
//!
//! The game only ever needs one integer: the best crash score. Where it lives
//! is up to the [`ScoreStore`]; a corrupt or missing record counts as zero.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::persistence::{self, PersistError};

/// On-disk shape of the record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub best: u64,
}

/// Read-integer / write-integer storage for the best score
pub trait ScoreStore {
    /// `Ok(None)` when nothing has been recorded yet
    fn read_best(&self) -> Result<Option<u64>, PersistError>;
    fn write_best(&mut self, best: u64) -> Result<(), PersistError>;
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub const FILE_NAME: &'static str = "record.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store inside the standard data directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn read_best(&self) -> Result<Option<u64>, PersistError> {
        Ok(persistence::read_json::<BestScore>(&self.path)?.map(|r| r.best))
    }

    fn write_best(&mut self, best: u64) -> Result<(), PersistError> {
        persistence::write_json_atomic(&self.path, &BestScore { best })
    }
}

/// In-memory store (tests, or running without a disk)
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub best: Option<u64>,
    /// Number of writes performed
    pub writes: u32,
}

impl ScoreStore for MemoryScoreStore {
    fn read_best(&self) -> Result<Option<u64>, PersistError> {
        Ok(self.best)
    }

    fn write_best(&mut self, best: u64) -> Result<(), PersistError> {
        self.best = Some(best);
        self.writes += 1;
        Ok(())
    }
}

/// Load the record, treating anything unreadable as no record
pub fn load_best<S: ScoreStore + ?Sized>(store: &S) -> u64 {
    match store.read_best() {
        Ok(Some(best)) => {
            log::info!("Loaded best score {}", best);
            best
        }
        Ok(None) => {
            log::info!("No best score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Best score unreadable ({}), starting from 0", e);
            0
        }
    }
}

/// Write the record (best effort). Returns whether it was written.
pub fn save_best<S: ScoreStore + ?Sized>(store: &mut S, best: u64) -> bool {
    match store.write_best(best) {
        Ok(()) => {
            log::info!("Best score saved ({})", best);
            true
        }
        Err(e) => {
            log::warn!("Could not save best score {}: {}", best, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_record_is_zero() {
        let dir = persistence::scratch_dir("best_missing");
        let store = FileScoreStore::in_dir(&dir);
        assert_eq!(load_best(&store), 0);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_corrupt_record_is_zero() {
        let dir = persistence::scratch_dir("best_corrupt");
        let store = FileScoreStore::in_dir(&dir);
        std::fs::write(store.path(), "-12 oops").unwrap();
        assert_eq!(load_best(&store), 0);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_file_store_persists() {
        let dir = persistence::scratch_dir("best_persist");
        let mut store = FileScoreStore::in_dir(&dir);
        assert!(save_best(&mut store, 4321));

        let reopened = FileScoreStore::in_dir(&dir);
        assert_eq!(load_best(&reopened), 4321);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(load_best(&store), 0);
        save_best(&mut store, 10);
        save_best(&mut store, 20);
        assert_eq!(store.best, Some(20));
        assert_eq!(store.writes, 2);
    }
}
