//! Small JSON files on disk
//!
//! Features:
//! - Atomic replace (write tmp, then rename over the old file)
//! - Missing file reads as `None`, not an error
//! - Per-user data directory, overridable with `LEAN_RIDER_DATA_DIR`

use directories::ProjectDirs;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment override for the data directory
pub const DATA_DIR_ENV: &str = "LEAN_RIDER_DATA_DIR";

/// Errors that can occur during save/load
#[derive(Debug)]
pub enum PersistError {
    Io(io::Error),
    Json(serde_json::Error),
    NoDataDir,
}

impl From<io::Error> for PersistError {
    fn from(e: io::Error) -> Self {
        PersistError::Io(e)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        PersistError::Json(e)
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io(e) => write!(f, "IO error: {}", e),
            PersistError::Json(e) => write!(f, "Malformed data: {}", e),
            PersistError::NoDataDir => write!(f, "Could not determine a data directory"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Io(e) => Some(e),
            PersistError::Json(e) => Some(e),
            PersistError::NoDataDir => None,
        }
    }
}

/// Directory holding the record and settings files (created if needed)
pub fn data_dir() -> Result<PathBuf, PersistError> {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("", "", "lean-rider")
            .ok_or(PersistError::NoDataDir)?
            .data_dir()
            .to_path_buf(),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Read and parse a JSON file. A missing file is `Ok(None)`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&json)?))
}

/// Serialize to JSON and replace `path` atomically
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Fresh, empty directory for filesystem tests
#[cfg(test)]
pub(crate) fn scratch_dir(tag: &str) -> PathBuf {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);

    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "lean_rider_{}_{}_{}",
        tag,
        std::process::id(),
        n
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        value: u64,
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = scratch_dir("missing");
        let got: Option<Sample> = read_json(&dir.join("nope.json")).unwrap();
        assert!(got.is_none());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_write_then_read() {
        let dir = scratch_dir("write_read");
        let path = dir.join("nested").join("sample.json");
        write_json_atomic(&path, &Sample { value: 42 }).unwrap();
        assert_eq!(read_json::<Sample>(&path).unwrap(), Some(Sample { value: 42 }));
        // No temp file left behind
        assert!(!path.with_extension("tmp").exists());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = scratch_dir("corrupt");
        let path = dir.join("sample.json");
        fs::write(&path, b"\x00\x01garbage").unwrap();
        let err = read_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, PersistError::Json(_)));
        let _ = fs::remove_dir_all(dir);
    }
}
