//! JSON History Store
//!
//! Persists the full MoodRecord sequence as a pretty-printed JSON array in
//! a single file, by default `mood_history.json` in the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{errors::EngineError, MoodRecord};
use crate::ports::HistoryStore;

/// Well-known history file name, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "mood_history.json";

/// File-backed history store with full-rewrite semantics.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location in the working directory.
    pub fn in_working_dir() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self) -> Result<Vec<MoodRecord>, EngineError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| EngineError::HistoryLoad(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| EngineError::HistoryLoad(format!("{}: {}", self.path.display(), e)))
    }

    fn save(&self, records: &[MoodRecord]) -> Result<(), EngineError> {
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| EngineError::HistoryWrite(e.to_string()))?;

        // Write to a sibling temp file first so a crash mid-write cannot
        // truncate the previous valid history.
        let temp = self.temp_path();
        fs::write(&temp, content)
            .map_err(|e| EngineError::HistoryWrite(format!("{}: {}", temp.display(), e)))?;
        fs::rename(&temp, &self.path)
            .map_err(|e| EngineError::HistoryWrite(format!("{}: {}", self.path.display(), e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rgb;
    use chrono::Local;

    fn sample_record(code: &str) -> MoodRecord {
        MoodRecord {
            mood: "Happy".to_string(),
            code: code.to_string(),
            color: "#FFD700".to_string(),
            symbol: "☀️".to_string(),
            timestamp: Local::now(),
            rgb: Rgb {
                red: 255,
                green: 215,
                blue: 0,
            },
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonHistoryStore::new(dir.path().join("mood_history.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonHistoryStore::new(dir.path().join("mood_history.json"));

        let records = vec![sample_record("SUN-0900"), sample_record("JOY-0901")];
        store.save(&records).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonHistoryStore::new(dir.path().join("mood_history.json"));

        store.save(&[sample_record("SUN-0900")]).unwrap();
        store.save(&[sample_record("GLOW-1010")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].code, "GLOW-1010");
    }

    #[test]
    fn test_corrupt_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mood_history.json");
        fs::write(&path, "not json at all {").unwrap();

        let store = JsonHistoryStore::new(&path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, EngineError::HistoryLoad(_)));

        // The file on disk is left untouched until the next save.
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all {");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonHistoryStore::new(dir.path().join("mood_history.json"));
        store.save(&[sample_record("SUN-0900")]).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["mood_history.json".to_string()]);
    }
}
