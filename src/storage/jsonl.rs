//! JSONL-backed assessment history
//!
//! Stores one `AssessmentResult` per line. Lines that fail to parse are
//! skipped with a warning so a single bad write never hides the rest.

use super::traits::AssessmentStore;
use crate::models::AssessmentResult;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Appends results to a JSON-lines file
pub struct JsonlAssessmentStore {
    data_path: PathBuf,
}

impl JsonlAssessmentStore {
    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
        }
    }

    /// Store at the standard location inside a data directory
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::with_path(super::paths::history_path(data_dir))
    }

    /// Path to the data file
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

impl AssessmentStore for JsonlAssessmentStore {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn save(&mut self, result: &AssessmentResult) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.data_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string(result)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.data_path)
            .with_context(|| format!("Failed to open {}", self.data_path.display()))?;

        writeln!(file, "{}", json)?;
        debug!("Appended assessment {} to {}", result.id, self.data_path.display());
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<AssessmentResult>> {
        if !self.data_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.data_path)
            .with_context(|| format!("Failed to open {}", self.data_path.display()))?;
        let reader = BufReader::new(file);

        let mut results = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<AssessmentResult>(&line) {
                Ok(result) => results.push(result),
                Err(e) => warn!(
                    "Skipping unreadable line {} in {}: {}",
                    lineno + 1,
                    self.data_path.display(),
                    e
                ),
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::ResponseSet;
    use crate::models::{ParticipantInfo, RiskLevel};
    use crate::scoring::BurnoutScorer;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonlAssessmentStore::in_dir(dir.path());
        let scorer = BurnoutScorer::new();

        let low = scorer.assess(&ResponseSet::uniform(1), ParticipantInfo::default());
        let high = scorer.assess(&ResponseSet::uniform(5), ParticipantInfo::default());
        store.save(&low).unwrap();
        store.save(&high).unwrap();

        let loaded = store.load_history().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], low);
        assert_eq!(loaded[1].risk_level, RiskLevel::High);
        assert_eq!(store.latest().unwrap().unwrap().id, high.id);
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = JsonlAssessmentStore::in_dir(&dir.path().join("nowhere"));
        assert!(store.load_history().unwrap().is_empty());
        assert!(store.latest().unwrap().is_none());
    }

    #[test]
    fn test_bad_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonlAssessmentStore::in_dir(dir.path());
        let result = BurnoutScorer::new().assess(&ResponseSet::uniform(2), ParticipantInfo::default());
        store.save(&result).unwrap();

        let mut file = OpenOptions::new().append(true).open(store.data_path()).unwrap();
        writeln!(file, "{{not json").unwrap();
        writeln!(file).unwrap();

        let loaded = store.load_history().unwrap();
        assert_eq!(loaded, vec![result]);
    }
}
