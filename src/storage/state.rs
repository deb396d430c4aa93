//! Dashboard state document
//!
//! Everything besides the assessment history (mood, check-in, quiet hours,
//! completed suggestions) lives in one JSON file that is read at startup
//! and rewritten after each change.

use crate::error::{WellnessError, WellnessResult};
use crate::suggestions::find_suggestion;
use crate::wellness::{CheckInState, MoodHistory, MoodLevel, QuietHours};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub current_mood: Option<MoodLevel>,
    #[serde(default)]
    pub mood_history: MoodHistory,
    #[serde(default)]
    pub quiet_hours: QuietHours,
    #[serde(default)]
    pub check_in: CheckInState,
    #[serde(default)]
    pub completed_actions: BTreeSet<String>,
}

impl DashboardState {
    /// Set the current mood and replace today's history entry
    pub fn set_mood(&mut self, mood: MoodLevel, today: NaiveDate) {
        self.current_mood = Some(mood);
        self.mood_history.record(today, mood);
    }

    /// Mark a suggestion as done; returns false if it already was
    pub fn complete_action(&mut self, suggestion_id: &str) -> WellnessResult<bool> {
        let suggestion = find_suggestion(suggestion_id)
            .ok_or_else(|| WellnessError::UnknownSuggestion(suggestion_id.to_string()))?;
        Ok(self.completed_actions.insert(suggestion.id.to_string()))
    }

    /// Undo a completed suggestion; returns false if it was not marked
    pub fn undo_action(&mut self, suggestion_id: &str) -> bool {
        self.completed_actions.remove(suggestion_id)
    }
}

/// Reads and writes the dashboard state file
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::with_path(super::paths::state_path(data_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the state. A missing file gives defaults; so does a corrupt
    /// one, after a warning.
    pub fn load(&self) -> DashboardState {
        match self.read() {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to load {}: {}", self.path.display(), e);
                DashboardState::default()
            }
        }
    }

    fn read(&self) -> Result<DashboardState> {
        if !self.path.exists() {
            debug!("No state file at {}, using defaults", self.path.display());
            return Ok(DashboardState::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Where an unreadable state file is moved before it is replaced
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    pub fn save(&self, state: &DashboardState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!("Saved dashboard state to {}", self.path.display());
        Ok(())
    }

    /// Load, apply `f`, save. An unreadable file is moved to
    /// `backup_path()` rather than overwritten.
    pub fn update<T>(&self, f: impl FnOnce(&mut DashboardState) -> Result<T>) -> Result<T> {
        let (mut state, unreadable) = match self.read() {
            Ok(state) => (state, false),
            Err(e) => {
                warn!("Failed to load {}: {}", self.path.display(), e);
                (DashboardState::default(), true)
            }
        };
        let out = f(&mut state)?;
        if unreadable {
            let backup = self.backup_path();
            std::fs::rename(&self.path, &backup)
                .with_context(|| format!("Failed to move {} aside", self.path.display()))?;
            warn!("Kept the unreadable state file as {}", backup.display());
        }
        self.save(&state)?;
        Ok(out)
    }
}
