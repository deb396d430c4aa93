//! Data path utilities - uses ~/.local/share/worksight/ (platform data dir)

use std::path::{Path, PathBuf};

/// File holding one assessment result per line
pub const HISTORY_FILE: &str = "assessments.jsonl";
/// File holding the dashboard state document
pub const STATE_FILE: &str = "state.json";

/// Default data directory when neither config nor environment set one.
/// Uses the platform data dir on Unix and %LOCALAPPDATA% on Windows.
pub fn default_data_dir() -> PathBuf {
    let base = if cfg!(windows) {
        std::env::var("LOCALAPPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")))
    } else {
        dirs::data_dir().unwrap_or_else(|| {
            // Fallback to ~/.local/share
            dirs::home_dir()
                .map(|h| h.join(".local").join("share"))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    };

    base.join("worksight")
}

/// Assessment history file inside a data directory
pub fn history_path(data_dir: &Path) -> PathBuf {
    data_dir.join(HISTORY_FILE)
}

/// Dashboard state file inside a data directory
pub fn state_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STATE_FILE)
}
