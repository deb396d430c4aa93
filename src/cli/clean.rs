//! Clean command - remove stored history and dashboard state

use crate::storage::{history_path, state_path, StateStore};
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub fn run(data_dir: &Path, dry_run: bool) -> Result<()> {
    let found: Vec<_> = [
        history_path(data_dir),
        state_path(data_dir),
        StateStore::in_dir(data_dir).backup_path(),
    ]
    .into_iter()
    .filter(|p| p.exists())
    .collect();

    if found.is_empty() {
        println!("No stored data found in {}.", data_dir.display());
        return Ok(());
    }

    println!(
        "Found {} data file{}:",
        found.len(),
        if found.len() == 1 { "" } else { "s" }
    );
    for file in &found {
        println!("  {}", file.display());
    }

    if dry_run {
        println!("\nDry run - nothing removed. Run without --dry-run to delete.");
        return Ok(());
    }

    println!();
    let mut removed = 0;
    for file in &found {
        match std::fs::remove_file(file) {
            Ok(_) => {
                removed += 1;
                println!("Removed: {}", file.display());
            }
            Err(e) => eprintln!("Failed to remove {}: {}", file.display(), e),
        }
    }
    info!("Removed {} data files from {}", removed, data_dir.display());

    println!(
        "\nCleaned {} file{}.",
        removed,
        if removed == 1 { "" } else { "s" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dry_run_keeps_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(history_path(dir.path()), "").unwrap();
        run(dir.path(), true).unwrap();
        assert!(history_path(dir.path()).exists());
    }

    #[test]
    fn test_clean_removes_only_data_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(history_path(dir.path()), "").unwrap();
        std::fs::write(state_path(dir.path()), "{}").unwrap();
        std::fs::write(dir.path().join("state.json.bak"), "{").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "keep").unwrap();

        run(dir.path(), false).unwrap();
        assert!(!history_path(dir.path()).exists());
        assert!(!state_path(dir.path()).exists());
        assert!(!dir.path().join("state.json.bak").exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_clean_missing_dir_is_ok() {
        let dir = TempDir::new().unwrap();
        run(&dir.path().join("nope"), false).unwrap();
    }
}
