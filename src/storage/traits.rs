//! Persistence interface for assessment results
//!
//! The scorer never touches storage. Callers inject a store so the
//! history can live in a file, in memory, or anywhere else.

use crate::models::AssessmentResult;
use anyhow::Result;

/// Append-only log of completed assessments
pub trait AssessmentStore {
    /// Name of this store (for logging)
    fn name(&self) -> &str;

    /// Append one result to the log
    fn save(&mut self, result: &AssessmentResult) -> Result<()>;

    /// All saved results, oldest first
    fn load_history(&self) -> Result<Vec<AssessmentResult>>;

    /// Most recently saved result, if any
    fn latest(&self) -> Result<Option<AssessmentResult>> {
        Ok(self.load_history()?.pop())
    }
}
