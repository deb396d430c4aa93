//! In-memory assessment store

use super::traits::AssessmentStore;
use crate::models::AssessmentResult;
use anyhow::Result;

/// Keeps results for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryAssessmentStore {
    results: Vec<AssessmentResult>,
}

impl MemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl AssessmentStore for MemoryAssessmentStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn save(&mut self, result: &AssessmentResult) -> Result<()> {
        self.results.push(result.clone());
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<AssessmentResult>> {
        Ok(self.results.clone())
    }
}
