//! Local persistence for WorkSight
//!
//! - `assessments.jsonl` - append-only assessment history
//! - `state.json` - dashboard state (mood, check-in, quiet hours, completed actions)

mod jsonl;
mod memory;
mod paths;
mod state;
mod traits;

pub use jsonl::JsonlAssessmentStore;
pub use memory::MemoryAssessmentStore;
pub use paths::{default_data_dir, history_path, state_path, HISTORY_FILE, STATE_FILE};
pub use state::{DashboardState, StateStore};
pub use traits::AssessmentStore;
