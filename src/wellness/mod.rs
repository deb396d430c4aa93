//! Everyday wellness tools: mood rating, weekly stats, the daily check-in
//! wizard and quiet-hours mode.

mod checkin;
mod mood;
mod quiet_hours;
mod stats;

pub use checkin::{
    find_check_in_question, CheckInKind, CheckInQuestion, CheckInState, CheckInWizard,
    WizardProgress, CHECK_IN_QUESTIONS, ENERGY_OPTIONS, STRESS_OPTIONS,
};
pub use mood::{MoodEntry, MoodHistory, MoodLevel};
pub use quiet_hours::{parse_time, QuietHours};
pub use stats::{MoodDistribution, MoodTrend, WellnessStats, RECENT_WINDOW_DAYS};
