//! Weekly wellness statistics derived from the mood history

use super::mood::{MoodEntry, MoodHistory};
use chrono::NaiveDate;
use serde::Serialize;

/// Number of days (including today) that count as "recent"
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Direction of the mood trend over the recent window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
}

impl MoodTrend {
    fn from_delta(delta: i32) -> Self {
        match delta {
            d if d > 0 => MoodTrend::Improving,
            d if d < 0 => MoodTrend::Declining,
            _ => MoodTrend::Stable,
        }
    }
}

impl std::fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoodTrend::Improving => write!(f, "Improving"),
            MoodTrend::Declining => write!(f, "Declining"),
            MoodTrend::Stable => write!(f, "Stable"),
        }
    }
}

/// Count of recent moods per band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MoodDistribution {
    /// Moods 1-2
    pub low: usize,
    /// Mood 3
    pub medium: usize,
    /// Moods 4-5
    pub high: usize,
}

impl MoodDistribution {
    pub fn from_entries(entries: &[&MoodEntry]) -> Self {
        let mut distribution = Self::default();
        for entry in entries {
            match entry.mood.value() {
                v if v <= 2 => distribution.low += 1,
                3 => distribution.medium += 1,
                _ => distribution.high += 1,
            }
        }
        distribution
    }
}

/// Dashboard statistics for the last week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessStats {
    /// Recent average rounded to one decimal; None without recent entries
    pub average_mood: Option<f64>,
    /// Last recent mood minus first recent mood (0 with fewer than two)
    pub mood_delta: i32,
    pub mood_trend: MoodTrend,
    pub distribution: MoodDistribution,
    /// 1 when the last check-in happened today, otherwise 0
    pub check_in_streak: u32,
    pub total_entries: usize,
    pub recent_entries: usize,
}

impl WellnessStats {
    pub fn compute(history: &MoodHistory, last_check_in: Option<NaiveDate>, today: NaiveDate) -> Self {
        let recent: Vec<&MoodEntry> = history
            .entries()
            .iter()
            .filter(|e| (today - e.date).num_days() < RECENT_WINDOW_DAYS)
            .collect();

        let average_mood = if recent.is_empty() {
            None
        } else {
            let sum: f64 = recent.iter().map(|e| e.mood.value() as f64).sum();
            let avg = sum / recent.len() as f64;
            Some((avg * 10.0).round() / 10.0)
        };

        let mood_delta = match (recent.first(), recent.last()) {
            (Some(first), Some(last)) if recent.len() >= 2 => {
                last.mood.value() as i32 - first.mood.value() as i32
            }
            _ => 0,
        };

        let check_in_streak = match last_check_in {
            Some(date) if date == today => 1,
            _ => 0,
        };

        Self {
            average_mood,
            mood_delta,
            mood_trend: MoodTrend::from_delta(mood_delta),
            distribution: MoodDistribution::from_entries(&recent),
            check_in_streak,
            total_entries: history.len(),
            recent_entries: recent.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wellness::MoodLevel;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let stats = WellnessStats::compute(&MoodHistory::new(), None, day(20));
        assert_eq!(stats.average_mood, None);
        assert_eq!(stats.mood_trend, MoodTrend::Stable);
        assert_eq!(stats.distribution, MoodDistribution::default());
        assert_eq!(stats.check_in_streak, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_only_last_seven_days_count() {
        let mut history = MoodHistory::new();
        history.record(day(10), MoodLevel::VeryLow); // 10 days ago
        history.record(day(13), MoodLevel::Low); // 7 days ago, outside
        history.record(day(14), MoodLevel::Neutral); // 6 days ago
        history.record(day(18), MoodLevel::Good);
        history.record(day(20), MoodLevel::Great);

        let stats = WellnessStats::compute(&history, Some(day(20)), day(20));
        assert_eq!(stats.total_entries, 5);
        assert_eq!(stats.recent_entries, 3);
        assert_eq!(stats.average_mood, Some(4.0));
        assert_eq!(stats.mood_delta, 2);
        assert_eq!(stats.mood_trend, MoodTrend::Improving);
        assert_eq!(
            stats.distribution,
            MoodDistribution { low: 0, medium: 1, high: 2 }
        );
        assert_eq!(stats.check_in_streak, 1);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let mut history = MoodHistory::new();
        history.record(day(18), MoodLevel::Good);
        history.record(day(19), MoodLevel::Low);
        history.record(day(20), MoodLevel::Low);
        // 8 / 3 = 2.666...
        let stats = WellnessStats::compute(&history, Some(day(19)), day(20));
        assert_eq!(stats.average_mood, Some(2.7));
        assert_eq!(stats.mood_trend, MoodTrend::Declining);
        assert_eq!(stats.check_in_streak, 0);
    }

    #[test]
    fn test_single_entry_is_stable() {
        let mut history = MoodHistory::new();
        history.record(day(20), MoodLevel::Great);
        let stats = WellnessStats::compute(&history, None, day(20));
        assert_eq!(stats.mood_delta, 0);
        assert_eq!(stats.mood_trend, MoodTrend::Stable);
    }
}
