//! Mood and quiet-hours filtering plus the dashboard view on top of it

use super::catalog::{Category, Suggestion, SUGGESTIONS, TAKE_BREAK_ID};
use crate::error::WellnessError;
use crate::wellness::MoodLevel;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Maximum suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 6;

/// Filter `source` by mood, then by quiet hours, keeping at most
/// `MAX_SUGGESTIONS` in source order.
pub fn filter_suggestions(
    source: &[Suggestion],
    mood: Option<MoodLevel>,
    quiet_hours: bool,
) -> Vec<&Suggestion> {
    source
        .iter()
        .filter(|s| match mood.map(|m| m.value()) {
            Some(m) if m <= 2 => matches!(s.category, Category::Wellness | Category::Break),
            Some(m) if m >= 4 => matches!(s.category, Category::Productivity | Category::Focus),
            _ => true,
        })
        .filter(|s| !quiet_hours || s.category != Category::Break || s.id == TAKE_BREAK_ID)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Filter the built-in catalogue
pub fn recommend(mood: Option<MoodLevel>, quiet_hours: bool) -> Vec<&'static Suggestion> {
    filter_suggestions(&SUGGESTIONS, mood, quiet_hours)
}

/// Category tab selected on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryView {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategoryView {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(CategoryView::All),
            "wellness" => Ok(CategoryView::Only(Category::Wellness)),
            "productivity" => Ok(CategoryView::Only(Category::Productivity)),
            "break" => Ok(CategoryView::Only(Category::Break)),
            "focus" => Ok(CategoryView::Only(Category::Focus)),
            _ => Err(WellnessError::UnknownCategory(s.to_string())),
        }
    }
}

/// Category tab plus the show-completed toggle
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionView {
    pub category: CategoryView,
    pub show_completed: bool,
}

impl SuggestionView {
    pub fn apply<'a>(
        &self,
        suggestions: Vec<&'a Suggestion>,
        completed: &BTreeSet<String>,
    ) -> Vec<&'a Suggestion> {
        suggestions
            .into_iter()
            .filter(|s| match self.category {
                CategoryView::All => true,
                CategoryView::Only(c) => s.category == c,
            })
            .filter(|s| self.show_completed || !completed.contains(s.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::catalog::Priority;

    fn ids(list: &[&Suggestion]) -> Vec<&'static str> {
        list.iter().map(|s| s.id).collect()
    }

    fn with_breaks() -> Vec<Suggestion> {
        let mut source = SUGGESTIONS.to_vec();
        source[0].category = Category::Break;
        let walk = Suggestion {
            id: "short-walk",
            title: "Go for a short walk",
            description: "Walk around the block",
            icon: "🚶",
            category: Category::Break,
            priority: Priority::Medium,
            duration: Some("10 min"),
            difficulty: None,
            tags: &[],
        };
        source.insert(1, walk);
        source
    }

    #[test]
    fn test_no_mood_keeps_first_six() {
        let list = recommend(None, false);
        assert_eq!(list.len(), MAX_SUGGESTIONS);
        assert_eq!(
            ids(&list),
            vec![
                "take-break",
                "deep-breathing",
                "water-reminder",
                "eye-rest",
                "gratitude",
                "quick-stretch"
            ]
        );
        assert_eq!(ids(&recommend(Some(MoodLevel::Neutral), false)), ids(&list));
    }

    #[test]
    fn test_low_mood_keeps_wellness() {
        for mood in [MoodLevel::VeryLow, MoodLevel::Low] {
            let list = recommend(Some(mood), false);
            assert!(list.iter().all(|s| matches!(s.category, Category::Wellness | Category::Break)));
            assert_eq!(list.len(), 6);
        }
    }

    #[test]
    fn test_high_mood_keeps_productivity_and_focus() {
        let list = recommend(Some(MoodLevel::Great), false);
        assert_eq!(
            ids(&list),
            vec![
                "task-prioritization",
                "time-blocking",
                "declutter-desk",
                "minimize-distractions",
                "pomodoro-technique",
                "noise-cancellation"
            ]
        );
        assert_eq!(ids(&recommend(Some(MoodLevel::Good), true)), ids(&list));
    }

    #[test]
    fn test_quiet_hours_drop_breaks_except_take_break() {
        let source = with_breaks();
        let loud = filter_suggestions(&source, Some(MoodLevel::Low), false);
        assert_eq!(ids(&loud)[..2], ["take-break", "short-walk"]);

        let quiet = filter_suggestions(&source, Some(MoodLevel::Low), true);
        assert!(!quiet.iter().any(|s| s.id == "short-walk"));
        assert_eq!(quiet[0].id, TAKE_BREAK_ID);
        assert_eq!(quiet[0].category, Category::Break);
        assert_eq!(quiet.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_category_view_parse() {
        assert_eq!("all".parse::<CategoryView>().unwrap(), CategoryView::All);
        assert_eq!(
            "Focus".parse::<CategoryView>().unwrap(),
            CategoryView::Only(Category::Focus)
        );
        assert!("sleep".parse::<CategoryView>().is_err());
    }

    #[test]
    fn test_view_hides_completed_unless_requested() {
        let completed: BTreeSet<String> = ["eye-rest".to_string()].into();
        let view = SuggestionView::default();
        let shown = view.apply(recommend(None, false), &completed);
        assert_eq!(shown.len(), 5);
        assert!(!shown.iter().any(|s| s.id == "eye-rest"));

        let view = SuggestionView {
            show_completed: true,
            ..Default::default()
        };
        assert_eq!(view.apply(recommend(None, false), &completed).len(), 6);
    }

    #[test]
    fn test_view_category_tab() {
        let view = SuggestionView {
            category: CategoryView::Only(Category::Focus),
            show_completed: false,
        };
        let shown = view.apply(recommend(Some(MoodLevel::Great), false), &BTreeSet::new());
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().all(|s| s.category == Category::Focus));
    }
}
