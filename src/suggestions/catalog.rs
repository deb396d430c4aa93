//! Static catalogue of wellness suggestions

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Wellness,
    Productivity,
    Break,
    Focus,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::Wellness => "Wellness",
            Category::Productivity => "Productivity",
            Category::Break => "Break",
            Category::Focus => "Focus",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Wellness => write!(f, "wellness"),
            Category::Productivity => write!(f, "productivity"),
            Category::Break => write!(f, "break"),
            Category::Focus => write!(f, "focus"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A single wellness nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub priority: Priority,
    pub duration: Option<&'static str>,
    pub difficulty: Option<Difficulty>,
    pub tags: &'static [&'static str],
}

/// Id of the one break suggestion that survives quiet hours
pub const TAKE_BREAK_ID: &str = "take-break";

pub const SUGGESTIONS: [Suggestion; 12] = [
    // Wellness
    Suggestion {
        id: TAKE_BREAK_ID,
        title: "Take a 5-minute break",
        description: "Step away from your screen and stretch or walk around",
        icon: "☕",
        category: Category::Wellness,
        priority: Priority::High,
        duration: Some("5 min"),
        difficulty: Some(Difficulty::Easy),
        tags: &["break", "stretch"],
    },
    Suggestion {
        id: "deep-breathing",
        title: "Practice deep breathing",
        description: "Take 3 deep breaths to reduce stress and improve focus",
        icon: "🫁",
        category: Category::Wellness,
        priority: Priority::Medium,
        duration: Some("2 min"),
        difficulty: Some(Difficulty::Easy),
        tags: &["breathing", "stress-relief"],
    },
    Suggestion {
        id: "water-reminder",
        title: "Stay hydrated",
        description: "Drink a glass of water to maintain energy levels",
        icon: "💧",
        category: Category::Wellness,
        priority: Priority::Medium,
        duration: Some("1 min"),
        difficulty: Some(Difficulty::Easy),
        tags: &["hydration", "energy"],
    },
    Suggestion {
        id: "eye-rest",
        title: "Rest your eyes",
        description: "Look at something 20 feet away for 20 seconds",
        icon: "👁️",
        category: Category::Wellness,
        priority: Priority::Medium,
        duration: Some("20 sec"),
        difficulty: Some(Difficulty::Easy),
        tags: &["eye-care", "screen-break"],
    },
    Suggestion {
        id: "gratitude",
        title: "Practice gratitude",
        description: "Write down one thing you're grateful for today",
        icon: "🙏",
        category: Category::Wellness,
        priority: Priority::Low,
        duration: Some("3 min"),
        difficulty: Some(Difficulty::Easy),
        tags: &["gratitude", "mindfulness"],
    },
    Suggestion {
        id: "quick-stretch",
        title: "Quick stretch routine",
        description: "Simple stretches to relieve tension and improve posture",
        icon: "🧘",
        category: Category::Wellness,
        priority: Priority::Medium,
        duration: Some("3 min"),
        difficulty: Some(Difficulty::Easy),
        tags: &["stretch", "posture"],
    },
    // Productivity
    Suggestion {
        id: "task-prioritization",
        title: "Prioritize your tasks",
        description: "Review your to-do list and focus on the most important items",
        icon: "📋",
        category: Category::Productivity,
        priority: Priority::High,
        duration: Some("5 min"),
        difficulty: Some(Difficulty::Medium),
        tags: &["planning", "organization"],
    },
    Suggestion {
        id: "time-blocking",
        title: "Try time blocking",
        description: "Schedule specific time slots for different types of work",
        icon: "⏰",
        category: Category::Productivity,
        priority: Priority::Medium,
        duration: Some("10 min"),
        difficulty: Some(Difficulty::Medium),
        tags: &["planning", "time-management"],
    },
    Suggestion {
        id: "declutter-desk",
        title: "Declutter your workspace",
        description: "Organize your desk for better focus and productivity",
        icon: "🗂️",
        category: Category::Productivity,
        priority: Priority::Low,
        duration: Some("5 min"),
        difficulty: Some(Difficulty::Easy),
        tags: &["organization", "workspace"],
    },
    // Focus
    Suggestion {
        id: "minimize-distractions",
        title: "Minimize distractions",
        description: "Close unnecessary tabs and put your phone on silent",
        icon: "🔇",
        category: Category::Focus,
        priority: Priority::High,
        duration: Some("2 min"),
        difficulty: Some(Difficulty::Easy),
        tags: &["focus", "distractions"],
    },
    Suggestion {
        id: "pomodoro-technique",
        title: "Use Pomodoro technique",
        description: "Work for 25 minutes, then take a 5-minute break",
        icon: "🍅",
        category: Category::Focus,
        priority: Priority::Medium,
        duration: Some("25 min"),
        difficulty: Some(Difficulty::Medium),
        tags: &["focus", "time-management"],
    },
    Suggestion {
        id: "noise-cancellation",
        title: "Use noise-cancelling",
        description: "Put on headphones or find a quieter environment",
        icon: "🎧",
        category: Category::Focus,
        priority: Priority::Medium,
        duration: Some("1 min"),
        difficulty: Some(Difficulty::Easy),
        tags: &["focus", "environment"],
    },
];

pub fn find_suggestion(id: &str) -> Option<&'static Suggestion> {
    SUGGESTIONS.iter().find(|s| s.id == id)
}
