//! Suggest command

use super::Session;
use crate::suggestions::{find_suggestion, recommend, CategoryView, Priority, Suggestion, SuggestionView};
use crate::wellness::MoodLevel;
use anyhow::Result;
use console::style;
use std::str::FromStr;

pub(crate) struct SuggestArgs {
    pub mood: Option<i64>,
    pub quiet_hours: bool,
    pub category: String,
    pub show_completed: bool,
    pub json: bool,
}

pub fn run(session: &Session, args: SuggestArgs) -> Result<()> {
    let state = session.state().load();
    let mood = match args.mood {
        Some(value) => Some(MoodLevel::from_value(value)?),
        None => state.current_mood,
    };
    let quiet_hours = args.quiet_hours || state.quiet_hours.enabled;
    let view = SuggestionView {
        category: CategoryView::from_str(&args.category)?,
        show_completed: args.show_completed,
    };

    let suggestions = view.apply(recommend(mood, quiet_hours), &state.completed_actions);

    if args.json {
        let items: Vec<serde_json::Value> = suggestions
            .iter()
            .map(|s| -> Result<serde_json::Value> {
                let mut value = serde_json::to_value(s)?;
                value["completed"] = state.completed_actions.contains(s.id).into();
                Ok(value)
            })
            .collect::<Result<_>>()?;
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    let heading = match mood {
        Some(m) => format!("Suggestions for a {} mood", m.label().to_lowercase()),
        None => "Suggestions".to_string(),
    };
    println!("\n{}{}\n", style(heading).bold(), if quiet_hours { "  🌙 quiet hours" } else { "" });

    if suggestions.is_empty() {
        println!(
            "  {}",
            style("Nothing left here. Use --show-completed to see finished actions.").dim()
        );
        return Ok(());
    }
    for suggestion in suggestions {
        print_suggestion(suggestion, state.completed_actions.contains(suggestion.id));
    }
    Ok(())
}

fn print_suggestion(s: &Suggestion, completed: bool) {
    let title = if completed {
        style(format!("{} (done)", s.title)).dim().strikethrough()
    } else {
        style(s.title.to_string()).bold()
    };
    let priority = match s.priority {
        Priority::High => style(s.priority.to_string()).red(),
        Priority::Medium => style(s.priority.to_string()).yellow(),
        Priority::Low => style(s.priority.to_string()).dim(),
    };
    println!("  {} {}  [{}] {}", s.icon, title, s.category, priority);
    println!("     {}", s.description);
    let mut meta = Vec::new();
    if let Some(duration) = s.duration {
        meta.push(duration.to_string());
    }
    if let Some(difficulty) = s.difficulty {
        meta.push(difficulty.to_string());
    }
    meta.push(format!("id: {}", s.id));
    println!("     {}\n", style(meta.join(" · ")).dim());
}

pub fn done(session: &Session, id: &str) -> Result<()> {
    let newly = session
        .state()
        .update(|state| Ok(state.complete_action(id)?))?;
    let title = find_suggestion(id).map(|s| s.title).unwrap_or(id);
    if newly {
        println!("✅ Marked '{}' as done", title);
    } else {
        println!("'{}' was already marked as done", title);
    }
    Ok(())
}

pub fn undo(session: &Session, id: &str) -> Result<()> {
    let removed = session.state().update(|state| Ok(state.undo_action(id)))?;
    if removed {
        println!("↩️  '{}' is no longer marked as done", id);
    } else {
        println!("'{}' was not marked as done", id);
    }
    Ok(())
}
