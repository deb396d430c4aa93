//! Mood and stats commands

use super::Session;
use crate::wellness::{MoodLevel, WellnessStats, RECENT_WINDOW_DAYS};
use anyhow::Result;
use console::style;
use tracing::info;

pub fn set(session: &Session, value: i64) -> Result<()> {
    let mood = MoodLevel::from_value(value)?;
    let today = session.today;
    session.state().update(|state| {
        state.set_mood(mood, today);
        Ok(())
    })?;
    info!("Recorded mood {} for {}", mood.value(), today);

    println!("{} Mood set to {} - {}", mood.emoji(), mood, mood.description());
    Ok(())
}

pub fn show(session: &Session) -> Result<()> {
    let state = session.state().load();

    match state.current_mood {
        Some(mood) => println!(
            "\nCurrent mood: {} {}  {}",
            mood.emoji(),
            style(mood).bold(),
            style(mood.description()).dim()
        ),
        None => println!(
            "\nNo mood recorded yet. Run {}",
            style("worksight mood set <1-5>").cyan()
        ),
    }

    let recent: Vec<_> = state
        .mood_history
        .entries()
        .iter()
        .filter(|e| (session.today - e.date).num_days() < RECENT_WINDOW_DAYS)
        .collect();
    if !recent.is_empty() {
        println!("\n{}", style("LAST 7 DAYS").bold());
        for entry in recent {
            println!(
                "  {}  {} {}",
                style(entry.date).dim(),
                entry.mood.emoji(),
                entry.mood
            );
        }
    }
    println!();
    Ok(())
}

pub fn stats(session: &Session, json: bool) -> Result<()> {
    let state = session.state().load();
    let stats = WellnessStats::compute(
        &state.mood_history,
        state.check_in.last_check_in_date,
        session.today,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\n{}\n", style("Weekly Wellness Stats").bold());
    match stats.average_mood {
        Some(avg) => println!("  Average mood:   {}/5", style(format!("{:.1}", avg)).cyan()),
        None => println!("  Average mood:   {}", style("no entries this week").dim()),
    }
    let trend = match stats.mood_delta {
        d if d > 0 => style(format!("{} (+{})", stats.mood_trend, d)).green(),
        d if d < 0 => style(format!("{} ({})", stats.mood_trend, d)).red(),
        _ => style(stats.mood_trend.to_string()).dim(),
    };
    println!("  Trend:          {}", trend);
    println!(
        "  Distribution:   {} low, {} medium, {} high",
        style(stats.distribution.low).red(),
        style(stats.distribution.medium).yellow(),
        style(stats.distribution.high).green()
    );
    println!(
        "  Entries:        {} this week, {} total",
        stats.recent_entries, stats.total_entries
    );
    println!("  Check-in streak: {} day{}", stats.check_in_streak, if stats.check_in_streak == 1 { "" } else { "s" });
    println!();
    Ok(())
}
