//! Status command - show stored data and today's dashboard summary

use super::Session;
use crate::storage::{history_path, state_path, AssessmentStore};
use anyhow::Result;
use console::style;

/// Run the status command
pub fn run(session: &Session) -> Result<()> {
    println!("\nWorkSight Status\n");
    println!("  Data: {}", style(session.data_dir.display()).cyan());
    println!();

    let history_file = history_path(&session.data_dir);
    if history_file.exists() {
        let history = session.history().load_history()?;
        println!(
            "  {} {} assessment{} saved",
            style("[OK]").green(),
            style(history.len()).cyan(),
            if history.len() == 1 { "" } else { "s" }
        );
        if let Some(latest) = history.last() {
            println!(
                "      Latest: {} - {:.2} ({} risk)",
                latest.completed_at.format("%Y-%m-%d"),
                latest.total_score,
                latest.risk_level
            );
        }
    } else {
        println!(
            "  {} No assessments yet. Run {}",
            style("[--]").dim(),
            style("worksight assess").cyan()
        );
    }

    if !state_path(&session.data_dir).exists() {
        println!("  {} No dashboard data yet", style("[--]").dim());
        println!();
        return Ok(());
    }

    let state = session.state().load();
    println!("  {} Dashboard state", style("[OK]").green());
    if !state.user_name.is_empty() {
        println!("      User: {}", state.user_name);
    }
    match state.current_mood {
        Some(mood) => println!("      Mood: {} {}", mood.emoji(), mood),
        None => println!("      Mood: {}", style("not set").dim()),
    }
    let check_in = if state.check_in.is_due(session.today) {
        style("due").yellow()
    } else {
        style("done").green()
    };
    println!("      Check-in today: {}", check_in);
    println!(
        "      Quiet hours: {} ({})",
        if state.quiet_hours.enabled { "on" } else { "off" },
        state.quiet_hours.window()
    );
    println!(
        "      Completed actions: {}",
        style(state.completed_actions.len()).cyan()
    );
    println!();
    Ok(())
}
