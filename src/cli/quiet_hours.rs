//! Quiet-hours command

use super::{QuietHoursAction, Session};
use crate::wellness::QuietHours;
use anyhow::Result;
use console::style;

pub fn run(session: &Session, action: QuietHoursAction) -> Result<()> {
    let store = session.state();
    let quiet_hours = match action {
        QuietHoursAction::Show => store.load().quiet_hours,
        QuietHoursAction::On => store.update(|state| {
            state.quiet_hours.enabled = true;
            Ok(state.quiet_hours)
        })?,
        QuietHoursAction::Off => store.update(|state| {
            state.quiet_hours.enabled = false;
            Ok(state.quiet_hours)
        })?,
        QuietHoursAction::Toggle => store.update(|state| {
            state.quiet_hours.toggle();
            Ok(state.quiet_hours)
        })?,
        QuietHoursAction::Window { start, end } => store.update(|state| {
            state
                .quiet_hours
                .set_window(start.as_deref(), end.as_deref())?;
            Ok(state.quiet_hours)
        })?,
    };
    print_quiet_hours(&quiet_hours);
    Ok(())
}

fn print_quiet_hours(quiet_hours: &QuietHours) {
    let status = if quiet_hours.enabled {
        style("on").green()
    } else {
        style("off").dim()
    };
    println!("🌙 Quiet hours: {}  ({})", status, quiet_hours.window());
    if quiet_hours.enabled {
        println!(
            "   {}",
            style("Break suggestions other than a short break are hidden.").dim()
        );
    }
}
