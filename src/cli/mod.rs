//! CLI command definitions and handlers

mod assess;
mod checkin;
mod clean;
mod mood;
mod prompt;
mod quiet_hours;
mod status;
mod suggest;

use crate::config::UserConfig;
use crate::reporters::{OutputFormat, RenderOptions};
use crate::storage::{JsonlAssessmentStore, StateStore};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// WorkSight - wellness self-check tools
///
/// 100% LOCAL - everything you enter stays in your data directory.
#[derive(Parser, Debug)]
#[command(name = "worksight")]
#[command(
    version,
    about = "Wellness self-check tools: burnout assessment, mood rating, daily check-in and suggestions",
    long_about = "WorkSight scores the twelve-question Burnout Assessment Tool across four \
dimensions (exhaustion, mental distance, cognitive and emotional impairment), keeps a \
local history of your results, and offers a small dashboard: mood rating, a daily \
check-in, quiet-hours mode and rule-based wellness suggestions.\n\n\
100% LOCAL - nothing leaves your machine.",
    after_help = "\
Examples:
  worksight questions                           List the assessment questions
  worksight assess --name \"Sam Park\"            Answer the questions interactively
  worksight assess --name Sam -a ex1=4 -a ex2=3 ... --format json
  worksight mood set 4                          Record today's mood
  worksight checkin                             Run the daily check-in
  worksight suggest                             Show suggestions for your mood"
)]
pub struct Cli {
    /// Directory holding assessment history and dashboard state
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the assessment questions and the rating scale
    Questions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Take the burnout assessment
    ///
    /// Answers not given with --answer or --answers-file are asked for on stdin.
    #[command(after_help = "\
Examples:
  worksight assess --name \"Sam Park\" --department Design
  worksight assess --name Sam --answers-file answers.json --format markdown
  worksight assess --partial -a ex1=5 -a ex2=4      Preview a score without saving")]
    Assess {
        /// Participant full name (required unless --partial)
        #[arg(long)]
        name: Option<String>,

        /// Participant department
        #[arg(long)]
        department: Option<String>,

        /// Assessment date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Answer as <question-id>=<rating>, repeatable
        #[arg(long = "answer", short = 'a', value_name = "ID=N")]
        answers: Vec<String>,

        /// JSON file mapping question ids to ratings
        #[arg(long)]
        answers_file: Option<PathBuf>,

        /// Score whatever was answered without saving (no prompting)
        #[arg(long)]
        partial: bool,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Disable emoji in output
        #[arg(long)]
        no_emoji: bool,
    },

    /// List saved assessments
    History {
        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Only show the most recent N assessments
        #[arg(long)]
        last: Option<usize>,

        /// Disable emoji in output
        #[arg(long)]
        no_emoji: bool,
    },

    /// Rate or show your mood
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },

    /// Show weekly wellness statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage quiet-hours mode
    QuietHours {
        #[command(subcommand)]
        action: QuietHoursAction,
    },

    /// Run the daily check-in (missing answers are asked for on stdin)
    #[command(args_conflicts_with_subcommands = true)]
    Checkin {
        #[command(subcommand)]
        action: Option<CheckinAction>,

        /// Hours slept last night (0-24)
        #[arg(long)]
        sleep: Option<String>,

        /// Energy level: Very Low, Low, Moderate, High, Very High
        #[arg(long)]
        energy: Option<String>,

        /// Stress level: Not at all, Slightly, Moderately, Very, Extremely
        #[arg(long)]
        stress: Option<String>,

        /// Main goal for today
        #[arg(long)]
        goal: Option<String>,
    },

    /// Show wellness suggestions for your mood
    #[command(args_conflicts_with_subcommands = true)]
    #[command(after_help = "\
Examples:
  worksight suggest                         Use the stored mood and quiet-hours mode
  worksight suggest --mood 2 --category break
  worksight suggest done deep-breathing     Mark an action as completed")]
    Suggest {
        #[command(subcommand)]
        action: Option<SuggestAction>,

        /// Mood to filter for (1-5, default: stored mood)
        #[arg(long)]
        mood: Option<i64>,

        /// Apply quiet-hours filtering even if the mode is off
        #[arg(long)]
        quiet_hours: bool,

        /// Category tab: all, wellness, productivity, break, focus
        #[arg(long, default_value = "all")]
        category: String,

        /// Include actions already marked as completed
        #[arg(long)]
        show_completed: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show stored data, paths and today's dashboard summary
    Status,

    /// Manage configuration (init, show, or set config values)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Remove stored assessment history and dashboard state
    Clean {
        /// Preview what would be removed without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug)]
pub enum MoodAction {
    /// Record today's mood (1 = very low, 5 = great)
    Set {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Show the current mood and the last week of entries
    Show,
}

#[derive(Subcommand, Debug)]
pub enum QuietHoursAction {
    /// Enable quiet hours
    On,
    /// Disable quiet hours
    Off,
    /// Flip quiet hours on or off
    Toggle,
    /// Show the current setting
    Show,
    /// Change the quiet-hours window
    Window {
        /// Start time (HH:MM)
        #[arg(long)]
        start: Option<String>,
        /// End time (HH:MM)
        #[arg(long)]
        end: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CheckinAction {
    /// Show whether today's check-in is done
    Status,
    /// Mark the check-in as not done so it can be taken again
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum SuggestAction {
    /// Mark a suggestion as completed
    Done { id: String },
    /// Undo a completed suggestion
    Undo { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize config file with example settings
    Init,
    /// Show current config and paths
    Show,
    /// Set a config value
    Set {
        /// Config key (storage.data_dir, output.format, output.no_emoji)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Resolved settings shared by every command
pub(crate) struct Session {
    pub config: UserConfig,
    pub data_dir: PathBuf,
    pub today: NaiveDate,
}

impl Session {
    fn new(config: UserConfig, data_dir_flag: Option<PathBuf>) -> Self {
        let data_dir = data_dir_flag.unwrap_or_else(|| config.data_dir());
        Self {
            config,
            data_dir,
            today: chrono::Local::now().date_naive(),
        }
    }

    pub fn history(&self) -> JsonlAssessmentStore {
        JsonlAssessmentStore::in_dir(&self.data_dir)
    }

    pub fn state(&self) -> StateStore {
        StateStore::in_dir(&self.data_dir)
    }

    /// Output format from the flag, else the config default
    pub fn format(&self, flag: Option<&str>) -> Result<OutputFormat> {
        OutputFormat::from_str(flag.unwrap_or_else(|| self.config.format()))
    }

    pub fn render_options(&self, no_emoji: bool) -> RenderOptions {
        RenderOptions {
            no_emoji: no_emoji || self.config.no_emoji(),
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = UserConfig::load()?;
    let session = Session::new(config, cli.data_dir);
    tracing::debug!("Using data directory {}", session.data_dir.display());

    match cli.command {
        Commands::Questions { json } => assess::questions(json),

        Commands::Assess {
            name,
            department,
            date,
            answers,
            answers_file,
            partial,
            format,
            no_emoji,
        } => assess::run(
            &session,
            assess::AssessArgs {
                name,
                department,
                date,
                answers,
                answers_file,
                partial,
                format,
                no_emoji,
            },
        ),

        Commands::History {
            format,
            last,
            no_emoji,
        } => assess::history(&session, format.as_deref(), last, no_emoji),

        Commands::Mood { action } => match action {
            MoodAction::Set { value } => mood::set(&session, value),
            MoodAction::Show => mood::show(&session),
        },

        Commands::Stats { json } => mood::stats(&session, json),

        Commands::QuietHours { action } => quiet_hours::run(&session, action),

        Commands::Checkin {
            action,
            sleep,
            energy,
            stress,
            goal,
        } => match action {
            Some(CheckinAction::Status) => checkin::status(&session),
            Some(CheckinAction::Reset) => checkin::reset(&session),
            None => checkin::run(
                &session,
                [
                    ("sleep", sleep),
                    ("energy", energy),
                    ("stress", stress),
                    ("goals", goal),
                ],
            ),
        },

        Commands::Suggest {
            action,
            mood,
            quiet_hours,
            category,
            show_completed,
            json,
        } => match action {
            Some(SuggestAction::Done { id }) => suggest::done(&session, &id),
            Some(SuggestAction::Undo { id }) => suggest::undo(&session, &id),
            None => suggest::run(
                &session,
                suggest::SuggestArgs {
                    mood,
                    quiet_hours,
                    category,
                    show_completed,
                    json,
                },
            ),
        },

        Commands::Status => status::run(&session),

        Commands::Config { action } => run_config_action(action),

        Commands::Clean { dry_run } => clean::run(&session.data_dir, dry_run),

        Commands::Version => {
            println!("worksight {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn run_config_action(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = UserConfig::init_user_config()?;
            println!("✅ Config initialized at: {}", path.display());
            println!("\nEdit it to change where data is kept or the default output format:");
            println!("  {}", path.display());
            Ok(())
        }
        ConfigAction::Show => show_config(),
        ConfigAction::Set { key, value } => set_config_value(&key, &value),
    }
}

fn set_config_value(key: &str, value: &str) -> Result<()> {
    let config_path = UserConfig::init_user_config()?;
    let content = std::fs::read_to_string(&config_path)?;
    let content = UserConfig::set_value(&content, key, value)?;
    std::fs::write(&config_path, content)?;
    println!("✅ Set {} in {}", key, config_path.display());
    Ok(())
}

fn show_config() -> Result<()> {
    let config = UserConfig::load()?;
    println!("📁 Config paths:");
    if let Some(user_path) = UserConfig::user_config_path() {
        let status = if user_path.exists() {
            "✓"
        } else {
            "(not found)"
        };
        println!("  User:    {} {}", user_path.display(), status);
    }
    println!();
    println!("💾 Data directory: {}", config.data_dir().display());
    println!("🖨  Output format:  {}", config.format());
    println!("   Emoji:          {}", if config.no_emoji() { "off" } else { "on" });
    Ok(())
}
