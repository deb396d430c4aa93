//! WorkSight - wellness self-check library
//!
//! Scores the twelve-item Burnout Assessment Tool, keeps an append-only
//! history of results and backs a small wellness dashboard: mood rating,
//! weekly stats, a daily check-in, quiet-hours mode and suggestions.
//!
//! ```no_run
//! use worksight::assessment::ResponseSet;
//! use worksight::scoring::BurnoutScorer;
//!
//! let responses = ResponseSet::uniform(3);
//! let breakdown = BurnoutScorer::new().score(&responses);
//! assert_eq!(breakdown.total_score, 3.0);
//! ```

pub mod assessment;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reporters;
pub mod scoring;
pub mod storage;
pub mod suggestions;
pub mod wellness;

pub use error::{WellnessError, WellnessResult};
