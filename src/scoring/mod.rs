//! Burnout Scoring
//!
//! Turns a response set over the fixed twelve-question catalogue into a
//! classified assessment result.
//!
//! # Scoring Formula
//!
//! ```text
//! Dimension = mean(ratings of its answered questions)   (NoResponses → 0)
//! Total     = (Exhaustion + Mental Distance
//!              + Cognitive Impairment + Emotional Impairment) / 4
//! ```
//!
//! # Risk Bands (evaluated high to low)
//!
//! - total ≥ 4.0 → High
//! - 3.0 ≤ total < 4.0 → Moderate
//! - total < 3.0 → Low
//!
//! A dimension without responses still divides into the total, so a partial
//! response set pulls the total down.

mod burnout;

pub use burnout::{BurnoutScorer, ScoreBreakdown};
