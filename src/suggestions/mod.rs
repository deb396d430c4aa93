//! Rule-based wellness suggestions
//!
//! A fixed catalogue is narrowed by the current mood and quiet-hours mode,
//! capped at six, and then shown through a category tab that can hide
//! actions the user already completed.

mod catalog;
mod filter;

pub use catalog::{
    find_suggestion, Category, Difficulty, Priority, Suggestion, SUGGESTIONS, TAKE_BREAK_ID,
};
pub use filter::{
    filter_suggestions, recommend, CategoryView, SuggestionView, MAX_SUGGESTIONS,
};
