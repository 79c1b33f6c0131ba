//! Orphan classification: buckets by directory, hub suggestions, quick wins.

pub mod classifier;
pub mod priority;
pub mod types;

pub use classifier::{classify, hub_rules, is_quick_win, HubPair};
pub use types::{HubSuggestion, OrphanGroup, OrphanReport, Priority};
