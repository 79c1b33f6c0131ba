// src/reporting/mod.rs
//! Human-readable console output.

pub mod console;

pub use console::{print_graph, print_orphans, print_outcome, print_suggestions};

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
