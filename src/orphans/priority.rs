//! Directory-convention priority tiers.

use super::types::Priority;
use crate::config::OrphanConfig;

/// Documentation/planning-like directories are high, source/test-like ones
/// medium, anything else low. Any matching path segment counts.
#[must_use]
pub fn for_directory(directory: &str, config: &OrphanConfig) -> Priority {
    let segments: Vec<String> = directory
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect();

    let matches = |names: &[String]| {
        segments
            .iter()
            .any(|seg| names.iter().any(|n| n.eq_ignore_ascii_case(seg)))
    };

    if matches(&config.high_priority_dirs) {
        Priority::High
    } else if matches(&config.medium_priority_dirs) {
        Priority::Medium
    } else {
        Priority::Low
    }
}
