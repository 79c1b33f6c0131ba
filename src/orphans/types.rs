use serde::{Deserialize, Serialize};

/// Urgency of connecting a directory's orphans, by directory convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubSuggestion {
    pub file: String,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Orphans sharing a directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanGroup {
    /// `"."` for the corpus root.
    pub directory: String,
    pub files: Vec<String>,
    pub suggested_hubs: Vec<HubSuggestion>,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanReport {
    pub total_orphans: usize,
    pub orphans_by_directory: Vec<OrphanGroup>,
    pub quick_wins: Vec<String>,
}
