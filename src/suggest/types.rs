use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const HIGH_MIN: f64 = 30.0;
    pub const MEDIUM_MIN: f64 = 15.0;

    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_MIN {
            Self::High
        } else if score >= Self::MEDIUM_MIN {
            Self::Medium
        } else {
            Self::Low
        }
    }

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
pub struct SuggestedConnection {
    pub target_file: String,
    pub reason: String,
    pub confidence: Confidence,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanSuggestions {
    pub orphan_file: String,
    pub suggested_connections: Vec<SuggestedConnection>,
    pub keywords: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    pub total_orphans: usize,
    pub suggestions: Vec<OrphanSuggestions>,
}

impl SuggestionReport {
    /// Number of suggested connections with high confidence.
    #[must_use]
    pub fn high_confidence_count(&self) -> usize {
        self.suggestions
            .iter()
            .flat_map(|s| &s.suggested_connections)
            .filter(|c| c.confidence == Confidence::High)
            .count()
    }
}
