//! The fixed colour legend appended after every view.

use super::mermaid::Tier;

#[must_use]
pub fn description(tier: Tier) -> &'static str {
    match tier {
        Tier::Orphan => "Orphan: zero links, needs attention",
        Tier::Weak => "Weak: fewer than 2 links",
        Tier::Moderate => "Moderate: 2-4 links",
        Tier::Well => "Well-connected: 5-9 links",
        Tier::Hub => "Hub: 10 or more inbound links",
    }
}

#[must_use]
pub fn colour(tier: Tier) -> &'static str {
    match tier {
        Tier::Orphan => "red",
        Tier::Weak => "orange",
        Tier::Moderate => "yellow",
        Tier::Well => "green",
        Tier::Hub => "blue",
    }
}

/// Markdown table describing the five tiers.
#[must_use]
pub fn render() -> String {
    let mut out = String::from("**Legend**\n\n| Colour | Tier |\n|---|---|\n");
    for tier in Tier::ALL {
        out.push_str(&format!("| {} | {} |\n", colour(tier), description(tier)));
    }
    out
}
