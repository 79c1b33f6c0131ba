//! Minimal Mermaid flowchart writer.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use crate::graph::DocumentNode;

const MAX_LABEL_CHARS: usize = 40;

/// Connectivity tier used for node colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Orphan,
    Weak,
    Moderate,
    Well,
    Hub,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Self::Orphan, Self::Weak, Self::Moderate, Self::Well, Self::Hub];

    /// Hub status is by inbound count; the others by total link count.
    #[must_use]
    pub fn of(node: &DocumentNode, hub_inbound: usize) -> Self {
        if node.inbound_count() >= hub_inbound {
            return Self::Hub;
        }
        match node.link_count {
            0 => Self::Orphan,
            1 => Self::Weak,
            2..=4 => Self::Moderate,
            _ => Self::Well,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Orphan => "orphan",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Well => "well",
            Self::Hub => "hub",
        }
    }

    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Self::Orphan => "fill:#ff6b6b,stroke:#c92a2a,color:#fff",
            Self::Weak => "fill:#ffa94d,stroke:#e8590c,color:#000",
            Self::Moderate => "fill:#ffe066,stroke:#f59f00,color:#000",
            Self::Well => "fill:#69db7c,stroke:#2f9e44,color:#000",
            Self::Hub => "fill:#4dabf7,stroke:#1864ab,color:#fff",
        }
    }
}

/// Replaces every character outside `[A-Za-z0-9_]` with `_` and guarantees a
/// leading letter.
#[must_use]
pub fn sanitize_id(raw: &str) -> String {
    let mut id: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if !id.starts_with(|c: char| c.is_ascii_alphabetic()) {
        id.insert_str(0, "n_");
    }
    id
}

/// Makes text safe inside a quoted Mermaid label.
#[must_use]
pub fn escape_label(raw: &str) -> String {
    let flat: String = raw
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let mut label: String = flat.chars().take(MAX_LABEL_CHARS).collect();
    if flat.chars().count() > MAX_LABEL_CHARS {
        label.push_str("...");
    }
    label
        .replace('"', "#quot;")
        .replace('<', "#lt;")
        .replace('>', "#gt;")
}

/// Hands out unique sanitized identifiers, stable for a given key.
#[derive(Debug, Default)]
pub struct IdAllocator {
    assigned: BTreeMap<String, String>,
    used: BTreeSet<String>,
}

impl IdAllocator {
    pub fn id_for(&mut self, key: &str) -> String {
        if let Some(id) = self.assigned.get(key) {
            return id.clone();
        }
        let base = sanitize_id(key);
        let mut id = base.clone();
        let mut n = 2;
        while self.used.contains(&id) {
            id = format!("{base}_{n}");
            n += 1;
        }
        self.used.insert(id.clone());
        self.assigned.insert(key.to_string(), id.clone());
        id
    }
}

/// Accumulates flowchart lines.
pub struct Flowchart {
    out: String,
    ids: IdAllocator,
    indent: usize,
}

impl Flowchart {
    #[must_use]
    pub fn new(direction: &str) -> Self {
        let mut out = String::new();
        let _ = writeln!(out, "graph {direction}");
        Self {
            out,
            ids: IdAllocator::default(),
            indent: 1,
        }
    }

    pub fn id(&mut self, key: &str) -> String {
        self.ids.id_for(key)
    }

    pub fn comment(&mut self, text: &str) {
        self.line(&format!("%% {text}"));
    }

    /// Declares a node and assigns its class. Returns the node id.
    pub fn node(&mut self, key: &str, label: &str, class: &str) -> String {
        let id = self.id(key);
        self.line(&format!("{id}[\"{}\"]:::{class}", escape_label(label)));
        id
    }

    pub fn edge(&mut self, from_key: &str, to_key: &str) {
        let from = self.id(from_key);
        let to = self.id(to_key);
        self.line(&format!("{from} --> {to}"));
    }

    pub fn begin_subgraph(&mut self, key: &str, label: &str) {
        let id = self.id(&format!("dir:{key}"));
        self.line(&format!("subgraph {id}[\"{}\"]", escape_label(label)));
        self.indent += 1;
    }

    pub fn end_subgraph(&mut self) {
        self.indent = self.indent.saturating_sub(1).max(1);
        self.line("end");
    }

    /// Appends class definitions for all tiers and returns the markup.
    #[must_use]
    pub fn finish(mut self) -> String {
        for tier in Tier::ALL {
            self.line(&format!("classDef {} {}", tier.class(), tier.style()));
        }
        self.line("classDef more fill:#f1f3f5,stroke:#adb5bd,color:#495057,stroke-dasharray: 4 2");
        self.out
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}{text}", "    ".repeat(self.indent));
    }
}
