//! Keyword sets used by the orphan and suggestion scorers.

use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,3}#{1,6}\s+(.+?)(?:\s+#+)?\s*$").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,3}(?:```|~~~)\s*([A-Za-z0-9_+\-]+)").unwrap_or_else(|_| panic!("Invalid Regex"))
});

const MIN_TOKEN_LEN: usize = 3;

const STOPWORDS: &[&str] = &[
    "and", "are", "but", "for", "from", "has", "have", "how", "into", "its", "not", "now", "of",
    "our", "that", "the", "their", "then", "this", "too", "use", "was", "what", "when", "with",
    "you", "your", "md", "new", "old", "misc", "untitled", "index",
];

/// Splits text on non-alphanumerics into lowercase tokens, dropping short
/// tokens, pure numbers and stopwords.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_lowercase)
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .filter(|t| !STOPWORDS.contains(&t.as_str()))
}

/// Keywords from every segment of a relative path, extension excluded.
#[must_use]
pub fn path_keywords(relative_path: &str) -> BTreeSet<String> {
    let without_ext = Path::new(relative_path).with_extension("");
    tokenize(&without_ext.to_string_lossy()).collect()
}

/// Keywords from the directory segments only.
#[must_use]
pub fn directory_keywords(relative_path: &str) -> BTreeSet<String> {
    tokenize(parent_dir(relative_path)).collect()
}

/// Keywords from the file stem only.
#[must_use]
pub fn stem_keywords(relative_path: &str) -> BTreeSet<String> {
    tokenize(&file_stem(relative_path)).collect()
}

/// Keywords from headings and fenced-block language hints.
#[must_use]
pub fn body_keywords(body: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    let mut in_fence = false;
    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            if !in_fence {
                if let Some(lang) = FENCE_RE.captures(line).and_then(|cap| cap.get(1)) {
                    out.insert(lang.as_str().to_lowercase());
                }
            }
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(text) = heading_text(line) {
            out.extend(tokenize(text));
        }
    }
    out
}

/// Text of an ATX heading line. A closing `#` run only counts when it is
/// separated from the text by whitespace.
pub(crate) fn heading_text(line: &str) -> Option<&str> {
    HEADING_RE
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Jaccard similarity; two empty sets are dissimilar.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Directory portion of a relative path, `""` for root-level files.
#[must_use]
pub fn parent_dir(relative_path: &str) -> &str {
    relative_path.rsplit_once('/').map_or("", |(dir, _)| dir)
}

/// Lowercased file name without extension.
#[must_use]
pub fn file_stem(relative_path: &str) -> String {
    Path::new(relative_path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// True if `a` and `b` are distinct directories and one lies inside the other.
/// The root directory contains nothing for this purpose.
#[must_use]
pub fn is_nested_dir(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() || a == b {
        return false;
    }
    is_prefix_dir(a, b) || is_prefix_dir(b, a)
}

fn is_prefix_dir(outer: &str, inner: &str) -> bool {
    inner
        .strip_prefix(outer)
        .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn path_tokens() {
        assert_eq!(
            path_keywords("planning/phase-2_graph-analysis.md"),
            set(&["analysis", "graph", "phase", "planning"])
        );
        assert_eq!(directory_keywords("top.md"), BTreeSet::new());
        assert_eq!(stem_keywords("docs/Setup Guide.md"), set(&["guide", "setup"]));
    }

    #[test]
    fn body_headings_and_fences() {
        let body = "# Vector Search\nprose about the index\n## Storage layer ##\n```rust\n# not a heading\n```\n~~~ python\n";
        assert_eq!(
            body_keywords(body),
            set(&["layer", "python", "rust", "search", "storage", "vector"])
        );
    }

    #[test]
    fn closing_hashes_need_whitespace() {
        assert_eq!(heading_text("# C#"), Some("C#"));
        assert_eq!(heading_text("## Setup ##"), Some("Setup"));
        assert_eq!(heading_text("### Notes on F# #"), Some("Notes on F#"));
        assert_eq!(heading_text("#nospace"), None);
    }

    #[test]
    fn jaccard_bounds() {
        assert!(jaccard(&set(&[]), &set(&[])).abs() < f64::EPSILON);
        assert!((jaccard(&set(&["a1x", "b2x"]), &set(&["b2x", "c3x"])) - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn nesting_is_segment_based() {
        assert!(is_nested_dir("docs", "docs/api"));
        assert!(is_nested_dir("docs/api", "docs"));
        assert!(!is_nested_dir("doc", "docs/api"));
        assert!(!is_nested_dir("", "docs"));
        assert!(!is_nested_dir("docs", "docs"));
    }
}
