//! Inline `[[target|alias]]` cross-references.

use regex::Regex;
use std::sync::LazyLock;

static WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\[\]\n]+?)\]\]").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// A cross-reference as written in a body, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The resolution target: text before `|` and `#`.
    pub target: String,
    pub alias: Option<String>,
    pub heading: Option<String>,
}

/// Extracts every reference in document order. Repeats are kept.
#[must_use]
pub fn extract(body: &str) -> Vec<Reference> {
    WIKILINK_RE
        .captures_iter(body)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| parse_inner(m.as_str()))
        .collect()
}

/// Parses the text between the brackets.
#[must_use]
pub fn parse_inner(inner: &str) -> Option<Reference> {
    let (left, alias) = match inner.split_once('|') {
        Some((l, a)) => (l, non_empty(a)),
        None => (inner, None),
    };
    let (target, heading) = match left.split_once('#') {
        Some((t, h)) => (t, non_empty(h)),
        None => (left, None),
    };

    let target = target.trim();
    if target.is_empty() {
        return None;
    }
    Some(Reference {
        target: target.to_string(),
        alias,
        heading,
    })
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(body: &str) -> Vec<String> {
        extract(body).into_iter().map(|r| r.target).collect()
    }

    #[test]
    fn plain_and_aliased() {
        let body = "See [[notes/alpha]] and [[beta|the beta doc]].";
        assert_eq!(targets(body), vec!["notes/alpha", "beta"]);
        assert_eq!(extract(body)[1].alias.as_deref(), Some("the beta doc"));
    }

    #[test]
    fn heading_fragment_is_not_target() {
        let refs = extract("[[gamma#Setup|setup steps]] ![[delta]]");
        assert_eq!(refs[0].target, "gamma");
        assert_eq!(refs[0].heading.as_deref(), Some("Setup"));
        assert_eq!(refs[1].target, "delta");
    }

    #[test]
    fn repeats_are_kept_and_blanks_dropped() {
        assert_eq!(targets("[[a]] [[a|again]] [[ ]] [[#local]]"), vec!["a", "a"]);
    }

    #[test]
    fn unterminated_spans_do_not_match() {
        assert!(targets("[[open\nclose]] [single]").is_empty());
    }
}
