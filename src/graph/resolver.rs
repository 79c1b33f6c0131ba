// src/graph/resolver.rs
//! Maps raw reference targets to scanned documents.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::ScanConfig;
use crate::document::keywords::{file_stem, parent_dir};

/// Resolves references against the set of documents found at scan time.
pub struct Resolver<'a> {
    known: &'a BTreeSet<String>,
    probe_dirs: &'a [String],
    extensions: &'a [String],
    /// Lowercased stem -> documents with that stem, for name fallback.
    stems: Option<BTreeMap<String, Vec<&'a str>>>,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(known: &'a BTreeSet<String>, scan: &'a ScanConfig) -> Self {
        let stems = scan.resolve_by_name.then(|| index_stems(known));
        Self {
            known,
            probe_dirs: &scan.probe_dirs,
            extensions: &scan.extensions,
            stems,
        }
    }

    /// Resolves `target` as written in the document at `source`.
    ///
    /// Tries, in order: the corpus root, the source's directory, each probe
    /// directory, then (if enabled) a unique file-stem match.
    #[must_use]
    pub fn resolve(&self, source: &str, target: &str) -> Option<String> {
        let target = target.trim().replace('\\', "/");
        let target = target.trim_start_matches('/');
        if target.is_empty() {
            return None;
        }
        let with_ext = self.with_extension(target);

        let source_dir = parent_dir(source);
        let from_root = std::iter::once(with_ext.clone());
        let from_source = (!source_dir.is_empty()).then(|| format!("{source_dir}/{with_ext}"));
        let from_probes = self.probe_dirs.iter().map(|d| format!("{}/{with_ext}", d.trim_matches('/')));

        from_root
            .chain(from_source)
            .chain(from_probes)
            .filter_map(|candidate| normalize(&candidate))
            .find(|candidate| self.known.contains(candidate))
            .or_else(|| self.resolve_by_name(&with_ext))
    }

    fn with_extension(&self, target: &str) -> String {
        let lower = target.to_lowercase();
        let has_ext = self
            .extensions
            .iter()
            .any(|e| lower.ends_with(&format!(".{}", e.trim_start_matches('.').to_lowercase())));
        if has_ext {
            return target.to_string();
        }
        let ext = self
            .extensions
            .first()
            .map_or(crate::constants::DOC_EXTENSION, |e| e.trim_start_matches('.'));
        format!("{target}.{ext}")
    }

    fn resolve_by_name(&self, target: &str) -> Option<String> {
        let stems = self.stems.as_ref()?;
        match stems.get(&file_stem(target))?.as_slice() {
            [only] => Some((*only).to_string()),
            _ => None,
        }
    }
}

fn index_stems(known: &BTreeSet<String>) -> BTreeMap<String, Vec<&str>> {
    let mut stems: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for path in known {
        stems.entry(file_stem(path)).or_default().push(path.as_str());
    }
    stems
}

/// Collapses `.` and `..` segments. Returns `None` for paths that climb out
/// of the corpus root.
#[must_use]
pub fn normalize(path: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            s => parts.push(s),
        }
    }
    (!parts.is_empty()).then(|| parts.join("/"))
}
