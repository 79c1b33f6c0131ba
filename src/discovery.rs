// src/discovery.rs
use crate::config::Config;
use crate::error::{Result, VaultError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lists every document under the corpus root, sorted by path. Returned
/// paths are absolute.
///
/// Walk errors below the root are logged and skipped.
///
/// # Errors
/// Returns `RootUnreadable` if the root itself cannot be listed.
pub fn discover(config: &Config) -> Result<Vec<PathBuf>> {
    let config = &config.canonicalized()?;
    let root = config.root.as_path();
    fs::read_dir(root).map_err(|source| VaultError::RootUnreadable {
        source,
        path: root.to_path_buf(),
    })?;

    let output_dir = fs::canonicalize(config.output_dir()).unwrap_or_else(|_| config.output_dir());
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_skip_dir(e, config, &output_dir));

    let (paths, error_count) = accumulate_walker(walker, config);
    if error_count > 0 {
        tracing::warn!(errors = error_count, "encountered errors during corpus walk");
    }
    Ok(paths)
}

fn should_skip_dir(entry: &DirEntry, config: &Config, output_dir: &Path) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    if entry.path() == output_dir {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    config.scan.exclude_dirs.iter().any(|d| *d == name)
}

fn accumulate_walker<I>(walker: I, config: &Config) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && is_document(entry.path(), config) {
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                errors += 1;
            }
        }
    }
    (paths, errors)
}

fn is_document(path: &Path, config: &Config) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| config.is_document_extension(ext))
}

/// Normalizes a path to use forward slashes (stable identifiers across platforms).
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Corpus-relative identifier for a discovered file.
#[must_use]
pub fn relative_id(root: &Path, path: &Path) -> String {
    normalize_path(path.strip_prefix(root).unwrap_or(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_skips_excluded_and_foreign_files() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let root = &dir.path().canonicalize()?;
        fs::create_dir_all(root.join("notes"))?;
        fs::create_dir_all(root.join(".git"))?;
        fs::create_dir_all(root.join(".vaultlink"))?;
        fs::write(root.join("notes/a.md"), "a")?;
        fs::write(root.join("b.md"), "b")?;
        fs::write(root.join("c.txt"), "c")?;
        fs::write(root.join(".git/d.md"), "d")?;
        fs::write(root.join(".vaultlink/graph-visualization.md"), "e")?;

        let config = Config::new(root);
        let found: Vec<String> = discover(&config)?
            .iter()
            .map(|p| relative_id(root, p))
            .collect();
        assert_eq!(found, vec!["b.md".to_string(), "notes/a.md".to_string()]);
        Ok(())
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let config = Config::new("/definitely/not/a/vault/root");
        let err = discover(&config);
        assert!(matches!(err, Err(VaultError::RootUnreadable { .. })));
    }
}
