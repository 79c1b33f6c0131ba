#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vaultlink_core::config::Config;

/// Writes `files` (relative path, content) under a fresh temp root.
pub fn vault(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    for (rel, content) in files {
        write(dir.path(), rel, content);
    }
    dir
}

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, content).expect("write");
}

pub fn config(dir: &TempDir) -> Config {
    Config::new(dir.path())
}

/// A hub at `hub` referenced by `count` linker documents under `from_dir`.
pub fn with_hub(files: &mut Vec<(String, String)>, hub: &str, from_dir: &str, count: usize) {
    let target = hub.trim_end_matches(".md");
    for i in 0..count {
        files.push((
            format!("{from_dir}/linker-{i:02}.md"),
            format!("see [[{target}]]\n"),
        ));
    }
}

pub fn vault_owned(files: &[(String, String)]) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    for (rel, content) in files {
        write(dir.path(), rel, content);
    }
    dir
}
