pub mod io;
pub mod types;

pub use self::types::{
    Config, GraphConfig, OrphanConfig, OutputConfig, ScanConfig, SuggestConfig, VaultToml,
    VisualizeConfig,
};

use crate::constants::CONFIG_FILE;
use crate::error::{Result, VaultError};
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_toml(root.into(), VaultToml::default())
    }

    /// Loads settings for a corpus. `explicit` names a config file that must
    /// exist; otherwise `vaultlink.toml` at the root is used when present.
    ///
    /// # Errors
    /// Returns error if the config file is missing (explicit only) or malformed.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let toml = match explicit {
            Some(path) => io::load_toml(path, true)?,
            None => io::load_toml(&root.join(CONFIG_FILE), false)?,
        };
        Ok(Self::from_toml(root.to_path_buf(), toml))
    }

    /// Parses config text directly (used by tests and embedding callers).
    ///
    /// # Errors
    /// Returns error if the TOML is malformed.
    pub fn parse(root: &Path, content: &str) -> Result<Self> {
        let toml = io::parse_toml(&root.join(CONFIG_FILE), content)?;
        Ok(Self::from_toml(root.to_path_buf(), toml))
    }

    /// Copy of this config whose root is absolute and canonical, so node paths
    /// and output-dir pruning do not depend on the working directory.
    ///
    /// # Errors
    /// Returns `RootUnreadable` if the root cannot be resolved.
    pub fn canonicalized(&self) -> Result<Self> {
        let root = fs::canonicalize(&self.root).map_err(|source| VaultError::RootUnreadable {
            source,
            path: self.root.clone(),
        })?;
        Ok(Self {
            root,
            ..self.clone()
        })
    }

    /// Location of the artifact directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        if self.output.dir.is_absolute() {
            self.output.dir.clone()
        } else {
            self.root.join(&self.output.dir)
        }
    }

    /// Returns true if `ext` is one of the scanned document extensions.
    #[must_use]
    pub fn is_document_extension(&self, ext: &str) -> bool {
        self.scan
            .extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() -> Result<()> {
        let cfg = Config::parse(Path::new("/vault"), "[graph]\nmax_hubs = 3\n")?;
        assert_eq!(cfg.graph.max_hubs, 3);
        assert_eq!(cfg.graph.hub_inbound_threshold, 10);
        assert_eq!(cfg.suggest.top_n, 5);
        assert_eq!(cfg.visualize.max_edges, 50);
        Ok(())
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = Config::parse(Path::new("/vault"), "[graph\nmax_hubs = ");
        assert!(err.is_err());
    }

    #[test]
    fn test_output_dir_is_rooted() {
        let cfg = Config::new("/vault");
        assert_eq!(cfg.output_dir(), PathBuf::from("/vault/.vaultlink"));
    }

    #[test]
    fn test_extension_match_ignores_dot_and_case() {
        let mut cfg = Config::new("/vault");
        cfg.scan.extensions = vec![".MD".into()];
        assert!(cfg.is_document_extension("md"));
        assert!(!cfg.is_document_extension("txt"));
    }
}
