use std::fs;
use std::path::Path;

use super::types::VaultToml;
use crate::error::{Result, VaultError};

/// Reads `vaultlink.toml`. A missing optional file yields defaults; a missing
/// explicit file or one that fails to parse is an error.
pub(crate) fn load_toml(path: &Path, required: bool) -> Result<VaultToml> {
    if !path.is_file() {
        if required {
            return Err(VaultError::Config {
                path: path.to_path_buf(),
                message: "file not found".to_string(),
            });
        }
        return Ok(VaultToml::default());
    }

    let content = fs::read_to_string(path).map_err(|e| VaultError::io(path, e))?;
    parse_toml(path, &content)
}

pub(crate) fn parse_toml(path: &Path, content: &str) -> Result<VaultToml> {
    toml::from_str(content).map_err(|e| VaultError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
