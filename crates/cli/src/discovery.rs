//! Manifest discovery.
//!
//! Walks from the current directory up to the git root looking for
//! crucible.toml.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Find crucible.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join("crucible.toml");
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        // Move up one directory
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve the manifest path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "CRUCIBLE_CONFIG")
/// 2. Discovery from current directory up to git root
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("manifest not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

/// Locate and load the manifest for a CLI invocation.
///
/// Missing manifest is a config error; commands that need one cannot run
/// on defaults alone.
pub fn load_for_cli(explicit: Option<&Path>) -> Result<(PathBuf, crate::config::Config)> {
    let cwd = std::env::current_dir().map_err(|e| Error::Io {
        path: PathBuf::from("."),
        source: e,
    })?;

    let path = resolve_config(explicit, &cwd)?.ok_or_else(|| Error::Config {
        message: "no crucible.toml found (run `crucible init` to create one)".to_string(),
        path: None,
    })?;

    let config = crate::config::load_with_warnings(&path)?;
    Ok((path, config))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
