// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest parsing and schema.
//!
//! Handles crucible.toml parsing with version validation and unknown key
//! warnings. The manifest declares compiler profiles, network profiles,
//! project paths, and a default-network selection; it is constructed once
//! per invocation and read-only afterwards.

mod compiler;
mod defaults;
mod network;
mod suggest;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

pub use compiler::{CompilerProfile, OptimizerSettings, SolcVersion};
pub use defaults::{DEV_ACCOUNTS, LOCAL_CHAIN_ID, LOCAL_GAS_PRICE, SIMULATED_NETWORK};
pub use network::{AccountEntry, FundedAccount, NetworkProfile};
pub use suggest::suggest_name;

use crate::error::{Error, Result};

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    project: Option<toml::Value>,

    #[serde(default)]
    paths: Option<toml::Value>,

    #[serde(default)]
    solc: Option<toml::Value>,

    #[serde(default)]
    default_network: Option<String>,

    #[serde(default)]
    networks: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full manifest.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Manifest version (must be 1).
    pub version: i64,

    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Artifact layout handed to the consuming toolchain.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Compiler profiles (`[[solc]]`).
    #[serde(default, rename = "solc")]
    pub compilers: Vec<CompilerProfile>,

    /// Network selected when the consumer does not pick one.
    #[serde(default = "defaults::default_network_name")]
    pub default_network: String,

    /// Declared network profiles by name.
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            project: ProjectConfig::default(),
            paths: PathsConfig::default(),
            compilers: Vec::new(),
            default_network: defaults::default_network_name(),
            networks: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Look up a network profile, falling back to the built-in simulated
    /// network for [`SIMULATED_NETWORK`] when it is not declared.
    ///
    /// A declared simulated profile that omits `accounts` still gets the
    /// funded dev set; overriding gas or chain parameters does not give
    /// up the default signers.
    pub fn network(&self, name: &str) -> Option<NetworkProfile> {
        if let Some(profile) = self.networks.get(name) {
            let mut profile = profile.clone();
            if profile.is_simulated() && profile.accounts.is_empty() {
                profile.accounts = defaults::dev_account_entries();
            }
            return Some(profile);
        }
        if name == SIMULATED_NETWORK {
            return Some(defaults::builtin_simulated());
        }
        None
    }

    /// All selectable network names, including the implicit simulated one.
    pub fn network_names(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = self.networks.keys().cloned().collect();
        names.insert(SIMULATED_NETWORK.to_string());
        names.into_iter().collect()
    }
}

/// Project metadata.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    pub name: Option<String>,
}

/// Artifact layout: where the consuming toolchain reads sources and
/// writes build products. Declared here, not managed here.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "PathsConfig::default_sources")]
    pub sources: String,

    #[serde(default = "PathsConfig::default_tests")]
    pub tests: String,

    #[serde(default = "PathsConfig::default_artifacts")]
    pub artifacts: String,

    #[serde(default = "PathsConfig::default_cache")]
    pub cache: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: Self::default_sources(),
            tests: Self::default_tests(),
            artifacts: Self::default_artifacts(),
            cache: Self::default_cache(),
        }
    }
}

impl PathsConfig {
    fn default_sources() -> String {
        "contracts".to_string()
    }

    fn default_tests() -> String {
        "test".to_string()
    }

    fn default_artifacts() -> String {
        "build/artifacts".to_string()
    }

    fn default_cache() -> String {
        "build/cache".to_string()
    }
}

/// Currently supported manifest version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the manifest.
const KNOWN_KEYS: &[&str] = &[
    "version",
    "project",
    "paths",
    "solc",
    "default_network",
    "networks",
];

/// Known keys under [paths].
const KNOWN_PATH_KEYS: &[&str] = &["sources", "tests", "artifacts", "cache"];

/// Known keys in a [networks.<name>] table.
const KNOWN_NETWORK_KEYS: &[&str] = &["url", "chain_id", "gas_price", "gas", "accounts"];

/// Known keys in a [[solc]] entry.
const KNOWN_SOLC_KEYS: &[&str] = &["version", "optimizer"];

/// Load and validate the manifest from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load the manifest with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse the manifest from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported manifest version {} (supported: {})\n  Upgrade crucible to use this manifest.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    // Parse full config
    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Parse the manifest, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    // First validate version
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if flexible.version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported manifest version {} (supported: {})",
                flexible.version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    // Collect unknown top-level keys
    let mut unknown_keys = BTreeSet::new();
    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown_keys.insert(key.clone());
        }
    }
    let known: Vec<String> = KNOWN_KEYS.iter().map(|k| k.to_string()).collect();
    for key in &unknown_keys {
        match suggest_name(key, &known) {
            Some(suggestion) => eprintln!(
                "crucible: warning: {}: unrecognized field `{}` (did you mean `{}`?)",
                path.display(),
                key,
                suggestion
            ),
            None => warn_unknown_key(path, key),
        }
    }

    // Parse project metadata
    let project = match flexible.project {
        Some(value) => {
            if let Some(t) = value.as_table() {
                for key in t.keys() {
                    if key != "name" {
                        warn_unknown_key(path, &format!("project.{}", key));
                    }
                }
            }
            decode_section(value, "project", path)?
        }
        None => ProjectConfig::default(),
    };

    // Parse paths
    let paths = match flexible.paths {
        Some(value) => {
            if let Some(t) = value.as_table() {
                for key in t.keys() {
                    if !KNOWN_PATH_KEYS.contains(&key.as_str()) {
                        warn_unknown_key(path, &format!("paths.{}", key));
                    }
                }
            }
            decode_section(value, "paths", path)?
        }
        None => PathsConfig::default(),
    };

    // Parse compiler profiles
    let compilers = match flexible.solc {
        Some(value) => {
            if let Some(entries) = value.as_array() {
                for (i, entry) in entries.iter().enumerate() {
                    if let Some(t) = entry.as_table() {
                        for key in t.keys() {
                            if !KNOWN_SOLC_KEYS.contains(&key.as_str()) {
                                warn_unknown_key(path, &format!("solc[{}].{}", i, key));
                            }
                        }
                    }
                }
            }
            decode_section(value, "solc", path)?
        }
        None => Vec::new(),
    };

    // Parse network profiles
    let networks: BTreeMap<String, NetworkProfile> = match flexible.networks {
        Some(value) => {
            if let Some(t) = value.as_table() {
                for (name, profile) in t {
                    if let Some(fields) = profile.as_table() {
                        for key in fields.keys() {
                            if !KNOWN_NETWORK_KEYS.contains(&key.as_str()) {
                                warn_unknown_key(path, &format!("networks.{}.{}", name, key));
                            }
                        }
                    }
                }
            }
            decode_section(value, "networks", path)?
        }
        None => BTreeMap::new(),
    };

    Ok(Config {
        version: flexible.version,
        project,
        paths,
        compilers,
        default_network: flexible
            .default_network
            .unwrap_or_else(defaults::default_network_name),
        networks,
    })
}

/// Decode a known section into its typed form.
fn decode_section<T: serde::de::DeserializeOwned>(
    value: toml::Value,
    section: &str,
    path: &Path,
) -> Result<T> {
    value.try_into().map_err(|e| Error::Config {
        message: format!("invalid `{}` section: {}", section, e),
        path: Some(path.to_path_buf()),
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "crucible: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
