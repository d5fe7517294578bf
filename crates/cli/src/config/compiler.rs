// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiler profile schema.
//!
//! A profile names a solc release plus optimizer settings. Multiple
//! profiles coexist so sources pinned to different language versions can
//! be compiled in one project.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A single `[[solc]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CompilerProfile {
    /// Release identifier, e.g. "0.8.24".
    pub version: String,

    /// Optimizer settings.
    #[serde(default)]
    pub optimizer: OptimizerSettings,
}

impl CompilerProfile {
    /// Parse the declared version; None if it is not a valid triple.
    pub fn solc_version(&self) -> Option<SolcVersion> {
        self.version.parse().ok()
    }
}

/// Optimizer settings for one compiler profile.
///
/// `runs` is solc's size/speed trade-off knob: 0 optimizes purely for
/// deploy size, larger values for runtime cost. Any u32 is accepted by
/// the compiler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptimizerSettings {
    #[serde(default)]
    pub enabled: bool,

    /// Declared run count; None means the solc default.
    #[serde(default)]
    pub runs: Option<u32>,
}

impl OptimizerSettings {
    /// The run count solc will actually use.
    pub fn effective_runs(&self) -> u32 {
        self.runs.unwrap_or(Self::DEFAULT_RUNS)
    }

    /// solc's own default when runs is unspecified.
    pub const DEFAULT_RUNS: u32 = 200;
}

/// A parsed `major.minor.patch` solc release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SolcVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl FromStr for SolcVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut next = |label: &str| -> Result<u64, String> {
            parts
                .next()
                .ok_or_else(|| format!("missing {} version component", label))?
                .parse()
                .map_err(|_| format!("invalid {} version component in `{}`", label, s))
        };

        let major = next("major")?;
        let minor = next("minor")?;
        let patch = next("patch")?;

        if parts.next().is_some() {
            return Err(format!("too many version components in `{}`", s));
        }

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for SolcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
