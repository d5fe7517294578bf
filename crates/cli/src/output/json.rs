// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed). Signing keys
//! never appear in any serialized form.

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;

use crate::config::Config;
use crate::resolve::{ResolvedNetwork, Signer};
use crate::validate::{Finding, Report};

/// Top-level `check` output.
#[derive(Debug, Serialize)]
pub struct CheckOutput<'a> {
    pub timestamp: String,
    pub passed: bool,
    pub errors: usize,
    pub warnings: usize,
    pub findings: &'a [Finding],
}

impl<'a> CheckOutput<'a> {
    pub fn from_report(report: &'a Report) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            passed: report.passed(),
            errors: report.error_count(),
            warnings: report.warning_count(),
            findings: &report.findings,
        }
    }
}

/// One row of the `networks` listing.
#[derive(Debug, Serialize)]
pub struct NetworkSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,
    pub simulated: bool,
    pub default: bool,
}

/// Build listing rows from the manifest.
pub fn network_summaries(config: &Config) -> Vec<NetworkSummary> {
    config
        .network_names()
        .into_iter()
        .filter_map(|name| {
            let profile = config.network(&name)?;
            Some(NetworkSummary {
                simulated: profile.is_simulated(),
                default: name == config.default_network,
                chain_id: profile.chain_id,
                url: profile.url,
                gas_price: profile.gas_price,
                name,
            })
        })
        .collect()
}

/// One network profile as declared, placeholders intact.
#[derive(Debug, Serialize)]
pub struct ProfileOutput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
    pub simulated: bool,
    pub default: bool,
    pub accounts: usize,
}

impl ProfileOutput {
    pub fn new(name: &str, profile: &crate::config::NetworkProfile, is_default: bool) -> Self {
        Self {
            name: name.to_string(),
            chain_id: profile.chain_id,
            url: profile.url.clone(),
            gas_price: profile.gas_price,
            gas: profile.gas,
            simulated: profile.is_simulated(),
            default: is_default,
            accounts: profile.accounts.len(),
        }
    }
}

/// Serialized view of a resolved network. Signers are reduced to a
/// count; key bytes are unrepresentable here by construction.
#[derive(Debug, Serialize)]
pub struct ResolvedOutput {
    pub name: String,
    pub chain_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
    pub simulated: bool,
    pub signers: usize,
    pub funded_signers: usize,
}

impl From<&ResolvedNetwork> for ResolvedOutput {
    fn from(network: &ResolvedNetwork) -> Self {
        let funded = network
            .signers
            .iter()
            .filter(|s| matches!(s, Signer::Funded { .. }))
            .count();
        Self {
            name: network.name.clone(),
            chain_id: network.chain_id,
            url: network.url.clone(),
            gas_price: network.gas_price,
            gas: network.gas,
            simulated: network.is_simulated(),
            signers: network.signers.len(),
            funded_signers: funded,
        }
    }
}

/// Write any serializable value as pretty JSON with a trailing newline.
pub fn write_pretty<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{}", rendered)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
