// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static consistency checks over a parsed manifest.
//!
//! The manifest is inert data, so every property here is checkable
//! without touching the network: chain ids against the registry,
//! credential indirection, compiler profile sanity, and (opt-in) the
//! presence of every referenced environment variable.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::{AccountEntry, Config, NetworkProfile, SIMULATED_NETWORK};
use crate::registry;
use crate::secret;

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// The consistency rule a finding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    /// `default_network` names an undeclared network.
    DefaultNetwork,
    /// Declared chain id contradicts the endpoint, or is missing.
    ChainId,
    /// Key material embedded literally on a public network.
    LiteralSecret,
    /// Malformed `${VAR}` placeholder.
    SecretSyntax,
    /// Compiler profile problems.
    Compiler,
    /// Referenced environment variable is unset.
    Env,
    /// Suspicious gas parameters.
    Gas,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FindingKind::DefaultNetwork => "default-network",
            FindingKind::ChainId => "chain-id",
            FindingKind::LiteralSecret => "literal-secret",
            FindingKind::SecretSyntax => "secret-syntax",
            FindingKind::Compiler => "compiler",
            FindingKind::Env => "env",
            FindingKind::Gas => "gas",
        };
        f.write_str(name)
    }
}

/// One validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Network the finding concerns (None for manifest-wide findings).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    pub kind: FindingKind,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            network: None,
            kind,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            network: None,
            kind,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn on(mut self, network: &str) -> Self {
        self.network = Some(network.to_string());
        self
    }
}

/// Outcome of a validation pass.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    /// True when no error-severity findings exist.
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Promote every warning to an error (`--strict`).
    pub fn promote_warnings(&mut self) {
        for finding in &mut self.findings {
            finding.severity = Severity::Error;
        }
    }

    fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}

/// Run the static checks.
pub fn run(config: &Config) -> Report {
    let mut report = Report::default();

    check_default_network(config, &mut report);
    check_compilers(config, &mut report);
    for (name, profile) in &config.networks {
        check_network(name, profile, &mut report);
    }

    report
}

/// Run the static checks plus the environment presence pass.
pub fn run_with_env<F>(config: &Config, lookup: F) -> Report
where
    F: Fn(&str) -> Option<String>,
{
    let mut report = run(config);

    for (name, profile) in &config.networks {
        for var in referenced_vars(profile) {
            if lookup(&var).is_none() {
                report.push(
                    Finding::error(
                        FindingKind::Env,
                        format!("environment variable `{}` is not set", var),
                    )
                    .on(name),
                );
            }
        }
    }

    report
}

/// Every `${VAR}` the profile references, deduplicated.
fn referenced_vars(profile: &NetworkProfile) -> Vec<String> {
    let mut vars = BTreeSet::new();

    if let Some(url) = &profile.url
        && let Ok(found) = secret::placeholders(url)
    {
        vars.extend(found.iter().map(|v| v.to_string()));
    }
    for entry in &profile.accounts {
        if let AccountEntry::Reference(s) = entry
            && let Ok(found) = secret::placeholders(s)
        {
            vars.extend(found.iter().map(|v| v.to_string()));
        }
    }

    vars.into_iter().collect()
}

fn check_default_network(config: &Config, report: &mut Report) {
    let name = &config.default_network;
    if name != SIMULATED_NETWORK && !config.networks.contains_key(name) {
        report.push(Finding::error(
            FindingKind::DefaultNetwork,
            format!("default network `{}` is not declared", name),
        ));
    }
}

fn check_compilers(config: &Config, report: &mut Report) {
    if config.compilers.is_empty() {
        report.push(Finding::warning(
            FindingKind::Compiler,
            "no compiler profiles declared",
        ));
        return;
    }

    let mut seen = BTreeSet::new();
    for profile in &config.compilers {
        match profile.solc_version() {
            Some(version) => {
                if !seen.insert(version) {
                    report.push(Finding::warning(
                        FindingKind::Compiler,
                        format!("duplicate compiler profile for {}", version),
                    ));
                }
                if version.major != 0 {
                    report.push(Finding::error(
                        FindingKind::Compiler,
                        format!("no solc release {} exists", version),
                    ));
                }
            }
            None => {
                report.push(Finding::error(
                    FindingKind::Compiler,
                    format!("invalid compiler version `{}`", profile.version),
                ));
            }
        }

        if !profile.optimizer.enabled && profile.optimizer.runs.is_some() {
            report.push(Finding::warning(
                FindingKind::Compiler,
                format!(
                    "solc {}: optimizer runs set but optimizer is disabled",
                    profile.version
                ),
            ));
        }
    }
}

fn check_network(name: &str, profile: &NetworkProfile, report: &mut Report) {
    if profile.is_simulated() {
        // Local chain: literal keys and funded accounts are its purpose.
        check_account_syntax(name, profile, report);
        return;
    }

    // Endpoint placeholder syntax
    if let Some(url) = &profile.url
        && let Err(e) = secret::placeholders(url)
    {
        report.push(
            Finding::error(FindingKind::SecretSyntax, format!("url: {}", e)).on(name),
        );
    }

    check_chain_id(name, profile, report);
    check_account_syntax(name, profile, report);
    check_credential_indirection(name, profile, report);

    if profile.gas_price == Some(0) {
        report.push(
            Finding::warning(
                FindingKind::Gas,
                "gas_price of 0 will be rejected by public nodes",
            )
            .on(name),
        );
    }
}

fn check_chain_id(name: &str, profile: &NetworkProfile, report: &mut Report) {
    let Some(url) = &profile.url else {
        return;
    };

    let Some(declared) = profile.chain_id else {
        report.push(
            Finding::error(
                FindingKind::ChainId,
                "network has a url but no chain_id; signed transactions would be replayable",
            )
            .on(name),
        );
        return;
    };

    // Cross-check against the registry; unknown hosts skip the check.
    if let Some(inferred) = registry::infer_from_url(url)
        && inferred.chain_id != declared
    {
        report.push(
            Finding::error(
                FindingKind::ChainId,
                format!(
                    "chain_id {} does not match endpoint ({} is chain {})",
                    declared, inferred.name, inferred.chain_id
                ),
            )
            .on(name),
        );
    }
}

fn check_account_syntax(name: &str, profile: &NetworkProfile, report: &mut Report) {
    for (i, entry) in profile.accounts.iter().enumerate() {
        let AccountEntry::Reference(s) = entry else {
            continue;
        };
        match secret::placeholders(s) {
            Err(e) => {
                report.push(
                    Finding::error(
                        FindingKind::SecretSyntax,
                        format!("accounts[{}]: {}", i, e),
                    )
                    .on(name),
                );
            }
            Ok(vars) => {
                // A reference with no placeholder must itself be a key.
                if vars.is_empty() && !secret::looks_like_literal_key(s) {
                    report.push(
                        Finding::error(
                            FindingKind::SecretSyntax,
                            format!(
                                "accounts[{}] is neither a `${{VAR}}` reference nor a hex key",
                                i
                            ),
                        )
                        .on(name),
                    );
                }
            }
        }
    }
}

fn check_credential_indirection(name: &str, profile: &NetworkProfile, report: &mut Report) {
    for (i, entry) in profile.accounts.iter().enumerate() {
        match entry {
            AccountEntry::Funded(_) => {
                report.push(
                    Finding::error(
                        FindingKind::LiteralSecret,
                        format!(
                            "accounts[{}]: funded accounts are only valid on the simulated network",
                            i
                        ),
                    )
                    .on(name),
                );
            }
            AccountEntry::Reference(s) => {
                if entry.is_literal() && secret::looks_like_literal_key(s) {
                    report.push(
                        Finding::error(
                            FindingKind::LiteralSecret,
                            format!(
                                "accounts[{}] embeds a literal private key; use `${{VAR}}` indirection",
                                i
                            ),
                        )
                        .on(name),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
