// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Network resolution: turning a declared profile into connection
//! parameters a consuming tool can use.
//!
//! Resolution is the only point where environment variables are read,
//! and it fails fast: an unset secret is an immediate, named error here
//! rather than an invalid credential that surfaces as a signing failure
//! inside some other tool.

use crate::config::{
    AccountEntry, Config, LOCAL_CHAIN_ID, LOCAL_GAS_PRICE, NetworkProfile, suggest_name,
};
use crate::error::{Error, Result};
use crate::secret::{self, ExpandError, PrivateKey};

/// A signing credential after resolution.
#[derive(Debug, Clone)]
pub enum Signer {
    /// A key ready for use.
    Key(PrivateKey),

    /// A key plus starting balance (simulated network only).
    Funded { key: PrivateKey, balance: String },
}

/// A network profile with every indirection resolved.
#[derive(Debug, Clone)]
pub struct ResolvedNetwork {
    pub name: String,

    /// Expanded endpoint; None for the simulated network.
    pub url: Option<String>,

    pub chain_id: u64,
    pub gas_price: Option<u64>,
    pub gas: Option<u64>,
    pub signers: Vec<Signer>,
}

impl ResolvedNetwork {
    pub fn is_simulated(&self) -> bool {
        self.url.is_none()
    }
}

/// Resolve `name` against the manifest using the process environment.
pub fn resolve_network(config: &Config, name: &str) -> Result<ResolvedNetwork> {
    resolve_network_with(config, name, secret::env_lookup)
}

/// Resolve `name` with an injected environment lookup.
pub fn resolve_network_with<F>(config: &Config, name: &str, lookup: F) -> Result<ResolvedNetwork>
where
    F: Fn(&str) -> Option<String>,
{
    let profile = config.network(name).ok_or_else(|| Error::UnknownNetwork {
        name: name.to_string(),
        suggestion: suggest_name(name, &config.network_names()),
    })?;

    tracing::debug!(network = name, simulated = profile.is_simulated(), "resolving network");

    let url = match &profile.url {
        Some(raw) => Some(expand_field(raw, &lookup, name)?),
        None => None,
    };

    let chain_id = match profile.chain_id {
        Some(id) => id,
        None if profile.is_simulated() => LOCAL_CHAIN_ID,
        None => {
            return Err(Error::Config {
                message: format!("network `{}` has a url but no chain_id", name),
                path: None,
            });
        }
    };

    let gas_price = profile.gas_price.or_else(|| {
        profile.is_simulated().then_some(LOCAL_GAS_PRICE)
    });

    let signers = resolve_signers(&profile, &lookup, name)?;

    Ok(ResolvedNetwork {
        name: name.to_string(),
        url,
        chain_id,
        gas_price,
        gas: profile.gas,
        signers,
    })
}

fn resolve_signers<F>(profile: &NetworkProfile, lookup: &F, network: &str) -> Result<Vec<Signer>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut signers = Vec::with_capacity(profile.accounts.len());

    for entry in &profile.accounts {
        match entry {
            AccountEntry::Funded(account) => {
                let key =
                    PrivateKey::from_hex(&account.private_key).map_err(|reason| {
                        Error::InvalidKey {
                            network: network.to_string(),
                            reason,
                        }
                    })?;
                signers.push(Signer::Funded {
                    key,
                    balance: account.balance.clone(),
                });
            }
            AccountEntry::Reference(raw) => {
                let expanded = expand_field(raw, lookup, network)?;
                let key = PrivateKey::from_hex(&expanded).map_err(|reason| Error::InvalidKey {
                    network: network.to_string(),
                    reason,
                })?;
                signers.push(Signer::Key(key));
            }
        }
    }

    Ok(signers)
}

fn expand_field<F>(raw: &str, lookup: &F, network: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    secret::expand(raw, lookup).map_err(|e| match e {
        ExpandError::Missing(var) => Error::MissingSecret {
            var,
            network: network.to_string(),
        },
        ExpandError::Syntax(syntax) => Error::Config {
            message: format!("network `{}`: {}", network, syntax),
            path: None,
        },
    })
}

/// Resolve the manifest's default network.
pub fn resolve_default(config: &Config) -> Result<ResolvedNetwork> {
    resolve_network(config, &config.default_network)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
