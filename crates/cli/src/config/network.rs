// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Network profile schema.

use serde::Deserialize;

use crate::secret;

/// A `[networks.<name>]` entry.
///
/// A profile without a `url` is the built-in simulated chain; everything
/// else is a real endpoint and must carry a `chain_id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkProfile {
    /// RPC endpoint. May contain `${VAR}` placeholders (API keys).
    #[serde(default)]
    pub url: Option<String>,

    /// Numeric chain identifier; prevents cross-network replay.
    #[serde(default)]
    pub chain_id: Option<u64>,

    /// Default gas price in wei.
    #[serde(default)]
    pub gas_price: Option<u64>,

    /// Gas limit per transaction.
    #[serde(default)]
    pub gas: Option<u64>,

    /// Signing credentials.
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
}

impl NetworkProfile {
    /// True for the local in-process chain (no endpoint).
    pub fn is_simulated(&self) -> bool {
        self.url.is_none()
    }
}

/// One entry in a network's `accounts` list.
///
/// Public networks use key reference strings (`"0x${PRIVATE_KEY}"`);
/// the simulated network funds accounts with credential/balance pairs.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AccountEntry {
    /// Ephemeral local account: raw key plus starting balance.
    Funded(FundedAccount),

    /// A key string: env placeholder or (local only) a literal hex key.
    Reference(String),
}

impl AccountEntry {
    /// True when the entry embeds key material directly, with no
    /// environment indirection.
    pub fn is_literal(&self) -> bool {
        match self {
            AccountEntry::Funded(_) => true,
            AccountEntry::Reference(s) => match secret::placeholders(s) {
                Ok(vars) => vars.is_empty(),
                // Malformed syntax is reported separately by validation.
                Err(_) => false,
            },
        }
    }
}

/// Credential/balance pair for the simulated network.
#[derive(Debug, Clone, Deserialize)]
pub struct FundedAccount {
    /// Raw 64-hex private key. Safe only because the chain is ephemeral
    /// and local.
    pub private_key: String,

    /// Starting balance in wei, as a decimal string (values exceed u64).
    pub balance: String,
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
