// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Known chain registry.
//!
//! Maps chain ids to names and endpoint hostname hints, used to catch a
//! declared `chain_id` that contradicts the endpoint it points at. The
//! table is deliberately small: only chains a manifest in this family
//! plausibly targets. Unknown hosts are never an error, they just skip
//! the cross-check.

use url::Url;

/// A known chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub name: &'static str,
    pub chain_id: u64,
    /// Substrings of the endpoint host (and leading path) that identify
    /// this chain. Longest match wins, so `bsc-testnet` beats `bsc`.
    hints: &'static [&'static str],
}

/// Chains this tool knows about.
pub const KNOWN_CHAINS: &[ChainInfo] = &[
    ChainInfo {
        name: "ethereum-mainnet",
        chain_id: 1,
        hints: &["ethereum", "eth-mainnet", "mainnet.infura"],
    },
    ChainInfo {
        name: "bsc-mainnet",
        chain_id: 56,
        hints: &["bsc", "bnb"],
    },
    ChainInfo {
        name: "bsc-testnet",
        chain_id: 97,
        hints: &["bsc-testnet", "bsc-chapel", "chapel"],
    },
    ChainInfo {
        name: "arbitrum-one",
        chain_id: 42161,
        hints: &["arbitrum", "arb-mainnet", "arbitrum-mainnet", "arb1"],
    },
    ChainInfo {
        name: "arbitrum-sepolia",
        chain_id: 421614,
        hints: &["arbitrum-sepolia", "arb-sepolia"],
    },
    ChainInfo {
        name: "local",
        chain_id: 31337,
        hints: &["localhost", "127.0.0.1"],
    },
];

/// Look up a chain by id.
pub fn by_chain_id(chain_id: u64) -> Option<&'static ChainInfo> {
    KNOWN_CHAINS.iter().find(|c| c.chain_id == chain_id)
}

/// Infer the chain an endpoint addresses from its host and path.
///
/// `${VAR}` placeholders are left in place; they only ever appear in
/// path segments (API keys), not in the parts the hints match on.
pub fn infer_from_url(endpoint: &str) -> Option<&'static ChainInfo> {
    let haystack = match Url::parse(endpoint) {
        Ok(url) => {
            let host = url.host_str().unwrap_or_default().to_lowercase();
            let path = url.path().to_lowercase();
            format!("{}{}", host, path)
        }
        // Not parseable (placeholder in the host, say): match raw text.
        Err(_) => endpoint.to_lowercase(),
    };

    let mut best: Option<(&'static ChainInfo, usize)> = None;
    for chain in KNOWN_CHAINS {
        for hint in chain.hints {
            if haystack.contains(hint) {
                let better = match best {
                    Some((_, len)) => hint.len() > len,
                    None => true,
                };
                if better {
                    best = Some((chain, hint.len()));
                }
            }
        }
    }

    best.map(|(chain, _)| chain)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
