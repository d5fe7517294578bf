// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in simulated network and its funded dev accounts.

use super::network::{AccountEntry, FundedAccount, NetworkProfile};

/// Name of the always-available local in-process chain.
pub const SIMULATED_NETWORK: &str = "local";

/// Chain id of the simulated network (the conventional local-dev id).
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// Default gas price on the simulated network: 5 gwei.
pub const LOCAL_GAS_PRICE: u64 = 5_000_000_000;

/// Starting balance for dev accounts, in wei (10^29).
pub const DEV_BALANCE: &str = "100000000000000000000000000000";

/// Well-known throwaway dev keys. Local and ephemeral only; never valid
/// on a public chain.
pub const DEV_ACCOUNTS: &[&str] = &[
    "36f1ea3519a6949576c242d927dd0c74650554cdfaedbcd03fb3a80c558c03de",
    "37235af6356e58fd30610f5b5b3979041e029fccdfce7bf05ee868d3f7c114ec",
    "ddc0dbf76bd1652473690e3e67cad62a42407fa3068a0710b80481be4ef2f3bb",
];

pub(super) fn default_network_name() -> String {
    SIMULATED_NETWORK.to_string()
}

/// The funded dev-account set, used whenever a simulated profile does
/// not declare its own accounts.
pub(super) fn dev_account_entries() -> Vec<AccountEntry> {
    DEV_ACCOUNTS
        .iter()
        .map(|key| {
            AccountEntry::Funded(FundedAccount {
                private_key: (*key).to_string(),
                balance: DEV_BALANCE.to_string(),
            })
        })
        .collect()
}

/// The implicit profile used when `local` is not declared in the manifest.
pub(super) fn builtin_simulated() -> NetworkProfile {
    NetworkProfile {
        url: None,
        chain_id: Some(LOCAL_CHAIN_ID),
        gas_price: Some(LOCAL_GAS_PRICE),
        gas: None,
        accounts: dev_account_entries(),
    }
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
