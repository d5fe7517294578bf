// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest scaffolding for `crucible init`.

use crate::config::{DEV_ACCOUNTS, LOCAL_GAS_PRICE, suggest_name};

/// A network preset: name plus its manifest section.
pub struct NetworkPreset {
    pub name: &'static str,
    section: &'static str,
}

/// Presets for `init --with`.
pub const NETWORK_PRESETS: &[NetworkPreset] = &[
    NetworkPreset {
        name: "bsc-testnet",
        section: r#"[networks.bsc-testnet]
url = "https://bsc-testnet.publicnode.com"
chain_id = 97
gas_price = 4000000000
gas = 20000000
accounts = ["0x${PRIVATE_KEY}"]
"#,
    },
    NetworkPreset {
        name: "bsc-mainnet",
        section: r#"[networks.bsc-mainnet]
url = "https://bsc.publicnode.com"
chain_id = 56
gas_price = 3000000000
accounts = ["0x${PRIVATE_KEY}"]
"#,
    },
    NetworkPreset {
        name: "eth-mainnet",
        section: r#"[networks.eth-mainnet]
url = "https://ethereum.publicnode.com"
chain_id = 1
gas_price = 35000000000
gas = 10000000
accounts = ["0x${PRIVATE_KEY}"]
"#,
    },
    NetworkPreset {
        name: "arb-sepolia",
        section: r#"[networks.arb-sepolia]
url = "https://arbitrum-sepolia.blockpi.network/v1/rpc/public"
chain_id = 421614
gas_price = 300000000
gas = 20000000
accounts = ["0x${PRIVATE_KEY}"]
"#,
    },
    NetworkPreset {
        name: "arb-mainnet",
        section: r#"[networks.arb-mainnet]
url = "https://arbitrum-mainnet.infura.io/v3/${INFURA_KEY}"
chain_id = 42161
gas_price = 200000000
gas = 20000000
accounts = ["0x${PRIVATE_KEY}"]
"#,
    },
];

/// Look up a preset by name.
pub fn preset(name: &str) -> Option<&'static NetworkPreset> {
    NETWORK_PRESETS.iter().find(|p| p.name == name)
}

/// Suggest a preset name for a typo.
pub fn suggest_preset(unknown: &str) -> Option<String> {
    let names: Vec<String> = NETWORK_PRESETS
        .iter()
        .map(|p| p.name.to_string())
        .collect();
    suggest_name(unknown, &names)
}

/// Build a manifest with the given network presets.
///
/// An empty selection means all presets. The local simulated network is
/// always included, and its dev keys are written out explicitly so the
/// file documents what `local` funds.
pub fn template(with: &[&'static NetworkPreset]) -> String {
    let selected: Vec<&NetworkPreset> = if with.is_empty() {
        NETWORK_PRESETS.iter().collect()
    } else {
        with.to_vec()
    };

    let default_network = selected
        .iter()
        .find(|p| p.name == "arb-sepolia")
        .or_else(|| selected.first())
        .map(|p| p.name)
        .unwrap_or("local");

    let mut out = String::new();
    out.push_str("version = 1\n\n");
    out.push_str("[paths]\n");
    out.push_str("sources = \"contracts\"\n");
    out.push_str("tests = \"test\"\n");
    out.push_str("artifacts = \"build/artifacts\"\n");
    out.push_str("cache = \"build/cache\"\n\n");
    out.push_str("[[solc]]\nversion = \"0.8.4\"\noptimizer = { enabled = true, runs = 0 }\n\n");
    out.push_str("[[solc]]\nversion = \"0.8.24\"\noptimizer = { enabled = true, runs = 0 }\n\n");
    out.push_str(&format!("default_network = \"{}\"\n\n", default_network));

    out.push_str(&format!(
        "[networks.local]\ngas_price = {}\naccounts = [\n",
        LOCAL_GAS_PRICE
    ));
    for key in DEV_ACCOUNTS {
        out.push_str(&format!(
            "  {{ private_key = \"{}\", balance = \"100000000000000000000000000000\" }},\n",
            key
        ));
    }
    out.push_str("]\n");

    for preset in &selected {
        out.push('\n');
        out.push_str(preset.section);
    }

    out
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
