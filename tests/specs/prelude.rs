//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::Path;
use std::process::Command;

/// Returns a Command configured to run the crucible binary.
///
/// The environment is scrubbed of variables the manifest under test
/// might reference, so a developer's shell can't flip test outcomes.
pub fn crucible_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crucible"));
    cmd.env_remove("PRIVATE_KEY")
        .env_remove("INFURA_KEY")
        .env_remove("CRUCIBLE_CONFIG")
        .env_remove("CRUCIBLE_LOG");
    cmd
}

/// A throwaway dev key, valid hex but meaningless.
pub const DEV_KEY: &str = "36f1ea3519a6949576c242d927dd0c74650554cdfaedbcd03fb3a80c558c03de";

/// Write a manifest into `dir` and return its path.
pub fn write_manifest(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("crucible.toml");
    std::fs::write(&path, content).unwrap();
    path
}

/// A minimal manifest with one consistent public network.
pub fn consistent_manifest() -> &'static str {
    r#"
version = 1

[[solc]]
version = "0.8.24"
optimizer = { enabled = true, runs = 0 }

default_network = "bsc-testnet"

[networks.bsc-testnet]
url = "https://bsc-testnet.publicnode.com"
chain_id = 97
gas_price = 4000000000
accounts = ["0x${PRIVATE_KEY}"]
"#
}
