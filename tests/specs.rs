//! Behavioral specifications for the crucible CLI.
//!
//! These tests are black-box: they invoke the binary and verify stdout,
//! stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

use prelude::*;

// =============================================================================
// COMMAND SURFACE
// =============================================================================

#[test]
fn bare_invocation_shows_help() {
    crucible_cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"));
}

#[test]
fn help_exits_successfully() {
    crucible_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("crucible"));
}

#[test]
fn version_exits_successfully() {
    crucible_cmd().arg("--version").assert().success();
}

#[test]
fn completions_generate_for_bash() {
    crucible_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicates::str::contains("crucible"));
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn check_passes_on_consistent_manifest() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("manifest OK"));
}

#[test]
fn check_without_manifest_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    // .git stops discovery from walking above the tempdir
    std::fs::create_dir(dir.path().join(".git")).unwrap();

    crucible_cmd()
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no crucible.toml found"));
}

#[test]
fn check_fails_on_chain_id_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(
        dir.path(),
        r#"
version = 1

[[solc]]
version = "0.8.24"

[networks.testnet]
url = "https://bsc-testnet.publicnode.com"
chain_id = 56
gas_price = 4000000000
accounts = ["0x${PRIVATE_KEY}"]
"#,
    );

    crucible_cmd()
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("chain-id"))
        .stdout(predicates::str::contains("manifest check failed"));
}

#[test]
fn check_fails_on_literal_public_key() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = format!(
        r#"
version = 1

[[solc]]
version = "0.8.24"

[networks.mainnet]
url = "https://ethereum.publicnode.com"
chain_id = 1
gas_price = 35000000000
accounts = ["0x{}"]
"#,
        DEV_KEY
    );
    write_manifest(dir.path(), &manifest);

    crucible_cmd()
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("literal-secret"));
}

#[test]
fn check_emits_json() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .args(["check", "--output", "json"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("\"passed\": true"));
}

#[test]
fn check_resolve_fails_fast_on_unset_secret() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .args(["check", "--resolve"])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("PRIVATE_KEY"));
}

#[test]
fn check_resolve_passes_when_secret_is_set() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .args(["check", "--resolve"])
        .env("PRIVATE_KEY", DEV_KEY)
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn check_strict_promotes_warnings() {
    let dir = tempfile::tempdir().unwrap();
    // No compiler profiles: a warning in normal mode
    write_manifest(dir.path(), "version = 1\n");

    crucible_cmd()
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .success();

    crucible_cmd()
        .args(["check", "--strict"])
        .current_dir(dir.path())
        .assert()
        .code(1);
}

#[test]
fn check_warns_about_unknown_manifest_keys() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "version = 1\nmystery_knob = true\n");

    crucible_cmd()
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `mystery_knob`"));
}

#[test]
fn check_suggests_a_close_match_for_misspelled_keys() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "version = 1\nnetwork = 97\n");

    crucible_cmd()
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("did you mean `networks`?"));
}

#[test]
fn explicit_config_flag_overrides_discovery() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("elsewhere.toml");
    std::fs::write(&path, consistent_manifest()).unwrap();

    crucible_cmd()
        .args(["check", "-C"])
        .arg(&path)
        .assert()
        .success();
}

// =============================================================================
// NETWORKS
// =============================================================================

#[test]
fn networks_lists_declared_and_builtin() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .arg("networks")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("bsc-testnet"))
        .stdout(predicates::str::contains("(default)"))
        .stdout(predicates::str::contains("local"));
}

#[test]
fn networks_shows_one_profile() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .args(["networks", "bsc-testnet"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("chain id:  97"));
}

#[test]
fn networks_suggests_on_typo() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .args(["networks", "bsc-tesnet"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("did you mean `bsc-testnet`?"));
}

#[test]
fn networks_resolve_fails_fast_without_secret() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .args(["networks", "bsc-testnet", "--resolve"])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("secret ${PRIVATE_KEY} is not set"));
}

#[test]
fn networks_resolve_redacts_key_material() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .args(["networks", "bsc-testnet", "--resolve"])
        .env("PRIVATE_KEY", DEV_KEY)
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("redacted"))
        .stdout(predicates::str::contains("36f1").not());
}

#[test]
fn networks_resolve_local_uses_builtin_accounts() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "version = 1\n");

    crucible_cmd()
        .args(["networks", "local", "--resolve"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("chain id:  31337"))
        .stdout(predicates::str::contains("signers:   3"));
}

#[test]
fn networks_resolve_without_a_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .args(["networks", "--resolve"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("NAME"));
}

#[test]
fn networks_emits_json() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), consistent_manifest());

    crucible_cmd()
        .args(["networks", "--output", "json"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("\"chain_id\": 97"));
}

// =============================================================================
// INIT
// =============================================================================

#[test]
fn init_creates_a_manifest_that_validates() {
    let dir = tempfile::tempdir().unwrap();

    crucible_cmd()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Created crucible.toml"));

    crucible_cmd()
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("manifest OK"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "version = 1\n");

    crucible_cmd()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("--force"));
}

#[test]
fn init_with_selects_presets() {
    let dir = tempfile::tempdir().unwrap();

    crucible_cmd()
        .args(["init", "--with", "bsc-testnet"])
        .current_dir(dir.path())
        .assert()
        .success();

    let manifest = std::fs::read_to_string(dir.path().join("crucible.toml")).unwrap();
    assert!(manifest.contains("[networks.bsc-testnet]"));
    assert!(!manifest.contains("[networks.eth-mainnet]"));
}

#[test]
fn init_rejects_a_selection_of_only_unknown_presets() {
    let dir = tempfile::tempdir().unwrap();

    crucible_cmd()
        .args(["init", "--with", "bsc-tesnet"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("did you mean 'bsc-testnet'?"));

    assert!(!dir.path().join("crucible.toml").exists());
}

#[test]
fn init_skips_unknown_presets_but_keeps_known_ones() {
    let dir = tempfile::tempdir().unwrap();

    crucible_cmd()
        .args(["init", "--with", "bsc-testnet,goerli"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown network preset 'goerli'"));

    let manifest = std::fs::read_to_string(dir.path().join("crucible.toml")).unwrap();
    assert!(manifest.contains("[networks.bsc-testnet]"));
}
