#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::path::PathBuf;

use crate::resolve;
use crate::validate;

fn sample_config() -> Config {
    let content = r#"
version = 1

default_network = "testnet"

[networks.testnet]
url = "https://bsc-testnet.publicnode.com"
chain_id = 97
gas_price = 4000000000
accounts = ["0x${PRIVATE_KEY}"]
"#;
    crate::config::parse(content, &PathBuf::from("crucible.toml")).unwrap()
}

fn to_value<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap()
}

#[test]
fn check_output_shape() {
    let config = sample_config();
    let report = validate::run(&config);
    let output = CheckOutput::from_report(&report);
    let value = to_value(&output);

    assert_eq!(value["passed"], true);
    assert!(value["timestamp"].is_string());
    assert!(value["findings"].is_array());
    assert_eq!(value["errors"], 0);
}

#[test]
fn findings_serialize_with_kind_and_severity() {
    let content = r#"
version = 1
default_network = "missing"
"#;
    let config = crate::config::parse(content, &PathBuf::from("crucible.toml")).unwrap();
    let report = validate::run(&config);
    let output = CheckOutput::from_report(&report);
    let value = to_value(&output);

    let findings = value["findings"].as_array().unwrap();
    let default_finding = findings
        .iter()
        .find(|f| f["kind"] == "default-network")
        .unwrap();
    assert_eq!(default_finding["severity"], "error");
}

#[test]
fn network_summaries_cover_implicit_local() {
    let config = sample_config();
    let summaries = network_summaries(&config);
    let value = to_value(&summaries);

    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let local = rows.iter().find(|r| r["name"] == "local").unwrap();
    assert_eq!(local["simulated"], true);
    assert_eq!(local["default"], false);

    let testnet = rows.iter().find(|r| r["name"] == "testnet").unwrap();
    assert_eq!(testnet["chain_id"], 97);
    assert_eq!(testnet["default"], true);
}

#[test]
fn resolved_output_never_contains_key_material() {
    let config = sample_config();
    let key = "36f1ea3519a6949576c242d927dd0c74650554cdfaedbcd03fb3a80c558c03de";
    let resolved =
        resolve::resolve_network_with(&config, "testnet", |_| Some(key.to_string())).unwrap();

    let output = ResolvedOutput::from(&resolved);
    let rendered = serde_json::to_string(&output).unwrap();

    assert!(!rendered.contains("36f1"));
    assert!(rendered.contains("\"signers\":1"));
}

#[test]
fn profile_output_keeps_placeholders() {
    let config = sample_config();
    let profile = config.network("testnet").unwrap();
    let output = ProfileOutput::new("testnet", &profile, true);
    let value = to_value(&output);

    assert_eq!(value["accounts"], 1);
    assert_eq!(value["default"], true);
    assert_eq!(value["url"], "https://bsc-testnet.publicnode.com");
}

#[test]
fn write_pretty_appends_newline() {
    let mut out = Vec::new();
    write_pretty(&mut out, &serde_json::json!({ "ok": true })).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.ends_with('\n'));
}
