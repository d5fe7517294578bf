#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::path::PathBuf;

use crate::resolve;

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

fn render_report(report: &Report) -> String {
    let mut buffer = termcolor::Buffer::no_color();
    write_report(&mut buffer, report).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}

#[test]
fn passing_report_says_ok() {
    let report = Report::default();
    let out = render_report(&report);
    assert!(out.contains("manifest OK"));
}

#[test]
fn failing_report_lists_findings() {
    let content = r#"
version = 1
default_network = "missing"
"#;
    let config = crate::config::parse(content, &PathBuf::from("crucible.toml")).unwrap();
    let report = crate::validate::run(&config);
    let out = render_report(&report);

    assert!(out.contains("error[default-network]"));
    assert!(out.contains("manifest check failed"));
    assert!(out.contains("`missing`"));
}

#[test]
fn network_list_marks_the_default() {
    let config = sample_config();
    let mut out = Vec::new();
    write_network_list(&mut out, &config).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("testnet"));
    assert!(out.contains("(default)"));
    assert!(out.contains("<simulated>"));
    assert!(out.contains("chain 97"));
    assert!(out.contains("4000000000 wei"));
}

#[test]
fn profile_view_keeps_placeholders() {
    let config = sample_config();
    let profile = config.network("testnet").unwrap();
    let mut out = Vec::new();
    write_profile(&mut out, "testnet", &profile, true).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("(default)"));
    assert!(out.contains("accounts:  1"));
    assert!(out.contains("bsc-testnet.publicnode.com"));
}

#[test]
fn resolved_view_redacts_keys() {
    let config = sample_config();
    let key = "36f1ea3519a6949576c242d927dd0c74650554cdfaedbcd03fb3a80c558c03de";
    let resolved =
        resolve::resolve_network_with(&config, "testnet", |_| Some(key.to_string())).unwrap();

    let mut out = Vec::new();
    write_resolved(&mut out, &resolved).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("chain id:  97"));
    assert!(out.contains("signers:   1"));
    assert!(out.contains("redacted"));
    assert!(!out.contains("36f1"));
}
