#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn config_error_message() {
    let err = Error::Config {
        message: "missing required field: version".to_string(),
        path: None,
    };
    assert_eq!(
        err.to_string(),
        "config error: missing required field: version"
    );
}

#[test]
fn missing_secret_names_variable_and_network() {
    let err = Error::MissingSecret {
        var: "PRIVATE_KEY".to_string(),
        network: "bsc-testnet".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "secret ${PRIVATE_KEY} is not set (network `bsc-testnet`)"
    );
}

#[test]
fn unknown_network_with_suggestion() {
    let err = Error::UnknownNetwork {
        name: "locl".to_string(),
        suggestion: Some("local".to_string()),
    };
    assert_eq!(
        err.to_string(),
        "unknown network `locl` (did you mean `local`?)"
    );
}

#[test]
fn unknown_network_without_suggestion() {
    let err = Error::UnknownNetwork {
        name: "goerli".to_string(),
        suggestion: None,
    };
    assert_eq!(err.to_string(), "unknown network `goerli`");
}

#[test]
fn exit_codes() {
    let config = Error::Config {
        message: "x".to_string(),
        path: None,
    };
    assert_eq!(ExitCode::from(&config), ExitCode::ConfigError);

    let secret = Error::MissingSecret {
        var: "K".to_string(),
        network: "n".to_string(),
    };
    assert_eq!(ExitCode::from(&secret), ExitCode::CheckFailed);

    let internal = Error::Internal("bug".to_string());
    assert_eq!(ExitCode::from(&internal), ExitCode::InternalError);
}
