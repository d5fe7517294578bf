// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `crucible init` command.

use anyhow::Result;

use crucible::cli::InitArgs;
use crucible::error::ExitCode;
use crucible::init::{self, NetworkPreset};

/// Run the `init` command to create a crucible.toml manifest.
pub fn run(args: &InitArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join("crucible.toml");

    if config_path.exists() && !args.force {
        eprintln!("crucible.toml already exists. Use --force to overwrite.");
        return Ok(ExitCode::ConfigError);
    }

    let mut selected: Vec<&'static NetworkPreset> = Vec::new();
    for name in &args.with_networks {
        match init::preset(name) {
            Some(preset) => selected.push(preset),
            None => {
                if let Some(suggestion) = init::suggest_preset(name) {
                    eprintln!(
                        "crucible: warning: unknown network preset '{}', did you mean '{}'?",
                        name, suggestion
                    );
                } else {
                    eprintln!(
                        "crucible: warning: unknown network preset '{}', skipping",
                        name
                    );
                }
            }
        }
    }

    // An empty selection after filtering would fall back to every
    // preset, which is not what a typo deserves.
    if !args.with_networks.is_empty() && selected.is_empty() {
        eprintln!("crucible: no recognized network presets in --with");
        return Ok(ExitCode::ConfigError);
    }

    let manifest = init::template(&selected);
    std::fs::write(&config_path, manifest)?;

    let message = if args.with_networks.is_empty() {
        "Created crucible.toml".to_string()
    } else {
        let names: Vec<&str> = selected.iter().map(|p| p.name).collect();
        format!("Created crucible.toml with network(s): {}", names.join(", "))
    };
    println!("{}", message);

    Ok(ExitCode::Success)
}
