// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `crucible networks` command.

use anyhow::Result;

use crucible::cli::{Cli, NetworksArgs, OutputFormat};
use crucible::config::suggest_name;
use crucible::error::{Error, ExitCode};
use crucible::output::{json, text};
use crucible::{discovery, resolve};

pub fn run(cli: &Cli, args: &NetworksArgs) -> Result<ExitCode> {
    let (_, config) = discovery::load_for_cli(cli.config.as_deref())?;
    let mut stdout = std::io::stdout();

    match &args.name {
        // One network: resolved against the environment, or the static
        // profile as declared.
        Some(name) => {
            if args.resolve {
                let resolved = resolve::resolve_network(&config, name)?;
                match args.output {
                    OutputFormat::Json => {
                        let output = json::ResolvedOutput::from(&resolved);
                        json::write_pretty(&mut stdout, &output)?;
                    }
                    OutputFormat::Text => text::write_resolved(&mut stdout, &resolved)?,
                }
            } else {
                let profile = config.network(name).ok_or_else(|| Error::UnknownNetwork {
                    name: name.clone(),
                    suggestion: suggest_name(name, &config.network_names()),
                })?;
                let is_default = *name == config.default_network;
                match args.output {
                    OutputFormat::Json => {
                        let output = json::ProfileOutput::new(name, &profile, is_default);
                        json::write_pretty(&mut stdout, &output)?;
                    }
                    OutputFormat::Text => {
                        text::write_profile(&mut stdout, name, &profile, is_default)?;
                    }
                }
            }
        }
        // Full listing
        None => match args.output {
            OutputFormat::Json => {
                let summaries = json::network_summaries(&config);
                json::write_pretty(&mut stdout, &summaries)?;
            }
            OutputFormat::Text => text::write_network_list(&mut stdout, &config)?,
        },
    }

    Ok(ExitCode::Success)
}
