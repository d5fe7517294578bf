// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Loader and consistency checker for contract-project manifests
#[derive(Parser)]
#[command(name = "crucible")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific manifest file
    #[arg(short = 'C', long = "config", global = true, env = "CRUCIBLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the manifest's consistency properties
    Check(CheckArgs),
    /// List declared networks, or resolve one
    Networks(NetworksArgs),
    /// Initialize a crucible.toml manifest
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Also require every referenced environment variable to be set
    #[arg(long)]
    pub resolve: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl CheckArgs {
    /// Color mode from the --color/--no-color pair.
    pub fn color_mode(&self) -> crate::color::ColorMode {
        if self.no_color {
            crate::color::ColorMode::Never
        } else if self.color {
            crate::color::ColorMode::Always
        } else {
            crate::color::ColorMode::Auto
        }
    }
}

#[derive(clap::Args)]
pub struct NetworksArgs {
    /// Network to show (all networks when omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Expand environment placeholders (fails fast on unset variables)
    #[arg(long, requires = "name")]
    pub resolve: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing manifest
    #[arg(long)]
    pub force: bool,

    /// Network preset(s) to include (e.g. bsc-testnet, arb-sepolia)
    #[arg(long = "with", value_delimiter = ',')]
    pub with_networks: Vec<String>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
