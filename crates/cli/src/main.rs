// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Crucible CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use crucible::cli::{Cli, Command};
use crucible::error::ExitCode;

mod cmd_check;
mod cmd_init;
mod cmd_networks;

fn init_logging() {
    let filter = EnvFilter::try_from_env("CRUCIBLE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    // Same behavior as the toolchains this manifest format comes from:
    // a .env file in the project feeds the process environment.
    dotenv::dotenv().ok();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("crucible: {}", e);
            match e.downcast_ref::<crucible::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Check(args)) => cmd_check::run(&cli, args),
        Some(Command::Networks(args)) => cmd_networks::run(&cli, args),
        Some(Command::Init(args)) => cmd_init::run(args),
        Some(Command::Completions(args)) => {
            crucible::completions::generate(args.shell);
            Ok(ExitCode::Success)
        }
    }
}
