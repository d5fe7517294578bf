// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `crucible check` command.

use anyhow::Result;
use termcolor::BufferWriter;

use crucible::cli::{CheckArgs, Cli, OutputFormat};
use crucible::error::ExitCode;
use crucible::output::{json, text};
use crucible::{discovery, secret, validate};

pub fn run(cli: &Cli, args: &CheckArgs) -> Result<ExitCode> {
    let (path, config) = discovery::load_for_cli(cli.config.as_deref())?;
    tracing::debug!(manifest = %path.display(), "checking manifest");

    let mut report = if args.resolve {
        validate::run_with_env(&config, secret::env_lookup)
    } else {
        validate::run(&config)
    };

    if args.strict {
        report.promote_warnings();
    }

    match args.output {
        OutputFormat::Json => {
            let output = json::CheckOutput::from_report(&report);
            json::write_pretty(&mut std::io::stdout(), &output)?;
        }
        OutputFormat::Text => {
            let writer = BufferWriter::stdout(args.color_mode().choice());
            let mut buffer = writer.buffer();
            text::write_report(&mut buffer, &report)?;
            writer.print(&buffer)?;
        }
    }

    if report.passed() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::CheckFailed)
    }
}
