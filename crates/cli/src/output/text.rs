// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::color::scheme;
use crate::config::Config;
use crate::resolve::{ResolvedNetwork, Signer};
use crate::validate::{Report, Severity};

/// Write validation findings and a summary line.
pub fn write_report<W: WriteColor>(w: &mut W, report: &Report) -> io::Result<()> {
    for finding in &report.findings {
        let spec = match finding.severity {
            Severity::Error => scheme::fail(),
            Severity::Warning => scheme::warn(),
        };
        w.set_color(&spec)?;
        write!(w, "{}", finding.severity)?;
        w.reset()?;

        write!(w, "[{}]", finding.kind)?;
        if let Some(network) = &finding.network {
            write!(w, " network `{}`:", network)?;
        }
        writeln!(w, " {}", finding.message)?;
    }

    if !report.findings.is_empty() {
        writeln!(w)?;
    }

    if report.passed() {
        w.set_color(&scheme::pass())?;
        write!(w, "manifest OK")?;
        w.reset()?;
        if report.warning_count() > 0 {
            write!(w, " ({} warning(s))", report.warning_count())?;
        }
        writeln!(w)?;
    } else {
        w.set_color(&scheme::fail())?;
        write!(w, "manifest check failed")?;
        w.reset()?;
        writeln!(
            w,
            ": {} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        )?;
    }

    Ok(())
}

/// Write the declared-network listing.
pub fn write_network_list<W: Write>(w: &mut W, config: &Config) -> io::Result<()> {
    for name in config.network_names() {
        let Some(profile) = config.network(&name) else {
            continue;
        };

        let marker = if name == config.default_network {
            " (default)"
        } else {
            ""
        };

        let chain_id = profile
            .chain_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        let gas_price = profile
            .gas_price
            .map(|p| format!("{} wei", p))
            .unwrap_or_else(|| "-".to_string());

        let endpoint = profile.url.as_deref().unwrap_or("<simulated>");

        writeln!(
            w,
            "{:<16} chain {:<8} {:<16} {}{}",
            name, chain_id, gas_price, endpoint, marker
        )?;
    }

    Ok(())
}

/// Write one network profile as declared, placeholders intact.
pub fn write_profile<W: Write>(
    w: &mut W,
    name: &str,
    profile: &crate::config::NetworkProfile,
    is_default: bool,
) -> io::Result<()> {
    let marker = if is_default { " (default)" } else { "" };
    writeln!(w, "network:   {}{}", name, marker)?;
    match profile.chain_id {
        Some(id) => writeln!(w, "chain id:  {}", id)?,
        None => writeln!(w, "chain id:  -")?,
    }
    match &profile.url {
        Some(url) => writeln!(w, "endpoint:  {}", url)?,
        None => writeln!(w, "endpoint:  <simulated>")?,
    }
    if let Some(gas_price) = profile.gas_price {
        writeln!(w, "gas price: {} wei", gas_price)?;
    }
    if let Some(gas) = profile.gas {
        writeln!(w, "gas limit: {}", gas)?;
    }
    writeln!(w, "accounts:  {}", profile.accounts.len())?;
    Ok(())
}

/// Write one resolved network. Key material is never printed.
pub fn write_resolved<W: Write>(w: &mut W, network: &ResolvedNetwork) -> io::Result<()> {
    writeln!(w, "network:   {}", network.name)?;
    writeln!(w, "chain id:  {}", network.chain_id)?;
    match &network.url {
        Some(url) => writeln!(w, "endpoint:  {}", url)?,
        None => writeln!(w, "endpoint:  <simulated>")?,
    }
    if let Some(gas_price) = network.gas_price {
        writeln!(w, "gas price: {} wei", gas_price)?;
    }
    if let Some(gas) = network.gas {
        writeln!(w, "gas limit: {}", gas)?;
    }

    writeln!(w, "signers:   {}", network.signers.len())?;
    for (i, signer) in network.signers.iter().enumerate() {
        match signer {
            Signer::Key(key) => writeln!(w, "  [{}] {}", i, key)?,
            Signer::Funded { key, balance } => {
                writeln!(w, "  [{}] {} (balance {} wei)", i, key, balance)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
