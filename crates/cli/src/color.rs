// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order: NO_COLOR env var disables, COLOR forces, otherwise
//! color only when stdout is a TTY.

use std::io::IsTerminal;
use std::sync::OnceLock;

use termcolor::{Color, ColorChoice, ColorSpec};

/// How color output was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Translate to a termcolor choice.
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => {
                if should_colorize() {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
        }
    }
}

/// Check if colors should be enabled based on TTY and environment variables.
///
/// This is cached once per process for consistent behavior.
pub fn should_colorize() -> bool {
    static SHOULD_COLORIZE: OnceLock<bool> = OnceLock::new();
    *SHOULD_COLORIZE.get_or_init(|| {
        // NO_COLOR=1 disables colors
        if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
            return false;
        }

        // COLOR=1 forces colors even without TTY
        if std::env::var("COLOR").is_ok_and(|v| v == "1") {
            return true;
        }

        // Default: enable colors only if stdout is a TTY
        std::io::stdout().is_terminal()
    })
}

/// Color specs for report output.
pub mod scheme {
    use super::*;

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    pub fn warn() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
