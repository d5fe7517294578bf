// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Secret indirection and signing-key material.
//!
//! Manifest strings reference secrets as `${VAR}` placeholders which are
//! expanded from the process environment at resolution time. Key bytes are
//! wrapped in [`PrivateKey`], whose `Debug`/`Display` never print material.

use std::fmt;

/// Placeholder syntax errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceholderError {
    /// `${` without a closing `}`.
    #[error("unterminated `${{` placeholder")]
    Unterminated,

    /// `${}` with no variable name.
    #[error("empty placeholder")]
    Empty,

    /// Variable name contains a character outside [A-Za-z0-9_].
    #[error("invalid character `{0}` in placeholder variable name")]
    InvalidChar(char),
}

/// Expansion errors: bad syntax, or a referenced variable is unset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error(transparent)]
    Syntax(#[from] PlaceholderError),

    /// The named environment variable is not set.
    #[error("variable `{0}` is not set")]
    Missing(String),
}

/// A 32-byte signing key parsed from hex (optional `0x` prefix).
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Parse a key from a 64-hex-character string, `0x` prefix optional.
    pub fn from_hex(input: &str) -> Result<Self, String> {
        let stripped = input.strip_prefix("0x").unwrap_or(input);
        if stripped.len() != 64 {
            return Err(format!(
                "expected 64 hex characters, got {}",
                stripped.len()
            ));
        }
        let bytes = hex::decode(stripped).map_err(|e| e.to_string())?;
        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes);
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// True if the string looks like a literal hex key (with or without `0x`).
pub fn looks_like_literal_key(input: &str) -> bool {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    stripped.len() == 64 && stripped.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Collect `${VAR}` variable names referenced by `input`, in order.
pub fn placeholders(input: &str) -> Result<Vec<&str>, PlaceholderError> {
    let mut vars = Vec::new();
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or(PlaceholderError::Unterminated)?;
        let name = &after[..end];
        if name.is_empty() {
            return Err(PlaceholderError::Empty);
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
        {
            return Err(PlaceholderError::InvalidChar(bad));
        }
        vars.push(name);
        rest = &after[end + 1..];
    }

    Ok(vars)
}

/// Expand every `${VAR}` in `input` using `lookup`.
///
/// Fails on the first unset variable rather than substituting a
/// placeholder value; a missing secret must surface here, not as a
/// confusing signing failure downstream.
pub fn expand<F>(input: &str, lookup: F) -> Result<String, ExpandError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or(PlaceholderError::Unterminated)?;
        let name = &after[..end];
        if name.is_empty() {
            return Err(PlaceholderError::Empty.into());
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
        {
            return Err(PlaceholderError::InvalidChar(bad).into());
        }
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => return Err(ExpandError::Missing(name.to_string())),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Environment lookup used by production callers.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
#[path = "secret_tests.rs"]
mod tests;
