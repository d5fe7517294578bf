// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Name suggestions for unknown networks.

/// Suggest a close match for `unknown` among `candidates`.
///
/// Prefix matches win; otherwise a small edit distance (<= 2) counts.
pub fn suggest_name(unknown: &str, candidates: &[String]) -> Option<String> {
    if unknown.is_empty() {
        return None;
    }

    let lower = unknown.to_lowercase();

    // Prefix matching (require at least 2 chars to avoid false positives)
    if lower.len() >= 2 {
        for candidate in candidates {
            let c = candidate.to_lowercase();
            if c.starts_with(&lower) || lower.starts_with(&c) {
                return Some(candidate.clone());
            }
        }
    }

    candidates
        .iter()
        .map(|c| (edit_distance(&lower, &c.to_lowercase()), c))
        .filter(|(d, _)| *d <= 2)
        .min_by_key(|(d, _)| *d)
        .map(|(_, c)| c.clone())
}

/// Levenshtein distance, small inputs only.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            row[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(row[j] + 1);
        }
        std::mem::swap(&mut prev, &mut row);
    }

    prev[b.len()]
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
