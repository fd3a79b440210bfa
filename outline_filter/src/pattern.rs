// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Escaped, case-insensitive filter patterns.

use regex::Regex;

/// A filter pattern compiled from raw user input.
///
/// The input is escaped before compilation, so it always matches literally;
/// matching is case-insensitive and tests existence only. Repeated
/// [`is_match`](Self::is_match) calls against the same pattern are
/// independent: `regex` carries no match-position state between calls, so
/// there is no equivalent of the stateful "match all occurrences" mode that
/// corrupts repeated tests in other regex engines. Only `is_match` is exposed
/// to keep it that way.
#[derive(Clone, Debug)]
pub struct FilterPattern {
    regex: Regex,
    source: String,
}

impl FilterPattern {
    /// Compile a pattern from raw user text.
    ///
    /// Returns `None` for empty or whitespace-only input (no pattern means
    /// the text filter is off).
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        // Escaped literal input always compiles; `ok()?` rather than a panic
        // keeps the constructor total anyway.
        let regex = Regex::new(&format!("(?i){}", regex::escape(trimmed))).ok()?;
        Some(Self {
            regex,
            source: trimmed.to_owned(),
        })
    }

    /// Whether the pattern occurs anywhere in `title`.
    pub fn is_match(&self, title: &str) -> bool {
        self.regex.is_match(title)
    }

    /// The trimmed user text the pattern was built from.
    pub fn source(&self) -> &str {
        &self.source
    }
}
