//! Delimiter rules for splitting raw clause strings.
//!
//! Bulk-assigned clauses arrive as one delimited string; chain-built clauses
//! are already sequences. Splitting an already-split sequence never happens
//! here, which keeps the normalization pass idempotent by construction.

use regex::Regex;
use std::sync::OnceLock;

fn comma_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*,\s*").expect("invalid built-in comma regex"))
}

fn and_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // No word boundaries: matches the original delimiter exactly.
    RE.get_or_init(|| Regex::new(r"(?i)\s*and\s*").expect("invalid built-in AND regex"))
}

fn or_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\s*or\s*").expect("invalid built-in OR regex"))
}

/// How a raw clause string is cut into individual fragments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitRule {
    /// Comma optionally surrounded by whitespace (fields, tables, groups,
    /// orders, insert entries, update setters).
    Comma,
    /// Case-insensitive literal `and`, optionally surrounded by whitespace.
    And,
    /// Case-insensitive literal `or`, optionally surrounded by whitespace.
    Or,
}

impl SplitRule {
    /// Split `raw` into fragments according to this rule.
    pub fn split(self, raw: &str) -> Vec<String> {
        let re = match self {
            SplitRule::Comma => comma_re(),
            SplitRule::And => and_re(),
            SplitRule::Or => or_re(),
        };
        re.split(raw).map(str::to_string).collect()
    }
}
