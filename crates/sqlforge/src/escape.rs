//! SQL string-literal escaping.
//!
//! Only the builder-owned scalar clauses (the joined ORDER BY expression and
//! the LIMIT/OFFSET values) pass through here. Field lists, WHERE predicates
//! and SET assignments are caller-trusted SQL fragments and are emitted
//! verbatim; that asymmetry is part of the builder's contract.

/// Quote `value` as a Postgres string literal.
///
/// Single quotes are doubled. Values containing a backslash are emitted in
/// the `E'...'` escape-string form with backslashes doubled.
pub fn literal(value: &str) -> String {
    let escaped = value.replace('\'', "''").replace('\\', "\\\\");
    if value.contains('\\') {
        format!("E'{escaped}'")
    } else {
        format!("'{escaped}'")
    }
}
