// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query Sanitizer
//!
//! Text-level safety filter for administrator-supplied option queries. This
//! is an allow-by-structure / deny-by-keyword filter, not a parser: it must
//! reject every query carrying a mutation keyword or chained statement, and
//! it errs toward rejection on anything ambiguous. False positives are an
//! acceptable cost; false negatives on the forbidden list are not.

use once_cell::sync::Lazy;
use regex::Regex;

/// Mutation keywords that disqualify a query outright (whole-word matches)
pub const FORBIDDEN_KEYWORDS: &[&str] = &[
    "insert", "update", "delete", "drop", "alter", "truncate", "create", "replace", "merge",
    "grant", "revoke",
];

/// Regex collapsing any whitespace run (spaces, tabs, newlines) to one space
static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Regex matching any forbidden keyword on word boundaries
///
/// Word boundaries keep identifiers that merely contain a keyword, such as a
/// column named `updated_at`, from being rejected.
static FORBIDDEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"\b(?:{})\b", FORBIDDEN_KEYWORDS.join("|"));
    Regex::new(&pattern).expect("Invalid forbidden keyword regex")
});

/// Why a query was rejected by the sanitizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// A mutation keyword appeared as a standalone word
    ForbiddenKeyword(String),
    /// A statement separator would allow chained statements
    StatementChaining,
    /// The query does not begin with a read-only retrieval keyword
    NotReadOnly,
}

/// Lower-case the query and collapse whitespace runs to single spaces
fn normalize(query: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(&query.to_lowercase(), " ")
        .trim()
        .to_string()
}

/// Explain why a query is unsafe, if it is
///
/// Checks run in severity order: forbidden keywords, statement chaining,
/// then the read-only prefix requirement.
pub fn rejection_reason(query: &str) -> Option<RejectionReason> {
    let normalized = normalize(query);

    if let Some(found) = FORBIDDEN_REGEX.find(&normalized) {
        return Some(RejectionReason::ForbiddenKeyword(
            found.as_str().to_string(),
        ));
    }

    if normalized.contains(';') {
        return Some(RejectionReason::StatementChaining);
    }

    // First word must be the read-only retrieval keyword.
    if normalized.split(' ').next() != Some("select") {
        return Some(RejectionReason::NotReadOnly);
    }

    None
}

/// Decide whether a query is safe to execute verbatim
///
/// Pure function; the only side effect is a debug log line naming the
/// rejection reason.
pub fn sanitize(query: &str) -> bool {
    match rejection_reason(query) {
        Some(reason) => {
            log::debug!("query rejected by sanitizer: {reason:?}");
            false
        }
        None => true,
    }
}
