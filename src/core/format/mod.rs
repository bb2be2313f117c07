// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display Formatting and Message Resolution
//!
//! Seams for the two text services the engine consumes but does not own:
//! locale-aware display formatting of option keys/labels, and resolution of
//! message keys into human-readable strings. Hosts plug in their own
//! implementations; the defaults here are plain-text English.

/// Every user-visible string the engine can emit
///
/// Keys are stable identifiers a host localizer can use to look up its own
/// string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Sentinel placeholder entry shown before a selection is made
    Choose,
    /// A required configuration value was left blank
    Required,
    /// The query was rejected by the safety filter
    QueryUnsafe,
    /// The query executed but produced no rows
    QueryEmpty,
    /// The query results have no identity column
    QueryIdMissing,
    /// The query results have no data column
    QueryDataMissing,
    /// More than one default supplied for a single-select field
    MultipleDefaults,
    /// The default value is not one of the materialized option keys
    DefaultMissing,
    /// The data source failed while executing the query
    QueryFault,
    /// Form label: query text area
    FormQuery,
    /// Form label: autocomplete checkbox
    FormAutocomplete,
    /// Form label: default value input
    FormDefaultValue,
    /// Form label: multi-select checkbox
    FormMultiselect,
}

impl MessageKey {
    /// Stable string identifier for this key
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            MessageKey::Choose => "choose",
            MessageKey::Required => "error.required",
            MessageKey::QueryUnsafe => "error.query.unsafe",
            MessageKey::QueryEmpty => "error.query.empty",
            MessageKey::QueryIdMissing => "error.query.id-missing",
            MessageKey::QueryDataMissing => "error.query.data-missing",
            MessageKey::MultipleDefaults => "error.default.multiple",
            MessageKey::DefaultMissing => "error.default.missing",
            MessageKey::QueryFault => "error.query.failed",
            MessageKey::FormQuery => "form.query",
            MessageKey::FormAutocomplete => "form.autocomplete",
            MessageKey::FormDefaultValue => "form.default-value",
            MessageKey::FormMultiselect => "form.multiselect",
        }
    }
}

/// Resolves a message key and arguments to a human-readable string
pub trait Localizer: Send + Sync {
    fn message(&self, key: MessageKey, args: &[&str]) -> String;
}

/// Built-in English message catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn message(&self, key: MessageKey, args: &[&str]) -> String {
        let arg = |i: usize| args.get(i).copied().unwrap_or("");
        match key {
            MessageKey::Choose => "Choose...".to_string(),
            MessageKey::Required => "You must supply a value here.".to_string(),
            MessageKey::QueryUnsafe => {
                "The query failed the read-only safety check.".to_string()
            }
            MessageKey::QueryEmpty => "The query returned no results.".to_string(),
            MessageKey::QueryIdMissing => {
                "The query results are missing an 'id' column.".to_string()
            }
            MessageKey::QueryDataMissing => {
                "The query results are missing a 'data' column.".to_string()
            }
            MessageKey::MultipleDefaults => format!(
                "{} default values supplied, but a single-select field allows only one.",
                arg(0)
            ),
            MessageKey::DefaultMissing => format!(
                "The default value '{}' was not found among the query results.",
                arg(0)
            ),
            MessageKey::QueryFault => format!("Error executing the query: {}", arg(0)),
            MessageKey::FormQuery => "SQL query".to_string(),
            MessageKey::FormAutocomplete => "Autocomplete".to_string(),
            MessageKey::FormDefaultValue => "Default value".to_string(),
            MessageKey::FormMultiselect => "Enable multi-select".to_string(),
        }
    }
}

/// Applies locale-aware display normalization to option keys and labels
pub trait TextFormatter: Send + Sync {
    fn format(&self, raw: &str) -> String;
}

/// Default formatter: trims and collapses internal whitespace runs
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl TextFormatter for PlainFormatter {
    fn format(&self, raw: &str) -> String {
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_KEYS: &[MessageKey] = &[
        MessageKey::Choose,
        MessageKey::Required,
        MessageKey::QueryUnsafe,
        MessageKey::QueryEmpty,
        MessageKey::QueryIdMissing,
        MessageKey::QueryDataMissing,
        MessageKey::MultipleDefaults,
        MessageKey::DefaultMissing,
        MessageKey::QueryFault,
        MessageKey::FormQuery,
        MessageKey::FormAutocomplete,
        MessageKey::FormDefaultValue,
        MessageKey::FormMultiselect,
    ];

    #[test]
    fn test_message_key_ids_are_unique() {
        let ids: HashSet<&str> = ALL_KEYS.iter().map(|k| k.as_str()).collect();
        assert_eq!(ids.len(), ALL_KEYS.len());
    }

    #[test]
    fn test_english_catalog_covers_every_key() {
        for key in ALL_KEYS {
            let message = EnglishLocalizer.message(*key, &["x"]);
            assert!(!message.is_empty(), "no message for {key:?}");
        }
    }

    #[test]
    fn test_multiple_defaults_includes_count() {
        let message = EnglishLocalizer.message(MessageKey::MultipleDefaults, &["2"]);
        assert!(message.contains('2'));
    }

    #[test]
    fn test_default_missing_includes_value() {
        let message = EnglishLocalizer.message(MessageKey::DefaultMissing, &["stray"]);
        assert!(message.contains("'stray'"));
    }

    #[test]
    fn test_query_fault_embeds_description() {
        let message = EnglishLocalizer.message(MessageKey::QueryFault, &["no such table: users"]);
        assert!(message.contains("no such table: users"));
    }

    #[test]
    fn test_plain_formatter_collapses_whitespace() {
        assert_eq!(PlainFormatter.format("  Fine \t Arts \n Dept "), "Fine Arts Dept");
        assert_eq!(PlainFormatter.format("plain"), "plain");
        assert_eq!(PlainFormatter.format(""), "");
    }
}
