// SPDX-License-Identifier: MIT OR Apache-2.0

//! Options Materialization
//!
//! Turns the rows of a pre-sanitized query into the ordered, sentinel-
//! prefixed option set presented to end users. An option set is only
//! meaningful for the configuration whose query produced it; it is
//! recomputed on every request and never cached across a config edit.

use thiserror::Error;

use crate::core::datasource::DataSource;
use crate::core::format::{Localizer, MessageKey, TextFormatter};

/// Column every result row must expose as the option identity
pub const IDENTITY_COLUMN: &str = "id";
/// Column every result row must expose as the option display text
pub const DATA_COLUMN: &str = "data";

/// One materialized selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// Unique identifier from the result row's identity column
    pub key: String,
    /// Display text from the result row's data column
    pub label: String,
}

/// Ordered option set, always prefixed with the sentinel "choose" entry
///
/// Non-sentinel key uniqueness is the query author's concern; duplicates
/// from the data source are not deduplicated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<OptionEntry>,
}

impl OptionSet {
    /// Create a set holding only the sentinel entry
    pub fn with_sentinel(localizer: &dyn Localizer) -> Self {
        Self {
            entries: vec![OptionEntry {
                key: String::new(),
                label: localizer.message(MessageKey::Choose, &[]),
            }],
        }
    }

    /// Append an option after the sentinel
    pub fn push(&mut self, entry: OptionEntry) {
        self.entries.push(entry);
    }

    /// All entries in presentation order, sentinel first
    #[inline]
    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    /// Total entry count including the sentinel
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any real option exists beyond the sentinel
    #[inline]
    pub fn has_options(&self) -> bool {
        self.entries.len() > 1
    }

    /// Whether `key` identifies an entry in this set
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }
}

/// Typed outcomes of a materialization attempt
///
/// These surface upward as validation errors on the query field; none of
/// them crosses the module boundary as a panic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MaterializeError {
    #[error("query execution failed: {message}")]
    QueryExecutionFailed { message: String },

    #[error("query returned no rows")]
    EmptyResultSet,

    #[error("result rows carry no 'id' column")]
    MissingIdentityColumn,

    #[error("result rows carry no 'data' column")]
    MissingDataColumn,
}

/// Execute a pre-sanitized query and map its rows into an option set
///
/// Callable only after the sanitizer has accepted `query`. Each row yields
/// one entry with `key` from the identity column and `label` from the data
/// column, both passed through the display formatter. The identity and data
/// columns are checked on the first row before any mapping happens.
///
/// # Errors
///
/// Returns the typed outcome for a failing execution, an empty result set,
/// or a missing identity/data column.
pub fn materialize(
    query: &str,
    source: &dyn DataSource,
    formatter: &dyn TextFormatter,
    localizer: &dyn Localizer,
) -> Result<OptionSet, MaterializeError> {
    let rows = source.execute_readonly_query(query).map_err(|e| {
        log::warn!("option query execution failed: {e}");
        MaterializeError::QueryExecutionFailed {
            message: e.to_string(),
        }
    })?;

    let Some(first) = rows.first() else {
        return Err(MaterializeError::EmptyResultSet);
    };
    if !first.has_column(IDENTITY_COLUMN) {
        return Err(MaterializeError::MissingIdentityColumn);
    }
    if !first.has_column(DATA_COLUMN) {
        return Err(MaterializeError::MissingDataColumn);
    }

    let mut options = OptionSet::with_sentinel(localizer);
    for row in &rows {
        options.push(OptionEntry {
            key: formatter.format(row.get(IDENTITY_COLUMN).unwrap_or("")),
            label: formatter.format(row.get(DATA_COLUMN).unwrap_or("")),
        });
    }
    Ok(options)
}
