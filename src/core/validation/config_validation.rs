// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config Validation Orchestrator
//!
//! Sequences the sanitizer, the options materializer and the default-value
//! validator into one pass over a submitted configuration, accumulating a
//! field-path → message error map. A failure at an earlier stage skips the
//! stages depending on it, but the orchestrator itself always returns a map
//! and never fails outright.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::core::config::{FieldConfig, RawConfigData, DEFAULT_VALUE_FIELD, MULTISELECT_FIELD, QUERY_FIELD};
use crate::core::datasource::DataSource;
use crate::core::format::{Localizer, MessageKey, TextFormatter};
use crate::core::options::{materialize, MaterializeError, OptionSet};
use crate::core::sanitizer::sanitize;

use super::default_value::validate_default;

/// Field-path → human-readable message map for one validation pass
///
/// Empty map signals the configuration is acceptable and may be persisted.
/// Backed by a BTreeMap so identical passes iterate identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Create an empty (success) result
    #[inline]
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Attach a message to a field path
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Message attached to a field path, if any
    #[inline]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether the validation pass succeeded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields carrying an error
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over (field path, message) pairs in field-path order
    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// The engine's host-facing surface
///
/// Bundles the external collaborators so hosts pass capabilities once and
/// call the read path (`get_options`) and write path (`validate_config`)
/// without further wiring. Holds no mutable state; every call operates on
/// the arguments alone.
pub struct FieldEngine<'a> {
    data_source: &'a dyn DataSource,
    formatter: &'a dyn TextFormatter,
    localizer: &'a dyn Localizer,
}

impl<'a> FieldEngine<'a> {
    pub fn new(
        data_source: &'a dyn DataSource,
        formatter: &'a dyn TextFormatter,
        localizer: &'a dyn Localizer,
    ) -> Self {
        Self {
            data_source,
            formatter,
            localizer,
        }
    }

    /// Materialize the options of a persisted configuration for rendering
    ///
    /// The render path never fails: a query that no longer passes the
    /// sanitizer, executes with an error, or yields unusable rows produces
    /// a sentinel-only set, and the condition is logged.
    pub fn get_options(&self, config: &FieldConfig) -> OptionSet {
        if config.query.trim().is_empty() {
            return OptionSet::with_sentinel(self.localizer);
        }
        if !sanitize(&config.query) {
            log::warn!("persisted option query no longer passes the safety check");
            return OptionSet::with_sentinel(self.localizer);
        }
        match materialize(&config.query, self.data_source, self.formatter, self.localizer) {
            Ok(options) => options,
            Err(e) => {
                log::warn!("option materialization failed, rendering placeholder only: {e}");
                OptionSet::with_sentinel(self.localizer)
            }
        }
    }

    /// Validate a submitted configuration edit
    ///
    /// Stages run in dependency order and short-circuit per dependent
    /// field: a query problem stops the default-value check, which cannot
    /// be judged without the option set. Every failure path lands in the
    /// returned map; nothing propagates out of this method.
    pub fn validate_config(&self, raw: &RawConfigData) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if raw.is_blank(QUERY_FIELD) {
            errors.insert(
                QUERY_FIELD,
                self.localizer.message(MessageKey::Required, &[]),
            );
            return errors;
        }
        let query = raw.get_or_blank(QUERY_FIELD);

        if !sanitize(query) {
            errors.insert(
                QUERY_FIELD,
                self.localizer.message(MessageKey::QueryUnsafe, &[]),
            );
            return errors;
        }

        let options =
            match materialize(query, self.data_source, self.formatter, self.localizer) {
                Ok(options) => options,
                Err(e) => {
                    errors.insert(QUERY_FIELD, self.materialize_message(&e));
                    return errors;
                }
            };

        let default_value = raw.get_or_blank(DEFAULT_VALUE_FIELD);
        if !default_value.is_empty() {
            let multiselect = raw.get_bool(MULTISELECT_FIELD);
            if let Some(message) =
                validate_default(default_value, multiselect, &options, self.localizer)
            {
                errors.insert(DEFAULT_VALUE_FIELD, message);
            }
        }

        errors
    }

    /// Map a materializer outcome to its localized query-field message
    fn materialize_message(&self, error: &MaterializeError) -> String {
        match error {
            MaterializeError::QueryExecutionFailed { message } => {
                self.localizer.message(MessageKey::QueryFault, &[message])
            }
            MaterializeError::EmptyResultSet => {
                self.localizer.message(MessageKey::QueryEmpty, &[])
            }
            MaterializeError::MissingIdentityColumn => {
                self.localizer.message(MessageKey::QueryIdMissing, &[])
            }
            MaterializeError::MissingDataColumn => {
                self.localizer.message(MessageKey::QueryDataMissing, &[])
            }
        }
    }
}
