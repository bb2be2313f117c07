// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Field Configuration Module
//!
//! Configuration handling for one dynamic field instance. A config-edit
//! submission arrives as an untyped flat map of field paths to raw string
//! values ([`RawConfigData`]); once validated it is materialized into the
//! typed, persistable [`FieldConfig`].
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use dynfield_rust::core::config::*;
//!
//! let mut raw = RawConfigData::new();
//! raw.set(QUERY_FIELD, "SELECT id, name AS data FROM course");
//! raw.set(MULTISELECT_FIELD, "0");
//!
//! // After validation passes:
//! let config = FieldConfig::from_raw(&raw)?;
//! assert!(!config.multiselect);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::error::{DynFieldError, DynFieldResult};
use crate::core::format::MessageKey;

/// Field path of the query text in submitted configuration data
pub const QUERY_FIELD: &str = "configdata.query";
/// Field path of the autocomplete flag
pub const AUTOCOMPLETE_FIELD: &str = "configdata.autocomplete";
/// Field path of the raw default value text
pub const DEFAULT_VALUE_FIELD: &str = "configdata.default_value";
/// Field path of the multi-select flag
pub const MULTISELECT_FIELD: &str = "configdata.multiselect";

/// Untyped configuration data as submitted from the config-edit form
///
/// Flat field-path → raw-string map. Accessors never fail; missing fields
/// read as absent/blank/false, matching how form submissions omit unchecked
/// checkboxes.
#[derive(Debug, Clone, Default)]
pub struct RawConfigData {
    values: HashMap<String, String>,
}

impl RawConfigData {
    /// Create an empty submission
    #[inline]
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set a submitted field value
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Get a submitted field value
    #[inline]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Get a submitted field value, blank if absent
    #[inline]
    pub fn get_or_blank(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Coerce a submitted field to a flag
    ///
    /// Checkbox submissions arrive as "0"/"1"; tolerate the usual textual
    /// spellings. Absent fields read as false.
    pub fn get_bool(&self, field: &str) -> bool {
        matches!(
            self.get_or_blank(field).trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }

    /// Whether a field is missing or contains only whitespace
    #[inline]
    pub fn is_blank(&self, field: &str) -> bool {
        self.get_or_blank(field).trim().is_empty()
    }
}

/// Persisted configuration for one dynamic field instance
///
/// Owned by the field definition and only mutated through the config-edit
/// workflow. The host persists it (typically as JSON inside the field
/// definition record) and hands it back for every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Read-only data-retrieval query producing the option rows
    pub query: String,
    /// Render the field as an autocomplete element
    #[serde(default)]
    pub autocomplete: bool,
    /// Allow selecting more than one option
    #[serde(default)]
    pub multiselect: bool,
    /// Raw default selection, possibly comma-separated
    #[serde(default)]
    pub default_value: String,
}

impl FieldConfig {
    /// Build the typed configuration from a validated submission
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the query is blank; callers are
    /// expected to run config validation first, so this only trips on host
    /// misuse.
    pub fn from_raw(raw: &RawConfigData) -> DynFieldResult<Self> {
        if raw.is_blank(QUERY_FIELD) {
            return Err(DynFieldError::configuration_with_key(
                "cannot build a field configuration without a query",
                QUERY_FIELD,
            ));
        }
        Ok(Self {
            query: raw.get_or_blank(QUERY_FIELD).to_string(),
            autocomplete: raw.get_bool(AUTOCOMPLETE_FIELD),
            multiselect: raw.get_bool(MULTISELECT_FIELD),
            default_value: raw.get_or_blank(DEFAULT_VALUE_FIELD).to_string(),
        })
    }
}

/// Form element kind for one editable configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormElement {
    /// Multi-line text area
    TextArea { rows: u16, cols: u16 },
    /// Boolean checkbox
    Checkbox,
    /// Single-line text input
    Text { size: u16 },
}

/// Declaration of one editable configuration field
///
/// Specification only; rendering is the host form layer's concern.
#[derive(Debug, Clone, Copy)]
pub struct ConfigFormField {
    /// Field path the submission will carry the value under
    pub name: &'static str,
    /// Message key for the field's label
    pub label: MessageKey,
    /// Element the host should render
    pub element: FormElement,
}

/// The editable configuration fields of a dynamic field
///
/// Query text area, autocomplete flag, default value text, multi-select
/// flag, in form order.
pub fn config_form_definition() -> Vec<ConfigFormField> {
    vec![
        ConfigFormField {
            name: QUERY_FIELD,
            label: MessageKey::FormQuery,
            element: FormElement::TextArea { rows: 7, cols: 52 },
        },
        ConfigFormField {
            name: AUTOCOMPLETE_FIELD,
            label: MessageKey::FormAutocomplete,
            element: FormElement::Checkbox,
        },
        ConfigFormField {
            name: DEFAULT_VALUE_FIELD,
            label: MessageKey::FormDefaultValue,
            element: FormElement::Text { size: 50 },
        },
        ConfigFormField {
            name: MULTISELECT_FIELD,
            label: MessageKey::FormMultiselect,
            element: FormElement::Checkbox,
        },
    ]
}
