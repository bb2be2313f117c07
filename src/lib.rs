// SPDX-License-Identifier: MIT OR Apache-2.0

//! # DynField
//!
//! A dynamic option-set field engine. An administrator configures a custom
//! field whose selectable values come from a read-only query executed at
//! runtime, not from a static list. The engine validates and sanitizes the
//! query before it is ever executed, materializes its rows into a
//! sentinel-prefixed option set, and checks that a configured default
//! selection is consistent with the field's select mode and the actual
//! options.
//!
//! ```rust,ignore
//! use dynfield_rust::{EnglishLocalizer, FieldEngine, PlainFormatter, SqliteDataSource};
//!
//! let source = SqliteDataSource::open("site.db")?;
//! let engine = FieldEngine::new(&source, &PlainFormatter, &EnglishLocalizer);
//!
//! let errors = engine.validate_config(&submitted);
//! if errors.is_empty() {
//!     // safe to persist; render with engine.get_options(&config)
//! }
//! ```

pub mod core;

pub use crate::core::config::{
    config_form_definition, ConfigFormField, FieldConfig, FormElement, RawConfigData,
    AUTOCOMPLETE_FIELD, DEFAULT_VALUE_FIELD, MULTISELECT_FIELD, QUERY_FIELD,
};
pub use crate::core::datasource::{DataSource, InMemoryDataSource, Row, SqliteDataSource};
pub use crate::core::error::{DynFieldError, DynFieldResult};
pub use crate::core::format::{EnglishLocalizer, Localizer, MessageKey, PlainFormatter, TextFormatter};
pub use crate::core::options::{
    materialize, MaterializeError, OptionEntry, OptionSet, DATA_COLUMN, IDENTITY_COLUMN,
};
pub use crate::core::sanitizer::{sanitize, FORBIDDEN_KEYWORDS};
pub use crate::core::validation::{validate_default, FieldEngine, ValidationErrors};
