// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default-Value Validation
//!
//! Checks that a configured default selection is structurally compatible
//! with the field's select mode and, for single-select fields, actually
//! present among the materialized option keys.

use crate::core::format::{Localizer, MessageKey};
use crate::core::options::OptionSet;

/// Validate a configured default against the select mode and option set
///
/// Returns the error message to attach to the default-value field, or
/// `None` when the default is acceptable. A blank default is always
/// acceptable.
///
/// Multi-select defaults are deliberately not cross-checked against the
/// option set: the value can be produced by a later filter stage, so
/// membership is validated there, not here.
pub fn validate_default(
    default_value: &str,
    multiselect: bool,
    options: &OptionSet,
    localizer: &dyn Localizer,
) -> Option<String> {
    if default_value.is_empty() {
        return None;
    }

    let candidates: Vec<&str> = default_value.split(',').collect();

    if !multiselect && candidates.len() > 1 {
        return Some(localizer.message(
            MessageKey::MultipleDefaults,
            &[&candidates.len().to_string()],
        ));
    }

    if !multiselect && !options.contains_key(default_value) {
        return Some(localizer.message(MessageKey::DefaultMissing, &[default_value]));
    }

    None
}
