// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration Validation
//!
//! Validation of submitted field configurations:
//! - default-value / select-mode consistency checks
//! - the orchestrator sequencing sanitizer, materializer and default-value
//!   validation into one error map per submission

pub mod config_validation;
pub mod default_value;

pub use config_validation::{FieldEngine, ValidationErrors};
pub use default_value::validate_default;
