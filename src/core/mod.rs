// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core engine modules

pub mod config;
pub mod datasource;
pub mod error;
pub mod format;
pub mod options;
pub mod sanitizer;
pub mod validation;
