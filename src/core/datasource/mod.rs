// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data Source Capability
//!
//! The engine never reaches for a global database handle; whoever hosts it
//! passes an explicit [`DataSource`] capability in. That keeps the
//! materializer substitutable with a fake source in tests and pins query
//! execution to a single, narrow seam.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::core::error::{DynFieldError, DynFieldResult};

/// One result row as named text fields
///
/// The engine treats every value as display text; numeric columns are
/// rendered in their canonical decimal form by the adapters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    /// Create an empty row
    #[inline]
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set a column value
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    /// Builder-style column assignment, handy in tests
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// Get a column value
    #[inline]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Whether the row carries the named column
    #[inline]
    pub fn has_column(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Iterate over the column names present in this row
    #[inline]
    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }
}

/// Executes pre-validated, read-only queries
///
/// Implementations must only ever be handed queries the sanitizer accepted;
/// they perform no safety filtering of their own. A failure is returned as a
/// data-source error, never a panic.
pub trait DataSource: Send + Sync {
    /// Execute a read-only query and return its rows in result order
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying execution fails (connectivity,
    /// malformed query the sanitizer let through, timeout at the driver).
    fn execute_readonly_query(&self, query: &str) -> DynFieldResult<Vec<Row>>;
}

/// Very small in-memory implementation useful for tests
///
/// Returns the same canned rows for every query.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    rows: Vec<Row>,
}

impl InMemoryDataSource {
    /// Source yielding no rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// Source yielding the given rows for any query
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl DataSource for InMemoryDataSource {
    fn execute_readonly_query(&self, _query: &str) -> DynFieldResult<Vec<Row>> {
        Ok(self.rows.clone())
    }
}

/// SQLite-backed data source
pub struct SqliteDataSource {
    conn: Mutex<Connection>,
}

impl SqliteDataSource {
    /// Open a database file
    ///
    /// # Errors
    ///
    /// Returns a data source error if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> DynFieldResult<Self> {
        let conn = Connection::open(path).map_err(|e| {
            DynFieldError::data_source_with_source("failed to open database", Box::new(e))
        })?;
        Ok(Self::from_connection(conn))
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    ///
    /// Returns a data source error if the database cannot be opened.
    pub fn open_in_memory() -> DynFieldResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DynFieldError::data_source_with_source("failed to open database", Box::new(e))
        })?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an existing connection
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl DataSource for SqliteDataSource {
    fn execute_readonly_query(&self, query: &str) -> DynFieldResult<Vec<Row>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(query)
            .map_err(|e| DynFieldError::data_source_with_source(e.to_string(), Box::new(e)))?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut rows = stmt
            .query([])
            .map_err(|e| DynFieldError::data_source_with_source(e.to_string(), Box::new(e)))?;
        let mut out = Vec::new();
        while let Some(sql_row) = rows
            .next()
            .map_err(|e| DynFieldError::data_source_with_source(e.to_string(), Box::new(e)))?
        {
            let mut row = Row::new();
            for (idx, column) in columns.iter().enumerate() {
                let value = match sql_row.get_ref(idx).map_err(|e| {
                    DynFieldError::data_source_with_source(e.to_string(), Box::new(e))
                })? {
                    ValueRef::Null => String::new(),
                    ValueRef::Integer(v) => v.to_string(),
                    ValueRef::Real(v) => v.to_string(),
                    ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
                    ValueRef::Blob(_) => String::new(),
                };
                row.set(column.clone(), value);
            }
            out.push(row);
        }
        Ok(out)
    }
}
