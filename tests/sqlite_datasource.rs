// SPDX-License-Identifier: MIT OR Apache-2.0

// End-to-end validation against a real SQLite database, in-memory and
// file-backed. The adapter is the production data-source implementation, so
// these cover the actual execution seam the orchestrator depends on.

use rusqlite::Connection;

use dynfield_rust::{
    DataSource, EnglishLocalizer, FieldConfig, FieldEngine, PlainFormatter, RawConfigData,
    SqliteDataSource, DEFAULT_VALUE_FIELD, MULTISELECT_FIELD, QUERY_FIELD,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const SEED: &str = "
    CREATE TABLE course (id INTEGER PRIMARY KEY, fullname TEXT, visible INTEGER);
    INSERT INTO course VALUES (1, 'Mathematics', 1);
    INSERT INTO course VALUES (2, 'History', 1);
    INSERT INTO course VALUES (3, 'Hidden Course', 0);
";

fn seeded_source() -> SqliteDataSource {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SEED).unwrap();
    SqliteDataSource::from_connection(conn)
}

fn submission(query: &str) -> RawConfigData {
    let mut raw = RawConfigData::new();
    raw.set(QUERY_FIELD, query);
    raw.set(MULTISELECT_FIELD, "0");
    raw
}

#[test]
fn test_validate_and_render_against_sqlite() {
    init_logging();
    let source = seeded_source();
    let engine = FieldEngine::new(&source, &PlainFormatter, &EnglishLocalizer);

    let raw = submission("SELECT id, fullname AS data FROM course WHERE visible = 1 ORDER BY id");
    let errors = engine.validate_config(&raw);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let config = FieldConfig::from_raw(&raw).unwrap();
    let options = engine.get_options(&config);
    assert_eq!(options.len(), 3);
    assert_eq!(options.entries()[1].key, "1");
    assert_eq!(options.entries()[1].label, "Mathematics");
    assert_eq!(options.entries()[2].key, "2");
    assert_eq!(options.entries()[2].label, "History");
}

#[test]
fn test_sqlite_default_value_checked_against_real_rows() {
    init_logging();
    let source = seeded_source();
    let engine = FieldEngine::new(&source, &PlainFormatter, &EnglishLocalizer);
    let query = "SELECT id, fullname AS data FROM course WHERE visible = 1";

    let mut raw = submission(query);
    raw.set(DEFAULT_VALUE_FIELD, "2");
    assert!(engine.validate_config(&raw).is_empty());

    // Course 3 exists but the query filters it out, so it is not an option.
    let mut raw = submission(query);
    raw.set(DEFAULT_VALUE_FIELD, "3");
    let errors = engine.validate_config(&raw);
    assert!(errors.get(DEFAULT_VALUE_FIELD).unwrap().contains("'3'"));
}

#[test]
fn test_sqlite_empty_result_set_reported() {
    init_logging();
    let source = seeded_source();
    let engine = FieldEngine::new(&source, &PlainFormatter, &EnglishLocalizer);

    let errors =
        engine.validate_config(&submission("SELECT id, fullname AS data FROM course WHERE id > 100"));
    assert_eq!(
        errors.get(QUERY_FIELD),
        Some("The query returned no results.")
    );
}

#[test]
fn test_sqlite_missing_columns_reported() {
    init_logging();
    let source = seeded_source();
    let engine = FieldEngine::new(&source, &PlainFormatter, &EnglishLocalizer);

    let errors =
        engine.validate_config(&submission("SELECT fullname AS data FROM course LIMIT 1"));
    assert!(errors.get(QUERY_FIELD).unwrap().contains("'id' column"));

    let errors = engine.validate_config(&submission("SELECT id, fullname FROM course LIMIT 1"));
    assert!(errors.get(QUERY_FIELD).unwrap().contains("'data' column"));
}

#[test]
fn test_sqlite_execution_fault_embeds_description() {
    init_logging();
    let source = seeded_source();
    let engine = FieldEngine::new(&source, &PlainFormatter, &EnglishLocalizer);

    let errors = engine.validate_config(&submission("SELECT id, data FROM missing_table"));
    let message = errors.get(QUERY_FIELD).unwrap();
    assert!(message.contains("Error executing the query"));
    assert!(message.contains("missing_table"));
}

#[test]
fn test_sqlite_mutation_never_reaches_database() {
    init_logging();
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SEED).unwrap();
    let source = SqliteDataSource::from_connection(conn);
    let engine = FieldEngine::new(&source, &PlainFormatter, &EnglishLocalizer);

    let errors = engine.validate_config(&submission("DELETE FROM course"));
    assert_eq!(
        errors.get(QUERY_FIELD),
        Some("The query failed the read-only safety check.")
    );

    // The table still holds all three rows.
    let survivors = source
        .execute_readonly_query("SELECT id, fullname AS data FROM course")
        .unwrap();
    assert_eq!(survivors.len(), 3);
}

#[test]
fn test_file_backed_database() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.db");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(SEED).unwrap();
    }

    let source = SqliteDataSource::open(&path).unwrap();
    let engine = FieldEngine::new(&source, &PlainFormatter, &EnglishLocalizer);

    let raw = submission("SELECT id, fullname AS data FROM course ORDER BY id");
    assert!(engine.validate_config(&raw).is_empty());

    let config = FieldConfig::from_raw(&raw).unwrap();
    assert_eq!(engine.get_options(&config).len(), 4);
}
