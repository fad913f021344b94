use gridfact_core::storage::{QueryOutcome, Store};

fn seeded_store() -> Store {
    let store = Store::memory().unwrap();
    {
        let conn = store.conn.lock().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE drivers (driverID TEXT, forename TEXT, surname TEXT);
            INSERT INTO drivers VALUES ('1', 'Michael', 'Schumacher');
            INSERT INTO drivers VALUES ('2', 'Lewis', 'Hamilton');
            CREATE TABLE results (resultID TEXT, raceID TEXT, driverID TEXT, position TEXT);
            INSERT INTO results VALUES ('10', '100', '1', '1');
            INSERT INTO results VALUES ('11', '101', '1', '3');
            INSERT INTO results VALUES ('12', '102', '1', '\N');
            "#,
        )
        .unwrap();
    }
    store
}

#[test]
fn select_serializes_rows_to_text() {
    let store = seeded_store();
    let outcome = store.execute_to_text(
        "SELECT COUNT(DISTINCT raceID) AS podiums FROM results WHERE driverID = '1' AND position IN ('1','2','3');",
    );
    match outcome {
        QueryOutcome::Rows(text) => {
            assert!(text.contains("podiums"));
            assert!(text.contains('2'));
        }
        QueryOutcome::Error(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn unknown_column_becomes_error_outcome() {
    let store = seeded_store();
    let outcome = store.execute_to_text("SELECT no_such_column FROM drivers;");
    match outcome {
        QueryOutcome::Error(msg) => {
            assert!(msg.starts_with("Error:"), "got: {msg}");
            assert!(msg.contains("no_such_column"));
        }
        QueryOutcome::Rows(_) => panic!("expected an error outcome"),
    }
}

#[test]
fn non_select_statements_are_refused() {
    let store = seeded_store();
    for sql in [
        "DROP TABLE drivers;",
        "DELETE FROM results;",
        "INSERT INTO drivers VALUES ('3', 'Max', 'Verstappen');",
        "UPDATE drivers SET surname = 'X';",
    ] {
        let outcome = store.execute_to_text(sql);
        assert!(outcome.is_error(), "{sql} should be refused");
        assert!(outcome.as_text().contains("read-only"));
    }
    // nothing got through
    assert_eq!(store.count_rows("drivers").unwrap(), 2);
    assert_eq!(store.count_rows("results").unwrap(), 3);
}

#[test]
fn cte_prefixed_dml_is_refused() {
    let store = seeded_store();
    let outcome = store.execute_to_text("WITH doomed AS (SELECT 1) DELETE FROM drivers;");
    assert!(outcome.is_error(), "CTE-prefixed DELETE should be refused");
    assert!(outcome.as_text().contains("read-only"));
    // nothing was deleted
    assert_eq!(store.count_rows("drivers").unwrap(), 2);
}

#[test]
fn with_clause_is_allowed() {
    let store = seeded_store();
    let outcome = store.execute_to_text(
        "WITH p AS (SELECT position FROM results WHERE driverID = '1') SELECT COUNT(*) FROM p;",
    );
    assert!(!outcome.is_error(), "got: {}", outcome.as_text());
}

#[test]
fn dnf_sentinel_survives_as_text() {
    let store = seeded_store();
    let outcome =
        store.execute_to_text(r"SELECT COUNT(*) AS dnfs FROM results WHERE position = '\N';");
    match outcome {
        QueryOutcome::Rows(text) => assert!(text.contains('1')),
        QueryOutcome::Error(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn empty_result_set_is_reported() {
    let store = seeded_store();
    let outcome = store.execute_to_text("SELECT * FROM drivers WHERE surname = 'Senna';");
    match outcome {
        QueryOutcome::Rows(text) => assert!(text.contains("(no rows)")),
        QueryOutcome::Error(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn table_names_and_preview() {
    let store = seeded_store();
    let names = store.table_names().unwrap();
    assert_eq!(names, vec!["drivers".to_string(), "results".to_string()]);

    let preview = store.preview("drivers", 1).unwrap();
    assert!(preview.contains("forename"));
    assert!(preview.contains("Michael"));
    assert!(!preview.contains("Lewis"));
}

#[test]
fn count_rows_rejects_hostile_table_names() {
    let store = seeded_store();
    assert!(store.count_rows("drivers; DROP TABLE drivers").is_err());
    assert!(store.count_rows("").is_err());
    assert_eq!(store.count_rows("drivers").unwrap(), 2);
}
