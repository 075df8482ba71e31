use beydb_db::schema::{CURRENT_VERSION, create_schema};
use beydb_db::{OpenFailure, SchemaError, open_database, open_memory};

fn schema_version(conn: &rusqlite::Connection) -> i32 {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert_eq!(schema_version(&conn), CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    let tables = [
        "schema_version",
        "users",
        "user_info",
        "parts",
        "beyblades",
        "beycollection",
        "battles",
    ];
    for table in tables {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn hash_function_is_registered() {
    let conn = open_memory().unwrap();
    let hash: String = conn
        .query_row("SELECT sha256_hex('abc')", [], |row| row.get(0))
        .unwrap();
    assert_eq!(
        hash,
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn part_type_check_constraint() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO parts (part_id, part_type, weight) VALUES (1, 'Blade', 3.0)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn on_disk_database_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beydb.sqlite");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO parts (part_id, part_type, weight) VALUES (1, 'Face Bolt', 2.0)",
            [],
        )
        .unwrap();
    }

    let conn = open_database(&path).unwrap();
    assert_eq!(schema_version(&conn), CURRENT_VERSION);
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM parts", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn current_schema_is_left_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beydb.sqlite");
    drop(open_database(&path).unwrap());

    let conn = open_database(&path).unwrap();
    assert_eq!(CURRENT_VERSION, 1);
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(schema_version(&conn), 1);
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }

    match open_database(&path) {
        Err(SchemaError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, CURRENT_VERSION);
            assert_eq!(found, CURRENT_VERSION + 1);
        }
        other => panic!("expected version mismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_directory_is_bad_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("beydb.sqlite");
    let err = open_database(&path).unwrap_err();
    assert_eq!(err.open_failure(), OpenFailure::BadDatabase);
}

#[test]
fn garbage_file_is_bad_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "this is not a sqlite database, just some text\n".repeat(20)).unwrap();
    let err = open_database(&path).unwrap_err();
    assert_eq!(err.open_failure(), OpenFailure::BadDatabase);
}
