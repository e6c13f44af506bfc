use rollbook_core::db::migrations::{apply_migrations, latest_version};
use rollbook_core::db::{open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn latest_version_is_positive() {
    assert!(latest_version() > 0);
}

#[test]
fn open_db_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let kv_exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(kv_exists, 1);
}

#[test]
fn apply_migrations_is_idempotent() {
    let mut conn = open_db_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_version_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();

    match apply_migrations(&mut conn) {
        Err(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        }) => {
            assert_eq!(db_version, latest_version() + 1);
            assert_eq!(latest_supported, latest_version());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(()) => panic!("expected schema version rejection"),
    }
}
