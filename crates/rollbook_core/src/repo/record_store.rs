//! Record store contract and key-value implementation.
//!
//! # Responsibility
//! - Load and save the serialized student list under one storage key.
//! - Keep SQL and JSON encoding details inside the persistence boundary.
//!
//! # Invariants
//! - `save` overwrites the entire persisted value; no partial writes.
//! - `load` treats a missing key or undecodable value as an empty list.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::student::Student;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized record list.
pub const RECORDS_KEY: &str = "students";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for record store operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode record list: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: expected schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "missing required table `{table}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Load/save contract over the persisted record list.
///
/// No transactional guarantees are required by callers: every save rewrites
/// the full list and the most recent write wins.
pub trait RecordStore {
    /// Deserializes the persisted record list; empty when absent or unreadable.
    fn load(&self) -> StoreResult<Vec<Student>>;
    /// Serializes and overwrites the persisted record list.
    fn save(&self, records: &[Student]) -> StoreResult<()>;
}

/// Key-value backed record store.
pub struct KvRecordStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> KvRecordStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl RecordStore for KvRecordStore<'_> {
    fn load(&self) -> StoreResult<Vec<Student>> {
        let text: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1;",
                [RECORDS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(text) = text else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&text) {
            Ok(records) => Ok(records),
            Err(err) => {
                // Unreadable state is "no data", not a hard error.
                warn!("event=store_load module=repo status=reset error={err}");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[Student]) -> StoreResult<()> {
        let text = serde_json::to_string(records)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![RECORDS_KEY, text],
        )?;
        info!(
            "event=store_save module=repo status=ok records={}",
            records.len()
        );
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv'
        );",
        [],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(StoreError::MissingRequiredTable("kv"));
    }

    Ok(())
}
