//! SQLite-backed key-value adapter.

use rusqlite::{params, Connection, OptionalExtension};

use super::KvStore;
use crate::error::ProviaResult;

pub struct SqliteKv {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

impl SqliteKv {
    /// Open (or create) the database at `path` and apply migrations.
    pub fn open(path: &str) -> ProviaResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only matters for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        let kv = Self {
            conn,
            path: Some(path.to_string()),
        };
        kv.migrate()?;
        log::debug!("Opened key-value database at {path}");
        Ok(kv)
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> ProviaResult<Self> {
        let conn = Connection::open_in_memory()?;
        let kv = Self { conn, path: None };
        kv.migrate()?;
        Ok(kv)
    }

    /// Reopen a new connection to the same database.
    /// For in-memory databases this returns a new, empty database.
    pub fn reopen(&self) -> ProviaResult<Self> {
        match &self.path {
            Some(p) => Self::open(p),
            None => Self::in_memory(),
        }
    }

    /// Apply all schema migrations in order.
    fn migrate(&self) -> ProviaResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_kv_entry.sql"))?;
        Ok(())
    }

    /// Number of stored keys (for tests and the runner summary).
    pub fn entry_count(&self) -> ProviaResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM kv_entry", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl KvStore for SqliteKv {
    fn get(&self, key: &str) -> ProviaResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entry WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> ProviaResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entry (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> ProviaResult<()> {
        self.conn
            .execute("DELETE FROM kv_entry WHERE key = ?1", params![key])?;
        Ok(())
    }
}
