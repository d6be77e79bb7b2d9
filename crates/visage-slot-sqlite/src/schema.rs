//! SQL schema for the slot database.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per named slot. The session layer uses a single fixed name.
CREATE TABLE IF NOT EXISTS slots (
    name       TEXT PRIMARY KEY,
    value_json TEXT NOT NULL,   -- serialised Identity record
    updated_at TEXT NOT NULL    -- ISO 8601 UTC; last write wins
);

PRAGMA user_version = 1;
";
