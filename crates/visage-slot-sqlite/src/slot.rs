//! [`SqliteSlot`] — the SQLite implementation of [`IdentitySlot`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use visage_core::{
  identity::Identity,
  slot::{IdentitySlot, SLOT_NAME},
};

use crate::{
  Error, Result,
  encode::{decode_identity, encode_dt, encode_identity},
  schema::SCHEMA,
};

// ─── Slot ────────────────────────────────────────────────────────────────────

/// A durable identity slot backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteSlot {
  conn: tokio_rusqlite::Connection,
}

impl SqliteSlot {
  /// Open (or create) a slot database at `path` and run schema
  /// initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let slot = Self { conn };
    slot.init_schema().await?;
    Ok(slot)
  }

  /// Open an in-memory slot — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let slot = Self { conn };
    slot.init_schema().await?;
    Ok(slot)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Upsert the slot row. Also the seam tests use to plant raw content.
  pub(crate) async fn write_value(&self, value_json: String) -> Result<()> {
    let at_str = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO slots (name, value_json, updated_at) VALUES (?1, ?2, ?3)
           ON CONFLICT(name) DO UPDATE SET value_json = excluded.value_json,
                                           updated_at = excluded.updated_at",
          rusqlite::params![SLOT_NAME, value_json, at_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── IdentitySlot impl ───────────────────────────────────────────────────────

impl IdentitySlot for SqliteSlot {
  type Error = Error;

  async fn save(&self, identity: &Identity) -> Result<()> {
    let value_json = encode_identity(identity)?;
    self.write_value(value_json).await
  }

  async fn load(&self) -> Result<Option<Identity>> {
    let value_json: Option<String> = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              "SELECT value_json FROM slots WHERE name = ?1",
              rusqlite::params![SLOT_NAME],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    value_json.as_deref().map(decode_identity).transpose()
  }

  async fn clear(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute(
          "DELETE FROM slots WHERE name = ?1",
          rusqlite::params![SLOT_NAME],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
