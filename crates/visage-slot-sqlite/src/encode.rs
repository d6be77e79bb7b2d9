//! Encoding helpers between the identity record and its stored forms.
//!
//! The record itself is stored as compact JSON (serde round-trips every
//! field, timestamps included). The row-level `updated_at` column is an
//! RFC 3339 string.

use chrono::{DateTime, Utc};
use visage_core::identity::Identity;

use crate::{Error, Result};

pub fn encode_identity(identity: &Identity) -> Result<String> {
  Ok(serde_json::to_string(identity)?)
}

/// Decode a stored record. Failure here means the slot content is
/// malformed, not that the database failed.
pub fn decode_identity(value_json: &str) -> Result<Identity> {
  serde_json::from_str(value_json).map_err(|e| Error::Malformed(e.to_string()))
}

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }
