//! Identity — the authenticated principal record.
//!
//! At most one identity is current within a session store at any time.
//! Identities are created on first login for an unseen email, resolved from
//! the fixed administrative record on privileged login, cleared on logout,
//! and rehydrated from the durable slot at process start.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Demo credentials ────────────────────────────────────────────────────────

/// Email of the fixed administrative identity. The privileged login path
/// compares against this exactly, case-sensitive.
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Password of the fixed administrative identity. Hardcoded demo default;
/// this is not a credential store.
pub const ADMIN_PASSWORD: &str = "admin";

/// Email of the pre-seeded regular demo identity.
pub const DEMO_USER_EMAIL: &str = "user@example.com";

// ─── Identity ────────────────────────────────────────────────────────────────

/// An authenticated principal (user or administrator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
  pub identity_id: Uuid,
  /// Natural lookup key for the login directory.
  pub email:       String,
  pub is_admin:    bool,
  pub created_at:  DateTime<Utc>,
}

impl Identity {
  /// A fresh non-admin identity for `email`.
  pub fn new(email: impl Into<String>) -> Self {
    Self {
      identity_id: Uuid::new_v4(),
      email:       email.into(),
      is_admin:    false,
      created_at:  Utc::now(),
    }
  }

  /// A fresh administrative identity for `email`.
  pub fn new_admin(email: impl Into<String>) -> Self {
    Self { is_admin: true, ..Self::new(email) }
  }
}
