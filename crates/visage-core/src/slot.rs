//! The durable identity slot — the single persisted key-value entry that
//! carries the last-known identity across process restarts.

use std::future::Future;

use crate::identity::Identity;

/// Name under which the identity record is stored. There is exactly one
/// slot; every write replaces it.
pub const SLOT_NAME: &str = "user";

/// A durable slot holding at most one serialised [`Identity`].
///
/// The slot is acquired and released per operation; no lock is held across
/// operations, so concurrent writers resolve last-write-wins.
pub trait IdentitySlot: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `identity`, replacing any previous record.
  fn save<'a>(
    &'a self,
    identity: &'a Identity,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Read the stored record. `None` when the slot is empty.
  fn load(
    &self,
  ) -> impl Future<Output = Result<Option<Identity>, Self::Error>> + Send + '_;

  /// Empty the slot. Clearing an already-empty slot is not an error.
  fn clear(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
