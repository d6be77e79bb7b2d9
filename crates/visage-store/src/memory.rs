//! [`MemorySlot`] — an in-memory identity slot, durable only for the
//! process lifetime. Used by tests and ephemeral demo runs; the SQLite slot
//! is the durable implementation.

use std::{convert::Infallible, sync::Arc};

use tokio::sync::Mutex;
use visage_core::{identity::Identity, slot::IdentitySlot};

/// Cloning is cheap — clones share the same record, so a store and a test
/// can observe each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
  record: Arc<Mutex<Option<Identity>>>,
}

impl MemorySlot {
  pub fn new() -> Self { Self::default() }
}

impl IdentitySlot for MemorySlot {
  type Error = Infallible;

  async fn save(&self, identity: &Identity) -> Result<(), Infallible> {
    *self.record.lock().await = Some(identity.clone());
    Ok(())
  }

  async fn load(&self) -> Result<Option<Identity>, Infallible> {
    Ok(self.record.lock().await.clone())
  }

  async fn clear(&self) -> Result<(), Infallible> {
    *self.record.lock().await = None;
    Ok(())
  }
}
