//! Service stores for the Visage emotion demo.
//!
//! [`SessionStore`] owns the current authenticated identity and its durable
//! persistence; [`ResultStore`] owns the append-only analysis history. The
//! stores do not reference each other — callers glue them together.

mod pending;

pub mod error;
pub mod memory;
pub mod mock;
pub mod notify;
pub mod results;
pub mod session;

pub use error::{Error, Result};
pub use memory::MemorySlot;
pub use mock::MockClassifier;
pub use notify::TracingNotifier;
pub use results::ResultStore;
pub use session::SessionStore;
