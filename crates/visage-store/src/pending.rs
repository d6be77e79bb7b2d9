//! In-flight operation counting behind the stores' `is_loading` flags.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts operations currently suspended at an artificial-latency point.
/// Concurrent operations are permitted; the flag is the count being
/// non-zero.
#[derive(Debug, Default)]
pub(crate) struct Pending(AtomicUsize);

impl Pending {
  pub(crate) fn any(&self) -> bool { self.0.load(Ordering::Acquire) > 0 }

  /// Increment for the lifetime of the returned guard.
  pub(crate) fn enter(&self) -> PendingGuard<'_> {
    self.0.fetch_add(1, Ordering::AcqRel);
    PendingGuard(&self.0)
  }
}

/// Decrements the counter on drop, including on early error returns.
pub(crate) struct PendingGuard<'a>(&'a AtomicUsize);

impl Drop for PendingGuard<'_> {
  fn drop(&mut self) { self.0.fetch_sub(1, Ordering::AcqRel); }
}
