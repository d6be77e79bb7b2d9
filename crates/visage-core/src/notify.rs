//! Out-of-band user-facing notices.
//!
//! Store operations return typed results; notices are an optional observer
//! for human-facing surfaces (the toast channel of the original UI), never
//! the only failure signal.

/// A human-facing event emitted alongside a store operation's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
  LoginSucceeded { email: String, is_admin: bool },
  LoginFailed { reason: String },
  LoggedOut,
  AnalysisFailed { reason: String },
}

/// Observer for [`Notice`]s.
pub trait Notifier: Send + Sync {
  fn notify(&self, notice: &Notice);
}

/// Discards every notice. The default observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
  fn notify(&self, _notice: &Notice) {}
}
