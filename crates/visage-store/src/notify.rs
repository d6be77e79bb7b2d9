//! Notice observers.

use visage_core::notify::{Notice, Notifier};

/// Logs notices through `tracing` — the server's stand-in for UI toasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
  fn notify(&self, notice: &Notice) {
    match notice {
      Notice::LoginSucceeded { email, is_admin } => {
        tracing::info!(%email, is_admin, "logged in");
      }
      Notice::LoginFailed { reason } => {
        tracing::warn!("login failed: {reason}");
      }
      Notice::LoggedOut => tracing::info!("logged out"),
      Notice::AnalysisFailed { reason } => {
        tracing::warn!("analysis failed: {reason}");
      }
    }
  }
}
