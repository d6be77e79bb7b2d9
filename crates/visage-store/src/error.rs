//! Error type for `visage-store`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] visage_core::Error),

  /// The durable slot failed during a login. The current identity is
  /// unchanged.
  #[error("identity slot error: {0}")]
  Slot(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The classifier failed. Nothing was appended to the history.
  #[error("classifier error: {0}")]
  Classifier(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// `true` when the failure is the fixed-credential mismatch.
  pub fn is_invalid_credentials(&self) -> bool {
    matches!(self, Self::Core(visage_core::Error::InvalidCredentials))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
