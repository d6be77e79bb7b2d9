//! Error types for `visage-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Login requires a non-empty email.
  #[error("email must not be empty")]
  EmptyEmail,

  /// Privileged login requires a non-empty password.
  #[error("password must not be empty")]
  EmptyPassword,

  /// Analysis requires a non-empty image handle.
  #[error("image handle must not be empty")]
  EmptyImage,

  /// The supplied credentials do not match the fixed administrative pair.
  #[error("invalid admin credentials")]
  InvalidCredentials,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
