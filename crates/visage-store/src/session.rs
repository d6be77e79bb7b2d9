//! [`SessionStore`] — owns the current authenticated identity.

use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::sync::RwLock;
use visage_core::{
  identity::{ADMIN_EMAIL, ADMIN_PASSWORD, DEMO_USER_EMAIL, Identity},
  notify::{Notice, Notifier, NullNotifier},
  slot::IdentitySlot,
};

use crate::{Error, Result, pending::Pending};

/// Default artificial login latency — models a network round trip.
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(1000);

// ─── Store ───────────────────────────────────────────────────────────────────

/// Holds at most one current [`Identity`] and provides identity transitions.
///
/// The identity directory is pre-seeded with one regular demo user and the
/// fixed administrative record. Regular logins for unseen emails synthesize
/// and register a fresh identity, so repeat logins are idempotent within a
/// process. The current identity is mirrored into the injected durable slot
/// on every successful login.
pub struct SessionStore<S> {
  slot:      S,
  admin:     Identity,
  directory: RwLock<HashMap<String, Identity>>,
  current:   RwLock<Option<Identity>>,
  pending:   Pending,
  latency:   Duration,
  notifier:  Arc<dyn Notifier>,
}

impl<S: IdentitySlot> SessionStore<S> {
  /// A store with the demo directory seed and the default latency.
  pub fn new(slot: S) -> Self {
    let admin = Identity::new_admin(ADMIN_EMAIL);
    let mut directory = HashMap::new();
    directory
      .insert(DEMO_USER_EMAIL.to_owned(), Identity::new(DEMO_USER_EMAIL));
    directory.insert(ADMIN_EMAIL.to_owned(), admin.clone());

    Self {
      slot,
      admin,
      directory: RwLock::new(directory),
      current: RwLock::new(None),
      pending: Pending::default(),
      latency: DEFAULT_LOGIN_LATENCY,
      notifier: Arc::new(NullNotifier),
    }
  }

  /// Replace the artificial latency. Tests run with `Duration::ZERO`.
  pub fn with_latency(mut self, latency: Duration) -> Self {
    self.latency = latency;
    self
  }

  /// Attach a notice observer.
  pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
    self.notifier = notifier;
    self
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// The current identity, if any.
  pub async fn current(&self) -> Option<Identity> {
    self.current.read().await.clone()
  }

  /// `true` while a login is suspended at its artificial-latency point.
  pub fn is_loading(&self) -> bool { self.pending.any() }

  // ── Identity transitions ──────────────────────────────────────────────────

  /// Regular login: resolve or synthesize the identity for `email`, persist
  /// it, and make it current.
  ///
  /// Re-login while already authenticated is permitted and overwrites. On a
  /// slot failure the current identity is unchanged.
  pub async fn login(&self, email: &str) -> Result<Identity> {
    if email.is_empty() {
      return Err(visage_core::Error::EmptyEmail.into());
    }

    let _pending = self.pending.enter();
    tokio::time::sleep(self.latency).await;

    let identity = {
      let mut directory = self.directory.write().await;
      directory
        .entry(email.to_owned())
        .or_insert_with(|| Identity::new(email))
        .clone()
    };

    self.commit(identity).await
  }

  /// Privileged login: exact, case-sensitive match against the fixed
  /// administrative credential pair. A mismatch leaves all state unchanged.
  pub async fn admin_login(
    &self,
    email:    &str,
    password: &str,
  ) -> Result<Identity> {
    if email.is_empty() {
      return Err(visage_core::Error::EmptyEmail.into());
    }
    if password.is_empty() {
      return Err(visage_core::Error::EmptyPassword.into());
    }

    let _pending = self.pending.enter();
    tokio::time::sleep(self.latency).await;

    if email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
      self.notifier.notify(&Notice::LoginFailed {
        reason: "invalid admin credentials".to_owned(),
      });
      return Err(visage_core::Error::InvalidCredentials.into());
    }

    self.commit(self.admin.clone()).await
  }

  /// Persist `identity` to the slot, then make it current.
  /// Ordering matters: a slot failure must leave the current identity as-is.
  async fn commit(&self, identity: Identity) -> Result<Identity> {
    if let Err(e) = self.slot.save(&identity).await {
      self
        .notifier
        .notify(&Notice::LoginFailed { reason: e.to_string() });
      return Err(Error::Slot(Box::new(e)));
    }

    *self.current.write().await = Some(identity.clone());
    self.notifier.notify(&Notice::LoginSucceeded {
      email:    identity.email.clone(),
      is_admin: identity.is_admin,
    });
    Ok(identity)
  }

  /// Clear the current identity and the durable slot. Always succeeds; a
  /// failed slot clear is logged and otherwise ignored.
  pub async fn logout(&self) {
    *self.current.write().await = None;
    if let Err(e) = self.slot.clear().await {
      tracing::warn!("failed to clear identity slot on logout: {e}");
    }
    self.notifier.notify(&Notice::LoggedOut);
  }

  /// Process-start hook: seed the current identity from the durable slot.
  ///
  /// Well-formed content becomes current without directory validation.
  /// Unreadable content is logged, the slot is cleared, and the session
  /// starts unauthenticated. Never fails.
  pub async fn restore(&self) -> Option<Identity> {
    match self.slot.load().await {
      Ok(Some(identity)) => {
        *self.current.write().await = Some(identity.clone());
        Some(identity)
      }
      Ok(None) => None,
      Err(e) => {
        tracing::warn!("discarding unreadable identity slot: {e}");
        if let Err(e) = self.slot.clear().await {
          tracing::warn!("failed to clear identity slot: {e}");
        }
        None
      }
    }
  }
}
