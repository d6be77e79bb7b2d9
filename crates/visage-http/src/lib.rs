//! JSON HTTP surface for the Visage stores.
//!
//! Exposes an axum [`Router`] over a [`SessionStore`] and a [`ResultStore`];
//! the capture, history, and admin UIs are all clients of this contract.
//! TLS and transport concerns are the caller's responsibility.

pub mod analyses;
pub mod error;
pub mod session;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use visage_core::{classify::EmotionClassifier, slot::IdentitySlot};
use visage_store::{ResultStore, SessionStore};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `VISAGE_*` environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:      String,
  pub port:      u16,
  /// Path of the SQLite database holding the persisted identity slot.
  pub slot_path: PathBuf,
  /// Artificial login latency in milliseconds.
  #[serde(default = "default_login_latency_ms")]
  pub login_latency_ms:   u64,
  /// Artificial inference latency in milliseconds.
  #[serde(default = "default_analyze_latency_ms")]
  pub analyze_latency_ms: u64,
}

fn default_login_latency_ms() -> u64 { 1000 }

fn default_analyze_latency_ms() -> u64 { 1500 }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, C> {
  pub session: Arc<SessionStore<S>>,
  pub results: Arc<ResultStore<C>>,
}

// Manual impl: a derived Clone would demand `S: Clone` and `C: Clone`,
// which the `Arc`s make unnecessary.
impl<S, C> Clone for AppState<S, C> {
  fn clone(&self) -> Self {
    Self {
      session: self.session.clone(),
      results: self.results.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for the store pair.
pub fn router<S, C>(state: AppState<S, C>) -> Router
where
  S: IdentitySlot + 'static,
  C: EmotionClassifier + 'static,
{
  Router::new()
    // Session
    .route(
      "/session",
      get(session::current::<S, C>).delete(session::logout::<S, C>),
    )
    .route("/session/login", post(session::login::<S, C>))
    .route("/session/admin-login", post(session::admin_login::<S, C>))
    // Analyses
    .route(
      "/analyses",
      get(analyses::list::<S, C>).post(analyses::create::<S, C>),
    )
    .route("/analyses/current", get(analyses::current::<S, C>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use serde_json::{Value, json};
  use tower::ServiceExt as _;
  use visage_core::identity::{ADMIN_EMAIL, ADMIN_PASSWORD};
  use visage_store::{MemorySlot, MockClassifier, ResultStore, SessionStore};

  fn make_state() -> AppState<MemorySlot, MockClassifier> {
    AppState {
      session: Arc::new(
        SessionStore::new(MemorySlot::new()).with_latency(Duration::ZERO),
      ),
      results: Arc::new(ResultStore::new(
        MockClassifier::new().with_latency(Duration::ZERO),
      )),
    }
  }

  async fn request(
    state:  AppState<MemorySlot, MockClassifier>,
    method: &str,
    uri:    &str,
    body:   Option<Value>,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    let req = builder.body(body).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  // ── Session ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn login_returns_identity() {
    let state = make_state();
    let resp = request(
      state,
      "POST",
      "/session/login",
      Some(json!({"email": "alice@example.com"})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["is_admin"], false);
  }

  #[tokio::test]
  async fn login_is_idempotent_per_email() {
    let state = make_state();
    let body = json!({"email": "alice@example.com"});

    let first =
      json_body(request(state.clone(), "POST", "/session/login", Some(body.clone())).await)
        .await;
    let second =
      json_body(request(state, "POST", "/session/login", Some(body)).await).await;

    assert_eq!(first["identity_id"], second["identity_id"]);
  }

  #[tokio::test]
  async fn login_empty_email_is_bad_request() {
    let state = make_state();
    let resp =
      request(state, "POST", "/session/login", Some(json!({"email": ""}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn admin_login_with_demo_credentials() {
    let state = make_state();
    let resp = request(
      state,
      "POST",
      "/session/admin-login",
      Some(json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["is_admin"], true);
  }

  #[tokio::test]
  async fn admin_login_wrong_password_is_unauthorized() {
    let state = make_state();
    let resp = request(
      state.clone(),
      "POST",
      "/session/admin-login",
      Some(json!({"email": ADMIN_EMAIL, "password": "wrong"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // The failed attempt must not have authenticated anyone.
    let resp = request(state, "GET", "/session", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn session_lifecycle_over_http() {
    let state = make_state();

    request(
      state.clone(),
      "POST",
      "/session/login",
      Some(json!({"email": "alice@example.com"})),
    )
    .await;

    let resp = request(state.clone(), "GET", "/session", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["email"], "alice@example.com");

    let resp = request(state.clone(), "DELETE", "/session", None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = request(state, "GET", "/session", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  // ── Analyses ────────────────────────────────────────────────────────────────

  fn analyze_body(owner_id: &str, email: &str) -> Value {
    json!({
      "image":       "data:image/png;base64,ZmFrZQ==",
      "owner_id":    owner_id,
      "owner_email": email,
    })
  }

  #[tokio::test]
  async fn analyze_returns_created_result() {
    let state = make_state();
    let owner = uuid::Uuid::new_v4().to_string();

    let resp = request(
      state,
      "POST",
      "/analyses",
      Some(analyze_body(&owner, "alice@example.com")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["owner_id"], owner.as_str());
    let confidence = body["confidence"].as_f64().unwrap();
    assert!((0.5..=1.0).contains(&confidence));
    assert!(
      ["happy", "sad", "neutral", "smile"]
        .contains(&body["emotion"].as_str().unwrap())
    );
  }

  #[tokio::test]
  async fn analyze_empty_image_is_bad_request() {
    let state = make_state();
    let resp = request(
      state,
      "POST",
      "/analyses",
      Some(json!({
        "image":       "",
        "owner_id":    uuid::Uuid::new_v4(),
        "owner_email": "x@example.com",
      })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn list_filters_by_owner() {
    let state = make_state();
    let alice = uuid::Uuid::new_v4().to_string();
    let bob = uuid::Uuid::new_v4().to_string();

    for _ in 0..2 {
      request(
        state.clone(),
        "POST",
        "/analyses",
        Some(analyze_body(&alice, "alice@example.com")),
      )
      .await;
    }
    request(
      state.clone(),
      "POST",
      "/analyses",
      Some(analyze_body(&bob, "bob@example.com")),
    )
    .await;

    let resp =
      request(state.clone(), "GET", &format!("/analyses?owner_id={alice}"), None)
        .await;
    let body = json_body(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // No filters: the admin aggregation view.
    let resp = request(state, "GET", "/analyses", None).await;
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 3);
  }

  #[tokio::test]
  async fn emotion_filters_partition_the_collection() {
    let state = make_state();
    let owner = uuid::Uuid::new_v4().to_string();

    for _ in 0..6 {
      request(
        state.clone(),
        "POST",
        "/analyses",
        Some(analyze_body(&owner, "o@example.com")),
      )
      .await;
    }

    let mut total = 0;
    for emotion in ["happy", "sad", "neutral", "smile"] {
      let resp = request(
        state.clone(),
        "GET",
        &format!("/analyses?emotion={emotion}"),
        None,
      )
      .await;
      total += json_body(resp).await.as_array().unwrap().len();
    }
    assert_eq!(total, 6);
  }

  #[tokio::test]
  async fn current_analysis_is_404_until_first_result() {
    let state = make_state();

    let resp = request(state.clone(), "GET", "/analyses/current", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let owner = uuid::Uuid::new_v4().to_string();
    request(
      state.clone(),
      "POST",
      "/analyses",
      Some(analyze_body(&owner, "o@example.com")),
    )
    .await;

    let resp = request(state, "GET", "/analyses/current", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["owner_id"], owner.as_str());
  }
}
