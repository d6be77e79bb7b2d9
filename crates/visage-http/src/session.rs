//! Handlers for `/session` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/session/login` | Body: `{"email":"..."}` |
//! | `POST`   | `/session/admin-login` | Body: `{"email":"...","password":"..."}`; 401 on mismatch |
//! | `GET`    | `/session` | 404 when unauthenticated |
//! | `DELETE` | `/session` | Always 204 |

use axum::{
  Json, extract::State, http::StatusCode, response::IntoResponse,
};
use serde::Deserialize;
use visage_core::{
  classify::EmotionClassifier, identity::Identity, slot::IdentitySlot,
};

use crate::{AppState, error::ApiError};

// ─── Login ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub email: String,
}

/// `POST /session/login` — body: `{"email":"..."}`
pub async fn login<S, C>(
  State(state): State<AppState<S, C>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<Identity>, ApiError>
where
  S: IdentitySlot,
  C: EmotionClassifier,
{
  let identity = state.session.login(&body.email).await?;
  Ok(Json(identity))
}

// ─── Admin login ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AdminLoginBody {
  pub email:    String,
  pub password: String,
}

/// `POST /session/admin-login`
pub async fn admin_login<S, C>(
  State(state): State<AppState<S, C>>,
  Json(body): Json<AdminLoginBody>,
) -> Result<Json<Identity>, ApiError>
where
  S: IdentitySlot,
  C: EmotionClassifier,
{
  let identity = state
    .session
    .admin_login(&body.email, &body.password)
    .await?;
  Ok(Json(identity))
}

// ─── Current ──────────────────────────────────────────────────────────────────

/// `GET /session`
pub async fn current<S, C>(
  State(state): State<AppState<S, C>>,
) -> Result<Json<Identity>, ApiError>
where
  S: IdentitySlot,
  C: EmotionClassifier,
{
  let identity = state
    .session
    .current()
    .await
    .ok_or_else(|| ApiError::NotFound("no current identity".to_owned()))?;
  Ok(Json(identity))
}

// ─── Logout ───────────────────────────────────────────────────────────────────

/// `DELETE /session` — always succeeds.
pub async fn logout<S, C>(
  State(state): State<AppState<S, C>>,
) -> impl IntoResponse
where
  S: IdentitySlot,
  C: EmotionClassifier,
{
  state.session.logout().await;
  StatusCode::NO_CONTENT
}
