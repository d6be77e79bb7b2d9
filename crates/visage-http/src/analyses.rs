//! Handlers for `/analyses` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/analyses` | Body: [`AnalyzeBody`]; returns 201 + the result |
//! | `GET`  | `/analyses` | Optional `?owner_id=<uuid>`, `?emotion=<category>`; no filters is the admin view |
//! | `GET`  | `/analyses/current` | 404 before the first completed analysis |

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use visage_core::{
  analysis::{AnalysisResult, Emotion, ImageHandle},
  classify::EmotionClassifier,
  slot::IdentitySlot,
};

use crate::{AppState, error::ApiError};

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeBody {
  /// Opaque encoded-image payload (expected: a base-64 data URI).
  pub image:       String,
  pub owner_id:    Uuid,
  pub owner_email: String,
}

/// `POST /analyses`
pub async fn create<S, C>(
  State(state): State<AppState<S, C>>,
  Json(body): Json<AnalyzeBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: IdentitySlot,
  C: EmotionClassifier,
{
  let image = ImageHandle::new(body.image)
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
  let result = state
    .results
    .analyze(image, body.owner_id, &body.owner_email)
    .await?;
  Ok((StatusCode::CREATED, Json(result)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Restrict to one owner's history.
  pub owner_id: Option<Uuid>,
  /// Restrict to one emotion category.
  pub emotion:  Option<Emotion>,
}

/// `GET /analyses[?owner_id=...][&emotion=...]`
pub async fn list<S, C>(
  State(state): State<AppState<S, C>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<AnalysisResult>>, ApiError>
where
  S: IdentitySlot,
  C: EmotionClassifier,
{
  let mut results = match params.owner_id {
    Some(owner_id) => state.results.user_results(owner_id).await,
    None => state.results.all_results().await,
  };

  if let Some(emotion) = params.emotion {
    results.retain(|r| r.emotion == emotion);
  }

  Ok(Json(results))
}

// ─── Current ──────────────────────────────────────────────────────────────────

/// `GET /analyses/current`
pub async fn current<S, C>(
  State(state): State<AppState<S, C>>,
) -> Result<Json<AnalysisResult>, ApiError>
where
  S: IdentitySlot,
  C: EmotionClassifier,
{
  let result = state
    .results
    .current()
    .await
    .ok_or_else(|| ApiError::NotFound("no completed analysis".to_owned()))?;
  Ok(Json(result))
}
