//! The emotion taxonomy and the analysis result record.
//!
//! A result is an immutable record of one completed emotion assignment.
//! Results are never updated or deleted; the owning collection is
//! append-only for the life of the process.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Emotion ─────────────────────────────────────────────────────────────────

/// The four categories the demo classifier assigns.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Emotion {
  Happy,
  Sad,
  Neutral,
  Smile,
}

// ─── ImageHandle ─────────────────────────────────────────────────────────────

/// An opaque encoded-image reference (in practice a base-64 data URI).
///
/// The store layer never decodes or validates the payload beyond requiring
/// it to be non-empty; an implementer replacing the mock classifier decides
/// what to do with the bytes.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHandle(String);

impl ImageHandle {
  /// Wrap an encoded image payload. Empty payloads are rejected.
  pub fn new(raw: impl Into<String>) -> Result<Self> {
    let raw = raw.into();
    if raw.is_empty() {
      return Err(Error::EmptyImage);
    }
    Ok(Self(raw))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

// Data URIs run to megabytes; keep the payload out of debug output.
impl fmt::Debug for ImageHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ImageHandle({} bytes)", self.0.len())
  }
}

// ─── Classification ──────────────────────────────────────────────────────────

/// Output of an [`EmotionClassifier`](crate::classify::EmotionClassifier).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
  pub emotion:    Emotion,
  /// Classifier confidence in [0, 1]. The mock generator never goes
  /// below 0.5.
  pub confidence: f64,
}

// ─── AnalysisResult ──────────────────────────────────────────────────────────

/// One completed emotion assignment, tied to an owner and an image.
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
  /// Time-derived (UUIDv7), so ids sort roughly by creation order.
  pub result_id:   Uuid,
  pub owner_id:    Uuid,
  /// Denormalised so display surfaces need no identity join.
  pub owner_email: String,
  pub emotion:     Emotion,
  pub confidence:  f64,
  pub created_at:  DateTime<Utc>,
  pub image:       ImageHandle,
}
