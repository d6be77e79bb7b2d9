//! The emotion-classification capability trait.
//!
//! The store's collection management is classifier-agnostic: the demo ships
//! a mock that draws a uniform category, and a real model-backed
//! implementation substitutes behind the same trait without touching the
//! stores.

use std::future::Future;

use crate::analysis::{Classification, ImageHandle};

/// Turn an opaque image handle into an emotion classification.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait EmotionClassifier: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Classify `image`. Implementations own their inference latency.
  fn classify<'a>(
    &'a self,
    image: &'a ImageHandle,
  ) -> impl Future<Output = Result<Classification, Self::Error>> + Send + 'a;
}
