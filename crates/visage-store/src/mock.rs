//! [`MockClassifier`] — uniform category, uniform confidence.

use std::{convert::Infallible, time::Duration};

use rand::Rng as _;
use strum::IntoEnumIterator as _;
use visage_core::{
  analysis::{Classification, Emotion, ImageHandle},
  classify::EmotionClassifier,
};

/// Default artificial inference latency.
pub const DEFAULT_ANALYZE_LATENCY: Duration = Duration::from_millis(1500);

/// Assigns a uniformly random [`Emotion`] with confidence drawn uniformly
/// from [0.5, 1.0]. The image payload is never inspected.
#[derive(Debug, Clone)]
pub struct MockClassifier {
  latency: Duration,
}

impl MockClassifier {
  pub fn new() -> Self { Self { latency: DEFAULT_ANALYZE_LATENCY } }

  /// Replace the artificial latency. Tests run with `Duration::ZERO`.
  pub fn with_latency(mut self, latency: Duration) -> Self {
    self.latency = latency;
    self
  }
}

impl Default for MockClassifier {
  fn default() -> Self { Self::new() }
}

impl EmotionClassifier for MockClassifier {
  type Error = Infallible;

  async fn classify(
    &self,
    _image: &ImageHandle,
  ) -> Result<Classification, Infallible> {
    tokio::time::sleep(self.latency).await;

    // ThreadRng is not Send; keep it clear of the await above.
    let mut rng = rand::thread_rng();
    let variants: Vec<Emotion> = Emotion::iter().collect();
    let emotion = variants[rng.gen_range(0..variants.len())];
    let confidence = rng.gen_range(0.5..=1.0);

    Ok(Classification { emotion, confidence })
  }
}
