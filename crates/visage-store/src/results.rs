//! [`ResultStore`] — owns the append-only analysis history.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;
use visage_core::{
  analysis::{AnalysisResult, Emotion, ImageHandle},
  classify::EmotionClassifier,
  notify::{Notice, Notifier, NullNotifier},
};

use crate::{Error, Result, pending::Pending};

// ─── Store ───────────────────────────────────────────────────────────────────

/// Owns the newest-first collection of [`AnalysisResult`]s and serves it.
///
/// The collection is append-only for the life of the process — no update or
/// delete exists anywhere in the result lifecycle. Concurrent `analyze`
/// calls interleave freely; the collection reflects completion order, not
/// submission order.
pub struct ResultStore<C> {
  classifier: C,
  results:    RwLock<Vec<AnalysisResult>>,
  current:    RwLock<Option<AnalysisResult>>,
  pending:    Pending,
  notifier:   Arc<dyn Notifier>,
}

impl<C: EmotionClassifier> ResultStore<C> {
  pub fn new(classifier: C) -> Self {
    Self {
      classifier,
      results: RwLock::new(Vec::new()),
      current: RwLock::new(None),
      pending: Pending::default(),
      notifier: Arc::new(NullNotifier),
    }
  }

  /// Attach a notice observer.
  pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
    self.notifier = notifier;
    self
  }

  // ── Analysis ──────────────────────────────────────────────────────────────

  /// Run `image` through the classifier and record the outcome.
  ///
  /// The owner is taken on trust — the store does not require it to exist
  /// in any session directory. The new result is prepended (newest first)
  /// and becomes the current result. A classifier failure records nothing.
  pub async fn analyze(
    &self,
    image:       ImageHandle,
    owner_id:    Uuid,
    owner_email: &str,
  ) -> Result<AnalysisResult> {
    let _pending = self.pending.enter();

    let classification = match self.classifier.classify(&image).await {
      Ok(c) => c,
      Err(e) => {
        self
          .notifier
          .notify(&Notice::AnalysisFailed { reason: e.to_string() });
        return Err(Error::Classifier(Box::new(e)));
      }
    };

    let result = AnalysisResult {
      result_id:   Uuid::now_v7(),
      owner_id,
      owner_email: owner_email.to_owned(),
      emotion:     classification.emotion,
      confidence:  classification.confidence,
      created_at:  Utc::now(),
      image,
    };

    self.results.write().await.insert(0, result.clone());
    *self.current.write().await = Some(result.clone());
    Ok(result)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// The most recently completed result, if any.
  pub async fn current(&self) -> Option<AnalysisResult> {
    self.current.read().await.clone()
  }

  /// `true` while an analysis is in flight.
  pub fn is_loading(&self) -> bool { self.pending.any() }

  /// All results owned by `owner_id`, newest first.
  pub async fn user_results(&self, owner_id: Uuid) -> Vec<AnalysisResult> {
    self
      .results
      .read()
      .await
      .iter()
      .filter(|r| r.owner_id == owner_id)
      .cloned()
      .collect()
  }

  /// The full collection, newest first — the administrative aggregation
  /// view.
  pub async fn all_results(&self) -> Vec<AnalysisResult> {
    self.results.read().await.clone()
  }

  /// All results with `emotion`, newest first.
  pub async fn results_by_emotion(
    &self,
    emotion: Emotion,
  ) -> Vec<AnalysisResult> {
    self
      .results
      .read()
      .await
      .iter()
      .filter(|r| r.emotion == emotion)
      .cloned()
      .collect()
  }
}
