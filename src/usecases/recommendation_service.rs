//! Recommendation orchestrator: mood text → sentiment → catalog query → tracks.
//!
//! - Guards `submit` on token present, non-blank input and nothing in flight
//! - Runs classification then fetch, strictly in sequence
//! - Degrades classification failures to `Undefined` and fetch failures to an empty list
//! - Always leaves `Loading`, even if an adapter panics or the caller stops awaiting

use crate::domain::{
    AccessToken, Classification, Phase, RecommendationQuery, Recommendations, SessionState,
    SubmitRejection, TrackRecommendation, build_query,
};
use crate::ports::{CatalogPort, SentimentPort};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// What one completed pipeline run did at each step.
#[derive(Debug)]
pub struct PipelineRun {
    pub classification: Classification,
    pub query: RecommendationQuery,
    pub recommendations: Recommendations,
}

/// Result of a submit action.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Guard refused the action; nothing was sent anywhere.
    Rejected(SubmitRejection),
    /// Pipeline ran to the end (possibly with degraded steps). Session is `Success`.
    Completed(PipelineRun),
    /// Pipeline aborted unexpectedly. Session is `Failed` with no results.
    Failed(String),
}

/// Read-only view of the session for the presentation layer.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub input_text: String,
    pub phase: Phase,
    pub has_token: bool,
    pub action_enabled: bool,
    pub results: Vec<TrackRecommendation>,
}

pub struct RecommendationService {
    sentiment: Arc<dyn SentimentPort>,
    catalog: Arc<dyn CatalogPort>,
    session: Arc<RwLock<SessionState>>,
}

impl RecommendationService {
    pub fn new(
        sentiment: Arc<dyn SentimentPort>,
        catalog: Arc<dyn CatalogPort>,
        session: Arc<RwLock<SessionState>>,
    ) -> Self {
        Self {
            sentiment,
            catalog,
            session,
        }
    }

    /// Record a text edit. Does not reset a finished run.
    pub async fn set_input(&self, text: impl Into<String>) {
        self.session.write().await.set_input_text(text);
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let s = self.session.read().await;
        SessionSnapshot {
            input_text: s.input_text().to_string(),
            phase: s.phase(),
            has_token: s.token().is_some(),
            action_enabled: s.action_enabled(),
            results: s.results().to_vec(),
        }
    }

    /// Run the pipeline for the current input text.
    pub async fn submit(&self) -> SubmitOutcome {
        let begun = self.session.write().await.begin_request();
        let (text, token) = match begun {
            Ok(run) => run,
            Err(reason) => {
                debug!(%reason, "submit ignored");
                return SubmitOutcome::Rejected(reason);
            }
        };
        if token.is_expired() {
            warn!("catalog token lifetime has elapsed; request will likely be rejected");
        }
        info!(text_len = text.len(), "recommendation run started");

        let sentiment = Arc::clone(&self.sentiment);
        let catalog = Arc::clone(&self.catalog);
        let session = Arc::clone(&self.session);

        // The driver task owns the Loading → terminal transition, so it happens even if
        // this future is dropped. The inner task isolates adapter panics.
        let driver = tokio::spawn(async move {
            let joined = tokio::spawn(async move {
                run_pipeline(sentiment.as_ref(), catalog.as_ref(), &text, &token).await
            })
            .await;

            let mut s = session.write().await;
            match joined {
                Ok(run) => {
                    s.finish_success(run.recommendations.tracks().to_vec());
                    info!(
                        label = %run.classification.label(),
                        results = s.results().len(),
                        "recommendation run finished"
                    );
                    SubmitOutcome::Completed(run)
                }
                Err(e) => {
                    s.finish_failure();
                    error!(error = %e, "recommendation run aborted");
                    SubmitOutcome::Failed(e.to_string())
                }
            }
        });

        match driver.await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.session.write().await.finish_failure();
                error!(error = %e, "recommendation driver failed");
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Classification, then query, then fetch. Never fails: each boundary degrades.
async fn run_pipeline(
    sentiment: &dyn SentimentPort,
    catalog: &dyn CatalogPort,
    text: &str,
    token: &AccessToken,
) -> PipelineRun {
    let classification = Classification::from(sentiment.classify(text).await);
    if let Classification::Degraded(e) = &classification {
        warn!(error = %e, "sentiment unavailable, falling back to UNDEFINED");
    }

    let query = build_query(classification.label());
    debug!(
        label = %classification.label(),
        seeds = ?query.seed_categories,
        "query built"
    );

    let recommendations = match Recommendations::from(catalog.fetch(&query, token).await) {
        Recommendations::Tracks(mut tracks) => {
            tracks.truncate(query.result_limit as usize);
            Recommendations::Tracks(tracks)
        }
        Recommendations::Degraded(e) => {
            warn!(error = %e, "recommendations unavailable, showing none");
            Recommendations::Degraded(e)
        }
    };

    PipelineRun {
        classification,
        query,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, SentimentLabel};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum SentimentBehavior {
        Label(SentimentLabel),
        NetworkError,
        Panic,
    }

    struct StubSentiment(SentimentBehavior);

    #[async_trait]
    impl SentimentPort for StubSentiment {
        async fn classify(&self, _text: &str) -> Result<SentimentLabel, DomainError> {
            match self.0 {
                SentimentBehavior::Label(label) => Ok(label),
                SentimentBehavior::NetworkError => {
                    Err(DomainError::Classification("connection refused".into()))
                }
                SentimentBehavior::Panic => panic!("inference client blew up"),
            }
        }
    }

    /// Catalog double: records calls and the last query; returns `count` tracks or an error.
    struct StubCatalog {
        count: Option<usize>,
        calls: AtomicUsize,
        last_query: Mutex<Option<RecommendationQuery>>,
    }

    impl StubCatalog {
        fn returning(count: usize) -> Self {
            Self {
                count: Some(count),
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }
        }

        fn malformed() -> Self {
            Self {
                count: None,
                ..Self::returning(0)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_query(&self) -> RecommendationQuery {
            self.last_query.lock().unwrap().clone().unwrap()
        }
    }

    #[async_trait]
    impl CatalogPort for StubCatalog {
        async fn fetch(
            &self,
            query: &RecommendationQuery,
            _token: &AccessToken,
        ) -> Result<Vec<TrackRecommendation>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = Some(query.clone());
            match self.count {
                Some(n) => Ok((0..n)
                    .map(|i| TrackRecommendation {
                        title: format!("Track {i}"),
                        artist: format!("Artist {i}"),
                        link: format!("https://open.spotify.com/track/{i}"),
                    })
                    .collect()),
                None => Err(DomainError::Recommendation(
                    "Unexpected response structure: missing tracks".into(),
                )),
            }
        }
    }

    fn service(
        sentiment: SentimentBehavior,
        catalog: Arc<StubCatalog>,
        with_token: bool,
    ) -> RecommendationService {
        let mut state = SessionState::new();
        if with_token {
            state.set_token(AccessToken::new("tok", None));
        }
        RecommendationService::new(
            Arc::new(StubSentiment(sentiment)),
            catalog,
            Arc::new(RwLock::new(state)),
        )
    }

    #[tokio::test]
    async fn test_happy_scenario_uses_upbeat_query() {
        let catalog = Arc::new(StubCatalog::returning(5));
        let svc = service(
            SentimentBehavior::Label(SentimentLabel::Positive),
            catalog.clone(),
            true,
        );
        svc.set_input("I am so happy today").await;

        let SubmitOutcome::Completed(run) = svc.submit().await else {
            panic!("expected completed run");
        };
        assert_eq!(run.classification.label(), SentimentLabel::Positive);
        let q = catalog.last_query();
        assert_eq!(q.seed_categories, vec!["happy", "pop", "dance", "k-pop"]);
        assert_eq!(q.bound("min_valence"), Some(0.7));

        let snap = svc.snapshot().await;
        assert_eq!(snap.phase, Phase::Success);
        assert_eq!(snap.results.len(), 5);
        assert!(snap.results.iter().all(|t| !t.title.is_empty()
            && !t.artist.is_empty()
            && t.link.starts_with("https://")));
    }

    #[tokio::test]
    async fn test_negative_scenario_uses_mellow_query() {
        let catalog = Arc::new(StubCatalog::returning(3));
        let svc = service(
            SentimentBehavior::Label(SentimentLabel::Negative),
            catalog.clone(),
            true,
        );
        svc.set_input("everything is terrible").await;
        svc.submit().await;
        assert_eq!(
            catalog.last_query().seed_categories,
            vec!["sad", "acoustic", "chill", "rainy-day"]
        );
        assert_eq!(svc.snapshot().await.results.len(), 3);
    }

    #[tokio::test]
    async fn test_classifier_failure_still_fetches_mellow() {
        let catalog = Arc::new(StubCatalog::returning(2));
        let svc = service(SentimentBehavior::NetworkError, catalog.clone(), true);
        svc.set_input("hmm").await;

        let SubmitOutcome::Completed(run) = svc.submit().await else {
            panic!("expected completed run");
        };
        assert!(run.classification.is_degraded());
        assert_eq!(run.classification.label(), SentimentLabel::Undefined);
        assert_eq!(catalog.calls(), 1);
        assert_eq!(catalog.last_query().seed_categories[0], "sad");
        assert_eq!(catalog.last_query().bound("max_valence"), Some(0.3));
        assert_ne!(svc.snapshot().await.phase, Phase::Loading);
    }

    #[tokio::test]
    async fn test_malformed_catalog_body_yields_empty_list() {
        let catalog = Arc::new(StubCatalog::malformed());
        let svc = service(
            SentimentBehavior::Label(SentimentLabel::Positive),
            catalog.clone(),
            true,
        );
        svc.set_input("great").await;

        let SubmitOutcome::Completed(run) = svc.submit().await else {
            panic!("expected completed run");
        };
        assert!(run.recommendations.is_degraded());
        let snap = svc.snapshot().await;
        assert!(snap.results.is_empty());
        assert_eq!(snap.phase, Phase::Success);
    }

    #[tokio::test]
    async fn test_no_token_is_noop() {
        let catalog = Arc::new(StubCatalog::returning(5));
        let svc = service(
            SentimentBehavior::Label(SentimentLabel::Positive),
            catalog.clone(),
            false,
        );
        svc.set_input("I am so happy today").await;

        assert!(matches!(
            svc.submit().await,
            SubmitOutcome::Rejected(SubmitRejection::NoToken)
        ));
        assert_eq!(catalog.calls(), 0);
        assert_eq!(svc.snapshot().await.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_blank_input_is_noop() {
        let catalog = Arc::new(StubCatalog::returning(5));
        let svc = service(
            SentimentBehavior::Label(SentimentLabel::Positive),
            catalog.clone(),
            true,
        );
        svc.set_input("   ").await;
        assert!(matches!(
            svc.submit().await,
            SubmitOutcome::Rejected(SubmitRejection::EmptyInput)
        ));
        assert_eq!(catalog.calls(), 0);
    }

    #[tokio::test]
    async fn test_results_capped_at_limit() {
        let catalog = Arc::new(StubCatalog::returning(9));
        let svc = service(
            SentimentBehavior::Label(SentimentLabel::Negative),
            catalog,
            true,
        );
        svc.set_input("tired").await;
        svc.submit().await;
        assert_eq!(svc.snapshot().await.results.len(), 5);
    }

    #[tokio::test]
    async fn test_adapter_panic_ends_in_failed_not_loading() {
        let catalog = Arc::new(StubCatalog::returning(5));
        let svc = service(SentimentBehavior::Panic, catalog.clone(), true);
        svc.set_input("boom").await;

        assert!(matches!(svc.submit().await, SubmitOutcome::Failed(_)));
        let snap = svc.snapshot().await;
        assert_eq!(snap.phase, Phase::Failed);
        assert!(snap.results.is_empty());
        assert_eq!(catalog.calls(), 0);
        // Next submit is allowed again.
        assert!(snap.action_enabled);
    }

    #[tokio::test]
    async fn test_new_run_replaces_previous_results() {
        let catalog = Arc::new(StubCatalog::returning(4));
        let svc = service(
            SentimentBehavior::Label(SentimentLabel::Positive),
            catalog.clone(),
            true,
        );
        svc.set_input("yay").await;
        svc.submit().await;
        assert_eq!(svc.snapshot().await.results.len(), 4);

        svc.set_input("yay again").await;
        assert_eq!(svc.snapshot().await.phase, Phase::Success);
        svc.submit().await;
        assert_eq!(catalog.calls(), 2);
        assert_eq!(svc.snapshot().await.results.len(), 4);
    }
}
