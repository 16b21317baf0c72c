//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    AccessToken, DomainError, RecommendationQuery, SentimentLabel, TrackRecommendation,
};

/// Catalog credential exchange (client-credentials grant).
#[async_trait::async_trait]
pub trait CredentialPort: Send + Sync {
    /// Exchange the configured client id/secret for a bearer token. Single attempt.
    async fn acquire_token(&self) -> Result<AccessToken, DomainError>;
}

/// Text sentiment inference.
#[async_trait::async_trait]
pub trait SentimentPort: Send + Sync {
    /// Classify non-empty text. Returns the top-ranked label.
    ///
    /// Errors are expected (transport, shape mismatch); the caller degrades them to
    /// `SentimentLabel::Undefined`.
    async fn classify(&self, text: &str) -> Result<SentimentLabel, DomainError>;
}

/// Music catalog recommendations.
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetch tracks matching `query`, authorized by `token`. Service order is preserved and the
    /// list holds at most `query.result_limit` entries.
    async fn fetch(
        &self,
        query: &RecommendationQuery,
        token: &AccessToken,
    ) -> Result<Vec<TrackRecommendation>, DomainError>;
}
