//! Implements CatalogPort against the Spotify Web API `GET /recommendations`.

use super::mapper::{query_params, tracks_from_body};
use crate::domain::{AccessToken, DomainError, RecommendationQuery, TrackRecommendation};
use crate::ports::CatalogPort;
use crate::shared::http::body_snippet;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

/// Catalog gateway. Stateless apart from the shared HTTP client; the token is passed per call.
pub struct SpotifyCatalogAdapter {
    client: reqwest::Client,
    api_url: String,
}

impl SpotifyCatalogAdapter {
    /// `api_url` is the Web API base, e.g. `https://api.spotify.com/v1`.
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn recommendations_url(&self) -> String {
        format!("{}/recommendations", self.api_url)
    }
}

#[async_trait]
impl CatalogPort for SpotifyCatalogAdapter {
    async fn fetch(
        &self,
        query: &RecommendationQuery,
        token: &AccessToken,
    ) -> Result<Vec<TrackRecommendation>, DomainError> {
        let params = query_params(query);
        debug!(?params, "requesting recommendations");

        let response = self
            .client
            .get(self.recommendations_url())
            .bearer_auth(token.secret())
            .query(&params)
            .send()
            .await
            .map_err(|e| DomainError::Recommendation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            DomainError::Recommendation(format!("Failed to read response body: {}", e))
        })?;

        if status == StatusCode::UNAUTHORIZED {
            warn!(
                expired = token.is_expired(),
                "catalog rejected access token; tokens are not refreshed"
            );
            return Err(DomainError::Unauthorized(body_snippet(&text)));
        }
        if !status.is_success() {
            warn!(status = %status, body = %body_snippet(&text), "catalog API returned error");
            return Err(DomainError::Recommendation(format!(
                "API error {}: {}",
                status,
                body_snippet(&text)
            )));
        }

        let tracks = tracks_from_body(&text, query.result_limit as usize)?;
        info!(count = tracks.len(), "recommendations received");
        Ok(tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SentimentLabel, build_query};
    use crate::shared::http::{build_client, stub};
    use std::time::Duration;

    fn adapter(base: &str) -> SpotifyCatalogAdapter {
        SpotifyCatalogAdapter::new(
            build_client(Duration::from_secs(5)).unwrap(),
            format!("{}/v1/", base),
        )
    }

    #[tokio::test]
    async fn test_fetch_sends_query_and_bearer() {
        let server = stub::serve_once(
            200,
            r#"{"tracks": [{"name": "Happy", "artists": [{"name": "Pharrell Williams"}],
                "external_urls": {"spotify": "https://open.spotify.com/track/60nZcImufyMA1MKQY3dcCH"}}]}"#,
        )
        .await;
        let token = AccessToken::new("tok-123", None);
        let tracks = adapter(&server.base_url)
            .fetch(&build_query(SentimentLabel::Positive), &token)
            .await
            .unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Happy");

        let request = server.request().await;
        let request_line = request.lines().next().unwrap();
        assert!(request_line.starts_with("GET /v1/recommendations?"));
        assert!(request_line.contains("seed_genres=happy%2Cpop%2Cdance%2Ck-pop"));
        assert!(request_line.contains("limit=5"));
        assert!(request_line.contains("min_valence=0.7"));
        assert!(request_line.contains("min_energy=0.7"));
        assert!(request_line.contains("max_mode=1"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer tok-123"));
    }

    #[tokio::test]
    async fn test_missing_tracks_is_recommendation_failure() {
        let server = stub::serve_once(200, r#"{"seeds": []}"#).await;
        let err = adapter(&server.base_url)
            .fetch(&build_query(SentimentLabel::Negative), &AccessToken::new("t", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Recommendation(_)));
    }

    #[tokio::test]
    async fn test_unauthorized_is_distinct() {
        let server = stub::serve_once(
            401,
            r#"{"error": {"status": 401, "message": "The access token expired"}}"#,
        )
        .await;
        let err = adapter(&server.base_url)
            .fetch(&build_query(SentimentLabel::Negative), &AccessToken::new("t", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_server_error_is_recommendation_failure() {
        let server = stub::serve_once(503, "{}").await;
        let err = adapter(&server.base_url)
            .fetch(&build_query(SentimentLabel::Negative), &AccessToken::new("t", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Recommendation(_)));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let url = stub::closed_url().await;
        let err = adapter(&url)
            .fetch(&build_query(SentimentLabel::Positive), &AccessToken::new("t", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Recommendation(_)));
    }
}
