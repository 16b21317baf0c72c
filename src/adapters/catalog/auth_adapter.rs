//! Implements CredentialPort with Spotify's client-credentials flow.
//!
//! POST to the token endpoint with HTTP Basic `client_id:client_secret` and
//! `grant_type=client_credentials`. One attempt, no refresh.

use crate::domain::{AccessToken, DomainError};
use crate::ports::CredentialPort;
use crate::shared::http::body_snippet;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Credential adapter. Client id/secret are optional so a missing configuration degrades
/// to an auth failure instead of aborting startup.
pub struct SpotifyAuthAdapter {
    client: reqwest::Client,
    token_url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl SpotifyAuthAdapter {
    pub fn new(
        client: reqwest::Client,
        token_url: String,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Self {
        Self {
            client,
            token_url,
            client_id,
            client_secret,
        }
    }
}

#[async_trait]
impl CredentialPort for SpotifyAuthAdapter {
    async fn acquire_token(&self) -> Result<AccessToken, DomainError> {
        let (Some(client_id), Some(client_secret)) = (&self.client_id, &self.client_secret) else {
            return Err(DomainError::Auth(
                "client id/secret not configured (SPOTIFY_CLIENT_ID, SPOTIFY_CLIENT_SECRET)"
                    .to_string(),
            ));
        };

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| DomainError::Auth(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body_snippet(&text), "token endpoint returned error");
            return Err(DomainError::Auth(format!(
                "HTTP error {}: {}",
                status,
                body_snippet(&text)
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Auth(format!("Failed to parse token response: {}", e)))?;
        if body.access_token.trim().is_empty() {
            return Err(DomainError::Auth("empty access_token".to_string()));
        }

        info!(
            token_type = body.token_type.as_deref().unwrap_or("unknown"),
            expires_in = ?body.expires_in,
            "catalog access token acquired"
        );

        Ok(AccessToken::new(
            body.access_token,
            body.expires_in.map(Duration::from_secs),
        ))
    }
}
