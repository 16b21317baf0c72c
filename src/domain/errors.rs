//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Token exchange failed (or credentials are not configured).
    #[error("Catalog authentication failed: {0}")]
    Auth(String),

    /// Inference call failed or returned an unexpected shape.
    #[error("Sentiment classification failed: {0}")]
    Classification(String),

    /// Catalog call failed or returned an unexpected shape.
    #[error("Recommendation request failed: {0}")]
    Recommendation(String),

    /// Catalog rejected the bearer token (HTTP 401). Tokens are never refreshed.
    #[error("Catalog rejected the access token (expired?): {0}")]
    Unauthorized(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
