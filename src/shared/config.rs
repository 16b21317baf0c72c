//! Application configuration. Catalog/inference credentials, endpoints, HTTP timeout.

use serde::Deserialize;

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_CATALOG_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Music catalog (Spotify)
    // ─────────────────────────────────────────────────────────────────────────
    /// Client id. Read from VIBE_CHECK_SPOTIFY_CLIENT_ID or SPOTIFY_CLIENT_ID.
    #[serde(default)]
    pub spotify_client_id: Option<String>,

    /// Client secret. Read from VIBE_CHECK_SPOTIFY_CLIENT_SECRET or SPOTIFY_CLIENT_SECRET.
    #[serde(default)]
    pub spotify_client_secret: Option<String>,

    /// Token endpoint for the client-credentials exchange.
    #[serde(default)]
    pub token_url: Option<String>,

    /// Web API base URL (without trailing slash).
    #[serde(default)]
    pub catalog_api_url: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Sentiment inference (Hugging Face)
    // ─────────────────────────────────────────────────────────────────────────
    /// Inference API key. Read from VIBE_CHECK_HUGGING_FACE_API_KEY or HUGGING_FACE_API_KEY.
    #[serde(default)]
    pub hugging_face_api_key: Option<String>,

    /// Base URL; the model id is appended as a path segment.
    #[serde(default)]
    pub inference_url: Option<String>,

    #[serde(default)]
    pub sentiment_model: Option<String>,

    /// Per-request timeout for every outbound call.
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("VIBE_CHECK"));
        if let Ok(path) = std::env::var("VIBE_CHECK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // HTTP_TIMEOUT_SECS is read directly (no prefix) so .env can use HTTP_TIMEOUT_SECS=5
        if let Ok(s) = std::env::var("HTTP_TIMEOUT_SECS") {
            if let Ok(secs) = s.parse::<u64>() {
                cfg.http_timeout_secs = Some(secs);
            }
        }
        Ok(cfg)
    }

    /// Returns the HTTP timeout in seconds. Defaults to 10; zero is treated as unset.
    pub fn http_timeout_secs_or_default(&self) -> u64 {
        self.http_timeout_secs
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the catalog client id from config or SPOTIFY_CLIENT_ID env.
    pub fn spotify_client_id(&self) -> Option<String> {
        non_blank(
            self.spotify_client_id
                .clone()
                .or_else(|| std::env::var("SPOTIFY_CLIENT_ID").ok()),
        )
    }

    /// Returns the catalog client secret from config or SPOTIFY_CLIENT_SECRET env.
    pub fn spotify_client_secret(&self) -> Option<String> {
        non_blank(
            self.spotify_client_secret
                .clone()
                .or_else(|| std::env::var("SPOTIFY_CLIENT_SECRET").ok()),
        )
    }

    pub fn token_url_or_default(&self) -> String {
        self.token_url
            .clone()
            .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
    }

    pub fn catalog_api_url_or_default(&self) -> String {
        self.catalog_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_CATALOG_API_URL.to_string())
    }

    /// Returns true if both catalog credentials are present.
    pub fn is_catalog_configured(&self) -> bool {
        self.spotify_client_id().is_some() && self.spotify_client_secret().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inference Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the inference API key from config or HUGGING_FACE_API_KEY env.
    pub fn hugging_face_api_key(&self) -> Option<String> {
        non_blank(
            self.hugging_face_api_key
                .clone()
                .or_else(|| std::env::var("HUGGING_FACE_API_KEY").ok()),
        )
    }

    pub fn inference_url_or_default(&self) -> String {
        self.inference_url
            .clone()
            .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string())
    }

    pub fn sentiment_model_or_default(&self) -> String {
        self.sentiment_model
            .clone()
            .unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
