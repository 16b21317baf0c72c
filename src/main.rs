//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; token acquisition is delegated to CredentialService.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vibe_check::adapters::catalog::{SpotifyAuthAdapter, SpotifyCatalogAdapter};
use vibe_check::adapters::sentiment::HuggingFaceAdapter;
use vibe_check::adapters::ui::tui::TuiInputPort;
use vibe_check::domain::SessionState;
use vibe_check::ports::{CatalogPort, CredentialPort, InputPort, SentimentPort};
use vibe_check::shared::config::AppConfig;
use vibe_check::shared::http::build_client;
use vibe_check::usecases::{CredentialService, RecommendationService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    vibe_check::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded; using defaults");
        AppConfig::default()
    });

    let timeout_secs = cfg.http_timeout_secs_or_default();
    let http = build_client(Duration::from_secs(timeout_secs))
        .map_err(|e| anyhow::anyhow!("HTTP client init failed: {}", e))?;
    info!(timeout_secs, "HTTP client ready");

    let session = Arc::new(RwLock::new(SessionState::new()));

    // --- Catalog credentials: acquired once, eagerly, racing with the first prompt ---
    if !cfg.is_catalog_configured() {
        warn!("SPOTIFY_CLIENT_ID / SPOTIFY_CLIENT_SECRET not set; recommendations will stay disabled");
    }
    let credentials: Arc<dyn CredentialPort> = Arc::new(SpotifyAuthAdapter::new(
        http.clone(),
        cfg.token_url_or_default(),
        cfg.spotify_client_id(),
        cfg.spotify_client_secret(),
    ));
    let credential_service = CredentialService::new(credentials, Arc::clone(&session));
    tokio::spawn(async move {
        credential_service.acquire().await;
    });

    // --- Sentiment inference ---
    let hf_key = cfg.hugging_face_api_key();
    if hf_key.is_none() {
        warn!("HUGGING_FACE_API_KEY not set; every mood will be treated as UNDEFINED");
    }
    info!(
        model = %cfg.sentiment_model_or_default(),
        url = %cfg.inference_url_or_default(),
        "sentiment classifier configured"
    );
    let sentiment: Arc<dyn SentimentPort> = Arc::new(HuggingFaceAdapter::new(
        http.clone(),
        cfg.inference_url_or_default(),
        hf_key,
        cfg.sentiment_model_or_default(),
    ));

    // --- Catalog gateway ---
    let catalog: Arc<dyn CatalogPort> = Arc::new(SpotifyCatalogAdapter::new(
        http,
        cfg.catalog_api_url_or_default(),
    ));

    let recommendation_service = Arc::new(RecommendationService::new(
        sentiment,
        catalog,
        Arc::clone(&session),
    ));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(recommendation_service));

    // --- Run (prompt -> classify -> recommend, until quit) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
