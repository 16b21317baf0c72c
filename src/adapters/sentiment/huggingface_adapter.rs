//! Hugging Face Inference API adapter for text classification.
//!
//! Implements `SentimentPort`: posts the raw text to the configured model and picks
//! the highest-scoring label. Accepts both the nested (`[[...]]`) and flat (`[...]`)
//! response layouts the API has used.

use crate::domain::{DomainError, SentimentLabel};
use crate::ports::SentimentPort;
use crate::shared::http::body_snippet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Inference adapter.
///
/// Works with the hosted Inference API or any endpoint that speaks the same
/// text-classification protocol (e.g. a self-hosted TGI/Inference Endpoint).
pub struct HuggingFaceAdapter {
    client: reqwest::Client,
    base_url: String,
    /// `None` degrades every call to `Undefined` without touching the network.
    api_key: Option<String>,
    model: String,
}

impl HuggingFaceAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `base_url` - Models base URL (e.g. "https://api-inference.huggingface.co/models")
    /// * `api_key` - Inference API key
    /// * `model` - Model id (e.g. "distilbert-base-uncased-finetuned-sst-2-english")
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        api_key: Option<String>,
        model: String,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    fn model_url(&self) -> String {
        format!("{}/{}", self.base_url, self.model)
    }

    /// Top-ranked label from a raw response body.
    fn top_label(body: &str) -> Result<SentimentLabel, DomainError> {
        let parsed: ClassificationResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::Classification(format!("Unexpected response structure: {}", e))
        })?;
        let candidates = match parsed {
            ClassificationResponse::Nested(mut batches) => {
                if batches.is_empty() {
                    Vec::new()
                } else {
                    batches.swap_remove(0)
                }
            }
            ClassificationResponse::Flat(candidates) => candidates,
        };

        let top = candidates
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| DomainError::Classification("empty label list".to_string()))?;

        SentimentLabel::from_model_label(&top.label).ok_or_else(|| {
            DomainError::Classification(format!("unrecognized label '{}'", top.label))
        })
    }
}

#[derive(Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

#[derive(Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[async_trait::async_trait]
impl SentimentPort for HuggingFaceAdapter {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, DomainError> {
        let Some(api_key) = &self.api_key else {
            return Err(DomainError::Classification(
                "inference API key not configured (HUGGING_FACE_API_KEY)".to_string(),
            ));
        };

        debug!(model = %self.model, text_len = text.len(), "sending text for classification");

        let response = self
            .client
            .post(self.model_url())
            .bearer_auth(api_key)
            .json(&ClassificationRequest { inputs: text })
            .send()
            .await
            .map_err(|e| DomainError::Classification(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::Classification(format!("Failed to read response body: {}", e))
        })?;
        if !status.is_success() {
            warn!(status = %status, body = %body_snippet(&body), "inference API returned error");
            return Err(DomainError::Classification(format!(
                "API error {}: {}",
                status,
                body_snippet(&body)
            )));
        }

        let label = Self::top_label(&body)?;
        info!(model = %self.model, %label, "sentiment classified");
        Ok(label)
    }
}
